//! Integration tests running the showcase binary end to end.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn prints_the_gpu_table_twice() {
    let expected = "\
--------------------------------------
|      My Friends' Gaming GPUs       |
--------------------------------------
| Vendor |  GPU Name  | Release Year |
--------------------------------------
| Nvidia | GTX 980 Ti |     2015     |
| Nvidia |  GTX 1070  |     2016     |
| Nvidia |  GTX 1080  |     2016     |
| Nvidia |  RTX 2080  |     2018     |
--------------------------------------
";

    Command::cargo_bin("showcase")
        .unwrap()
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(format!("{expected}{expected}"));
}

#[test]
fn reports_incomplete_table_after_reset() {
    Command::cargo_bin("showcase")
        .unwrap()
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("table is incomplete after reset"));
}
