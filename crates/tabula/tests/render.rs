//! End-to-end rendering tests against known-good output.

use tabula::{Table, TableError};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn gpu_table() -> Table {
    let mut table = Table::new();
    table.set_title("My Friends' Gaming GPUs");
    table.add_column("Vendor").unwrap();
    table.add_column("GPU Name").unwrap();
    table.add_column("Release Year").unwrap();
    let diagnostics = table.add_rows(vec![
        strings(&["Nvidia", "GTX 980 Ti", "2015"]),
        strings(&["Nvidia", "GTX 1070", "2016"]),
        strings(&["Nvidia", "GTX 1080", "2016"]),
        strings(&["Nvidia", "RTX 2080", "2018"]),
    ]);
    assert!(diagnostics.is_empty());
    table
}

#[test]
fn gpu_table_renders_exactly() {
    let mut table = gpu_table();
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
--------------------------------------";
    assert_eq!(table.render().unwrap(), expected);
}

#[test]
fn line_count_is_five_plus_rows() {
    let mut table = gpu_table();
    let rendered = table.render().unwrap();
    assert_eq!(rendered.lines().count(), 5 + 4);

    let width = rendered.lines().next().unwrap().chars().count();
    for line in rendered.lines() {
        assert_eq!(line.chars().count(), width);
    }
}

#[test]
fn column_widths_follow_longest_content() {
    let mut table = gpu_table();
    table.render().unwrap();
    // "Vendor"=6, "GTX 980 Ti"=10, "Release Year"=12.
    assert_eq!(table.column_widths(), Some(&[6, 10, 12][..]));
}

#[test]
fn worked_example_divider_length() {
    // Columns ["A", "BB"] with row ["x", "y"]: widths [1, 2] and a table
    // width of (1+3)+(2+3)+1 = 10.
    let mut table = Table::new();
    table.set_title("T");
    table.add_column("A").unwrap();
    table.add_column("BB").unwrap();
    table.add_row(strings(&["x", "y"])).unwrap();

    let rendered = table.render().unwrap();
    assert_eq!(rendered.lines().next().unwrap(), "----------");
    assert_eq!(rendered.lines().nth(1).unwrap(), "|   T    |");
}

#[test]
fn reset_then_render_is_incomplete() {
    let mut table = gpu_table();
    table.render().unwrap();

    table.reset();
    let err = table.render().unwrap_err();
    assert!(matches!(
        err,
        TableError::Incomplete {
            columns: 0,
            rows: 0,
            ..
        }
    ));
}

#[test]
fn print_to_matches_render_plus_newline() {
    let mut table = gpu_table();
    let rendered = table.render().unwrap().to_string();

    let mut out = Vec::new();
    table.print_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), format!("{rendered}\n"));
}
