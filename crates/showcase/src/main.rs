#![forbid(unsafe_code)]

//! # Showcase
//!
//! Small demonstration of the `tabula` table renderer: builds a table,
//! prints it, resets it, and shows that rendering an empty table reports a
//! structured error instead of producing output.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p showcase
//! ```
//!
//! Set `RUST_LOG=debug` to watch the layout cache being rebuilt.

use tabula::Table;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let mut table = Table::new();
    table.set_title("My Friends' Gaming GPUs");
    table.add_column("Vendor")?;
    table.add_column("GPU Name")?;
    table.add_column("Release Year")?;

    let rows = vec![
        vec!["Nvidia".into(), "GTX 980 Ti".into(), "2015".into()],
        vec!["Nvidia".into(), "GTX 1070".into(), "2016".into()],
        vec!["Nvidia".into(), "GTX 1080".into(), "2016".into()],
        vec!["Nvidia".into(), "RTX 2080".into(), "2018".into()],
    ];
    for diagnostic in table.add_rows(rows) {
        warn!(%diagnostic, "row was appended despite a mismatch");
    }

    table.print()?;

    // A second print reuses the cached layout.
    table.print()?;

    table.reset();
    if let Err(err) = table.render() {
        warn!(%err, "table is incomplete after reset");
    }

    Ok(())
}
