#![forbid(unsafe_code)]
// Allow these clippy lints for API ergonomics
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_panics_doc)]

//! # Tabula
//!
//! A small table-layout engine for console output: accumulate a title,
//! column headers, and rows of string cells, then render them as a
//! fixed-width bordered ASCII table with centered content.
//!
//! The computed layout (column widths, divider, and every formatted line)
//! is cached and only recomputed when the content changes, so repeated
//! renders of an unchanged table are cheap.
//!
//! ## Quick Start
//!
//! ```rust
//! use tabula::Table;
//!
//! let mut table = Table::new();
//! table.set_title("My Friends' Gaming GPUs");
//! table.add_column("Vendor")?;
//! table.add_column("GPU Name")?;
//! table.add_column("Release Year")?;
//! table.add_row(vec!["Nvidia".into(), "GTX 980 Ti".into(), "2015".into()])?;
//!
//! println!("{}", table.render()?);
//! # Ok::<(), tabula::TableError>(())
//! ```
//!
//! ## Error handling
//!
//! Nothing in this crate panics or prints diagnostics on its own. Every
//! failure — adding a column after the schema is locked, a row with the
//! wrong cell count, rendering an incomplete table — comes back as a
//! [`TableError`] value and leaves the table in a continuable state:
//!
//! ```rust
//! use tabula::{Table, TableError};
//!
//! let mut table = Table::new();
//! assert!(matches!(table.render(), Err(TableError::Incomplete { .. })));
//! ```
//!
//! ## Limitations
//!
//! Cell text is measured in raw `char` units, not terminal display cells;
//! wide or combining characters will misalign columns. Cells must not
//! contain line breaks, and a title wider than the combined columns
//! produces a ragged title line.

pub mod error;
mod layout;
pub mod table;

// Re-exports
pub use error::TableError;
pub use table::Table;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::TableError;
    pub use crate::table::Table;
}
