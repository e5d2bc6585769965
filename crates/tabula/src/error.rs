//! Error types for table construction and rendering.
//!
//! Every failure in this crate is non-fatal: an operation that fails leaves
//! the table in a well-defined state and the caller is free to continue.
//! Errors carry the same facts a diagnostic message would (the offending
//! counts and the table title), so callers can inspect them programmatically
//! or just display them.

use thiserror::Error;

/// Error produced by table mutation or rendering.
#[derive(Error, Debug)]
pub enum TableError {
    /// A column was added after the first row; the schema is locked.
    #[error("table '{title}' already has rows; additional columns cannot be added")]
    SchemaLocked {
        /// Title of the table at the time of the attempt.
        title: String,
    },

    /// A row's cell count does not match the table's column count.
    #[error("row has {actual} cells while table '{title}' requires {expected} cells per row")]
    RowArityMismatch {
        /// Title of the table at the time of the attempt.
        title: String,
        /// The table's column count.
        expected: usize,
        /// The offending row's cell count.
        actual: usize,
    },

    /// Render was called before the table had a title, columns, and rows.
    #[error(
        "missing data to render table: title '{title}' (must not be empty), \
         {columns} columns (min 1), {rows} rows (min 1)"
    )]
    Incomplete {
        /// Current title (empty when unset).
        title: String,
        /// Current column count.
        columns: usize,
        /// Current row count.
        rows: usize,
    },

    /// Writing the rendered table to an output stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
