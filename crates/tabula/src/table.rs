//! The table type: content accumulation and cached rendering.
//!
//! A [`Table`] collects a title, column names, and rows of string cells,
//! then renders them as a fixed-width bordered ASCII table. The rendered
//! form is cached: mutating the table marks the cache dirty and the next
//! render recomputes the layout, while back-to-back renders reuse it.
//!
//! # Example
//!
//! ```rust
//! use tabula::Table;
//!
//! let mut table = Table::new();
//! table.set_title("Inventory");
//! table.add_column("Item")?;
//! table.add_column("Qty")?;
//! table.add_row(vec!["bolt".into(), "40".into()])?;
//!
//! println!("{}", table.render()?);
//! # Ok::<(), tabula::TableError>(())
//! ```

use std::io::Write;

use tracing::{debug, warn};

use crate::error::TableError;
use crate::layout::Layout;

/// Cache state for the computed layout.
///
/// Every mutation transitions to `Dirty`; rendering transitions back to
/// `Clean` by recomputing the layout. The tag is the single source of truth
/// for cache validity.
#[derive(Debug, Clone)]
enum Cache {
    /// Content has changed since the layout was last computed.
    Dirty,
    /// The layout matches the current content.
    Clean(Layout),
}

/// An ASCII table with a title, column headers, and rows of string cells.
///
/// Columns are locked once the first row is accepted; rows must match the
/// column count. All failures are reported as [`TableError`] values and
/// leave the table usable.
#[derive(Debug, Clone)]
pub struct Table {
    title: String,
    column_names: Vec<String>,
    rows: Vec<Vec<String>>,
    has_rows: bool,
    cache: Cache,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// Creates a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: String::new(),
            column_names: Vec::new(),
            rows: Vec::new(),
            has_rows: false,
            cache: Cache::Dirty,
        }
    }

    /// Replaces the table title. An empty title leaves the table incomplete
    /// for rendering purposes.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.cache = Cache::Dirty;
    }

    /// Appends a column.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::SchemaLocked`] once any row has been accepted;
    /// the column is not added.
    pub fn add_column(&mut self, name: impl Into<String>) -> Result<(), TableError> {
        if self.has_rows {
            return Err(TableError::SchemaLocked {
                title: self.title.clone(),
            });
        }
        self.column_names.push(name.into());
        self.cache = Cache::Dirty;
        Ok(())
    }

    /// Appends a row.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::RowArityMismatch`] when the cell count differs
    /// from the column count; the row is not appended.
    pub fn add_row(&mut self, cells: Vec<String>) -> Result<(), TableError> {
        if cells.len() != self.column_names.len() {
            return Err(TableError::RowArityMismatch {
                title: self.title.clone(),
                expected: self.column_names.len(),
                actual: cells.len(),
            });
        }
        self.rows.push(cells);
        self.has_rows = true;
        self.cache = Cache::Dirty;
        Ok(())
    }

    /// Appends a batch of rows, checking each row's arity independently.
    ///
    /// Unlike [`Table::add_row`], a mismatched row is reported in the
    /// returned diagnostics but appended anyway. This divergence is
    /// long-standing observed behavior; callers that need strict arity
    /// should add rows one at a time.
    pub fn add_rows(&mut self, rows: Vec<Vec<String>>) -> Vec<TableError> {
        let mut diagnostics = Vec::new();
        let any = !rows.is_empty();
        for cells in rows {
            if cells.len() != self.column_names.len() {
                warn!(
                    expected = self.column_names.len(),
                    actual = cells.len(),
                    "appending row with mismatched cell count"
                );
                diagnostics.push(TableError::RowArityMismatch {
                    title: self.title.clone(),
                    expected: self.column_names.len(),
                    actual: cells.len(),
                });
            }
            self.rows.push(cells);
        }
        if any {
            self.has_rows = true;
        }
        self.cache = Cache::Dirty;
        diagnostics
    }

    /// Parses rows from a string value with the given cell separator, one
    /// row per line, and appends them through the bulk path.
    pub fn add_values(&mut self, value: &str, separator: &str) -> Vec<TableError> {
        let rows: Vec<Vec<String>> = value
            .lines()
            .map(|line| line.split(separator).map(String::from).collect())
            .collect();
        self.add_rows(rows)
    }

    /// Returns the table title (empty when unset).
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the column names.
    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Returns the rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns whether the column schema is locked (at least one row has
    /// been accepted).
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.has_rows
    }

    /// Returns whether the cached layout is valid for the current content.
    #[must_use]
    pub fn is_cached(&self) -> bool {
        matches!(self.cache, Cache::Clean(_))
    }

    /// Returns the computed column widths, or `None` while the cache is
    /// dirty.
    #[must_use]
    pub fn column_widths(&self) -> Option<&[usize]> {
        match &self.cache {
            Cache::Clean(layout) => Some(&layout.widths),
            Cache::Dirty => None,
        }
    }

    /// Renders the table, recomputing the layout only when content has
    /// changed since the last render.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Incomplete`] when the title is empty or the
    /// table has no columns or no rows. The table is left unchanged.
    pub fn render(&mut self) -> Result<&str, TableError> {
        if self.title.is_empty() || self.column_names.is_empty() || self.rows.is_empty() {
            return Err(TableError::Incomplete {
                title: self.title.clone(),
                columns: self.column_names.len(),
                rows: self.rows.len(),
            });
        }
        if let Cache::Dirty = self.cache {
            debug!(
                columns = self.column_names.len(),
                rows = self.rows.len(),
                "rebuilding table layout"
            );
            self.cache = Cache::Clean(Layout::compute(
                &self.title,
                &self.column_names,
                &self.rows,
            ));
        }
        match &self.cache {
            Cache::Clean(layout) => Ok(&layout.rendered),
            Cache::Dirty => unreachable!("layout cache is clean after rebuild"),
        }
    }

    /// Renders the table and writes it, with a trailing newline, to the
    /// given writer.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Incomplete`] as [`Table::render`] does, or
    /// [`TableError::Io`] when the write fails.
    pub fn print_to(&mut self, writer: &mut impl Write) -> Result<(), TableError> {
        let rendered = self.render()?;
        writer.write_all(rendered.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    /// Renders the table and writes it to standard output.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Table::print_to`].
    pub fn print(&mut self) -> Result<(), TableError> {
        self.print_to(&mut std::io::stdout().lock())
    }

    /// Clears all content, returning the table to its newly-created state.
    /// The next render recomputes everything (and fails until a title,
    /// columns, and rows are set again).
    pub fn reset(&mut self) {
        self.title.clear();
        self.column_names.clear();
        self.rows.clear();
        self.has_rows = false;
        self.cache = Cache::Dirty;
    }
}
