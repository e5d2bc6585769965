//! Layout computation for bordered ASCII tables.
//!
//! A [`Layout`] is the fully derived form of a table's content: per-column
//! widths, the divider line, and every formatted line of output, assembled
//! once and reused until the content changes.

/// Display width of a piece of cell text.
///
/// Counts raw `char` units rather than terminal cells. Wide (CJK) and
/// combining characters will misalign the table; this mirrors the crate's
/// documented single-width-character limitation.
pub(crate) fn text_width(s: &str) -> usize {
    s.chars().count()
}

/// Centers `text` within `width` columns.
///
/// The padding deficit is split with the smaller half on the left: for an
/// odd deficit the extra space goes to the right of the text. A deficit of
/// zero returns the text unchanged; `width` smaller than the text returns
/// the text unpadded rather than truncating it.
pub(crate) fn center(text: &str, width: usize) -> String {
    let deficit = width.saturating_sub(text_width(text));
    let left = deficit / 2;
    let right = deficit - left;
    let mut out = String::with_capacity(text.len() + deficit);
    for _ in 0..left {
        out.push(' ');
    }
    out.push_str(text);
    for _ in 0..right {
        out.push(' ');
    }
    out
}

/// Cached rendering of a table's content.
///
/// Validity is tracked by the table's cache tag, not by this type: a
/// `Layout` that exists is always internally consistent with the content it
/// was computed from.
#[derive(Debug, Clone)]
pub(crate) struct Layout {
    /// Width reserved for each column's content.
    pub widths: Vec<usize>,
    /// Full-width run of `-` characters.
    pub divider: String,
    /// Title centered across the whole content area.
    pub title_line: String,
    /// Column names, each centered within its column.
    pub header_line: String,
    /// One formatted line per row, in insertion order.
    pub row_lines: Vec<String>,
    /// The assembled table text, lines joined with `\n`.
    pub rendered: String,
}

impl Layout {
    /// Computes the layout for the given content.
    ///
    /// Rows are expected to match the column count; rows that do not (the
    /// permissive bulk-add path can leave them in the table) are rendered
    /// cell-for-cell and produce ragged lines rather than being skipped.
    pub(crate) fn compute(title: &str, columns: &[String], rows: &[Vec<String>]) -> Self {
        // Column width: the widest of the header and every cell beneath it.
        let widths: Vec<usize> = columns
            .iter()
            .enumerate()
            .map(|(i, name)| {
                rows.iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| text_width(cell))
                    .fold(text_width(name), usize::max)
            })
            .collect();

        // Each column contributes "| " on its left and " " on its right;
        // the final "|" closes the table.
        let table_width: usize = widths.iter().map(|w| w + 3).sum::<usize>() + 1;
        let divider = "-".repeat(table_width);

        // The content area excludes the outer "| " and " |" frames.
        let title_line = format!("| {} |", center(title, table_width - 4));

        let mut header_line = String::with_capacity(table_width);
        for (name, width) in columns.iter().zip(&widths) {
            header_line.push_str("| ");
            header_line.push_str(&center(name, *width));
            header_line.push(' ');
        }
        header_line.push('|');

        let row_lines: Vec<String> = rows
            .iter()
            .map(|row| {
                let mut line = String::with_capacity(table_width);
                for (i, cell) in row.iter().enumerate() {
                    // Cells past the last column get no extra padding.
                    let width = widths.get(i).copied().unwrap_or_else(|| text_width(cell));
                    line.push_str("| ");
                    line.push_str(&center(cell, width));
                    line.push(' ');
                }
                line.push('|');
                line
            })
            .collect();

        let mut layout = Self {
            widths,
            divider,
            title_line,
            header_line,
            row_lines,
            rendered: String::new(),
        };
        layout.rendered = layout.assemble();
        layout
    }

    /// Joins the formatted lines into the final table text: divider, title,
    /// divider, header, divider, rows, divider. No separator lines between
    /// individual rows.
    fn assemble(&self) -> String {
        let line_width = self.divider.len() + 1;
        let mut rendered = String::with_capacity(line_width * (6 + self.row_lines.len()));
        rendered.push_str(&self.divider);
        rendered.push('\n');
        rendered.push_str(&self.title_line);
        rendered.push('\n');
        rendered.push_str(&self.divider);
        rendered.push('\n');
        rendered.push_str(&self.header_line);
        rendered.push('\n');
        rendered.push_str(&self.divider);
        for line in &self.row_lines {
            rendered.push('\n');
            rendered.push_str(line);
        }
        rendered.push('\n');
        rendered.push_str(&self.divider);
        rendered
    }
}
