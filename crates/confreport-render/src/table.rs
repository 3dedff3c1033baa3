//! Handle on the docket table's content.
//!
//! Mirrors the widget calls the page makes: clear, add rows, draw. There is
//! no incremental update; every conference load replaces the whole body.

use crate::cell::DocketRow;
use crate::html;

#[derive(Debug, Default)]
pub struct DocketTable {
    rows: Vec<DocketRow>,
    draws: u64,
}

impl DocketTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn add_rows(&mut self, rows: impl IntoIterator<Item = DocketRow>) {
        self.rows.extend(rows);
    }

    /// Clear, repopulate and draw in one step.
    pub fn replace(&mut self, rows: Vec<DocketRow>) {
        self.clear();
        self.add_rows(rows);
        self.draws += 1;
    }

    pub fn rows(&self) -> &[DocketRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of completed replacements.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// `<tbody>` markup for the current rows.
    pub fn draw(&self) -> String {
        let mut out = String::from("<tbody>\n");
        for row in &self.rows {
            out.push_str(&html::row_html(row));
            out.push('\n');
        }
        out.push_str("</tbody>");
        out
    }
}
