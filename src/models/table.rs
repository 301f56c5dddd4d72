use serde::{Deserialize, Serialize};

/// Per-table bookkeeping kept alongside the rows
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableMeta {
    /// Number of rows, header row included
    pub row_count: u64,
    /// Rows rendered in bold (the header row in practice)
    pub bold_rows: Vec<u64>,
    /// Number of leading rows frozen as a non-scrolling header
    pub frozen_rows: u64,
    /// Unix timestamp when the table was created
    pub created_at: i64,
}

impl TableMeta {
    pub fn new(created_at: i64) -> Self {
        Self {
            created_at,
            ..Default::default()
        }
    }

    pub fn is_bold(&self, row: u64) -> bool {
        self.bold_rows.contains(&row)
    }

    pub fn mark_bold(&mut self, row: u64) {
        if !self.is_bold(row) {
            self.bold_rows.push(row);
        }
    }

    /// Drop all content and formatting, keeping the frozen row setting
    pub fn reset(&mut self) {
        self.row_count = 0;
        self.bold_rows.clear();
    }
}
