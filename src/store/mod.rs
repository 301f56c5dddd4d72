//! The `TabularStore` trait: named tables of rows and cells.
//!
//! The ingest handler and the maintenance routines only talk to this trait.
//! [`crate::db::RedbStore`] is the durable backend, [`MemoryStore`] keeps
//! everything in process and is used by tests.

pub mod memory;

pub use memory::MemoryStore;

use crate::constants::HEADER_ROW;
use crate::error::Result;
use crate::models::{Cell, TableMeta};

/// Abstraction over a store of named, append-only tables.
///
/// Rows are addressed by zero-based index; row 0 is the header row. Every
/// method is a single bounded operation. No method locks across calls, so a
/// sequence of calls is not atomic.
pub trait TabularStore: Send + Sync {
    /// Human-readable name of the store
    fn name(&self) -> Result<String>;

    /// Look up a table by exact name. Returns `None` if it does not exist.
    fn table(&self, table: &str) -> Result<Option<TableMeta>>;

    /// Names of all tables, sorted
    fn table_names(&self) -> Result<Vec<String>>;

    /// Create an empty table. Creating a table that already exists is a no-op.
    fn create_table(&self, table: &str) -> Result<()>;

    /// All rows, header row included
    fn read_rows(&self, table: &str) -> Result<Vec<Vec<Cell>>>;

    /// Write one cell, growing the row (and the table) as needed
    fn write_cell(&self, table: &str, row: u64, column: u64, value: Cell) -> Result<()>;

    /// Append a row after the last one and return its index
    fn append_row(&self, table: &str, values: Vec<Cell>) -> Result<u64>;

    /// Remove every row and all formatting
    fn clear(&self, table: &str) -> Result<()>;

    /// Freeze the first `rows` rows as a non-scrolling header
    fn freeze_rows(&self, table: &str, rows: u64) -> Result<()>;

    /// Render a row in bold
    fn set_bold(&self, table: &str, row: u64) -> Result<()>;

    /// Column names from the header row
    ///
    /// An empty vector means the table has no header yet. Every stored cell
    /// is a column, including ones named `""`.
    fn read_header(&self, table: &str) -> Result<Vec<String>> {
        let rows = self.read_rows(table)?;
        let header = rows
            .into_iter()
            .nth(HEADER_ROW as usize)
            .unwrap_or_default()
            .iter()
            .map(Cell::to_string)
            .collect();
        Ok(header)
    }
}

/// Pad `row` with empty cells and set `column`
pub(crate) fn place_cell(row: &mut Vec<Cell>, column: u64, value: Cell) {
    let column = column as usize;
    if row.len() <= column {
        row.resize(column + 1, Cell::Empty);
    }
    row[column] = value;
}
