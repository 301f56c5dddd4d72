use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{place_cell, TabularStore};
use crate::error::{AppError, Result};
use crate::models::{Cell, TableMeta};

#[derive(Debug, Default)]
struct MemoryTable {
    meta: TableMeta,
    rows: Vec<Vec<Cell>>,
}

/// In-process store backed by a mutex-guarded map
#[derive(Debug)]
pub struct MemoryStore {
    name: String,
    tables: Mutex<BTreeMap<String, MemoryTable>>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: Mutex::new(BTreeMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, MemoryTable>> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_table<T>(&self, table: &str, f: impl FnOnce(&mut MemoryTable) -> T) -> Result<T> {
        let mut tables = self.lock();
        let entry = tables
            .get_mut(table)
            .ok_or_else(|| AppError::TableNotFound(table.to_string()))?;
        Ok(f(entry))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new("memory")
    }
}

impl TabularStore for MemoryStore {
    fn name(&self) -> Result<String> {
        Ok(self.name.clone())
    }

    fn table(&self, table: &str) -> Result<Option<TableMeta>> {
        Ok(self.lock().get(table).map(|t| t.meta.clone()))
    }

    fn table_names(&self) -> Result<Vec<String>> {
        Ok(self.lock().keys().cloned().collect())
    }

    fn create_table(&self, table: &str) -> Result<()> {
        self.lock()
            .entry(table.to_string())
            .or_insert_with(|| MemoryTable {
                meta: TableMeta::new(Utc::now().timestamp()),
                rows: Vec::new(),
            });
        Ok(())
    }

    fn read_rows(&self, table: &str) -> Result<Vec<Vec<Cell>>> {
        self.with_table(table, |t| t.rows.clone())
    }

    fn write_cell(&self, table: &str, row: u64, column: u64, value: Cell) -> Result<()> {
        self.with_table(table, |t| {
            let index = row as usize;
            if t.rows.len() <= index {
                t.rows.resize(index + 1, Vec::new());
            }
            place_cell(&mut t.rows[index], column, value);
            t.meta.row_count = t.rows.len() as u64;
        })
    }

    fn append_row(&self, table: &str, values: Vec<Cell>) -> Result<u64> {
        self.with_table(table, |t| {
            t.rows.push(values);
            t.meta.row_count = t.rows.len() as u64;
            t.meta.row_count - 1
        })
    }

    fn clear(&self, table: &str) -> Result<()> {
        self.with_table(table, |t| {
            t.rows.clear();
            t.meta.reset();
        })
    }

    fn freeze_rows(&self, table: &str, rows: u64) -> Result<()> {
        self.with_table(table, |t| t.meta.frozen_rows = rows)
    }

    fn set_bold(&self, table: &str, row: u64) -> Result<()> {
        self.with_table(table, |t| t.meta.mark_bold(row))
    }
}
