pub mod tables;

use chrono::Utc;
use redb::{Database, ReadableTable};
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::{Cell, TableMeta};
use crate::store::{place_cell, TabularStore};

type RowsTable<'txn> = redb::Table<'txn, (&'static str, u64), &'static [u8]>;

/// Durable store backed by a single redb file
///
/// Each trait method runs in its own transaction.
pub struct RedbStore {
    db: Database,
    name: String,
}

/// Open or create the redb store at the given path
///
/// Creates all required tables on first run.
pub fn open_database(path: impl AsRef<Path>) -> Result<RedbStore> {
    let path = path.as_ref();
    tracing::info!("Opening store at: {:?}", path);

    // Create parent directory if it doesn't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                tracing::error!("Failed to create store directory: {}", e);
                e
            })?;
        }
    }

    let db = Database::create(path)?;

    let write_txn = db.begin_write()?;
    {
        let _ = write_txn.open_table(tables::TABLES)?;
        let _ = write_txn.open_table(tables::ROWS)?;
    }
    write_txn.commit()?;

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    tracing::info!("Store initialized successfully");

    Ok(RedbStore { db, name })
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(bincode::deserialize(bytes)?)
}

fn load_meta<T>(tables: &T, table: &str) -> Result<Option<TableMeta>>
where
    T: ReadableTable<&'static str, &'static [u8]>,
{
    match tables.get(table)? {
        Some(bytes) => Ok(Some(decode(bytes.value())?)),
        None => Ok(None),
    }
}

fn load_row<T>(rows: &T, table: &str, row: u64) -> Result<Vec<Cell>>
where
    T: ReadableTable<(&'static str, u64), &'static [u8]>,
{
    match rows.get((table, row))? {
        Some(bytes) => decode(bytes.value()),
        None => Ok(Vec::new()),
    }
}

impl RedbStore {
    /// Run `f` against the table's metadata and rows inside one write
    /// transaction, persisting the metadata afterwards
    fn update<T>(
        &self,
        table: &str,
        f: impl FnOnce(&mut TableMeta, &mut RowsTable<'_>) -> Result<T>,
    ) -> Result<T> {
        let write_txn = self.db.begin_write()?;
        let result = {
            let mut tables = write_txn.open_table(tables::TABLES)?;
            let mut meta = load_meta(&tables, table)?
                .ok_or_else(|| AppError::TableNotFound(table.to_string()))?;

            let mut rows = write_txn.open_table(tables::ROWS)?;
            let result = f(&mut meta, &mut rows)?;

            let meta_bytes = bincode::serialize(&meta)?;
            tables.insert(table, meta_bytes.as_slice())?;
            result
        };
        write_txn.commit()?;
        Ok(result)
    }
}

impl TabularStore for RedbStore {
    fn name(&self) -> Result<String> {
        Ok(self.name.clone())
    }

    fn table(&self, table: &str) -> Result<Option<TableMeta>> {
        let read_txn = self.db.begin_read()?;
        let tables = read_txn.open_table(tables::TABLES)?;
        load_meta(&tables, table)
    }

    fn table_names(&self) -> Result<Vec<String>> {
        let read_txn = self.db.begin_read()?;
        let tables = read_txn.open_table(tables::TABLES)?;

        let mut names = Vec::new();
        for entry in tables.iter()? {
            let (name, _) = entry?;
            names.push(name.value().to_string());
        }
        Ok(names)
    }

    fn create_table(&self, table: &str) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut tables = write_txn.open_table(tables::TABLES)?;
            if load_meta(&tables, table)?.is_some() {
                return Ok(());
            }

            let meta = TableMeta::new(Utc::now().timestamp());
            let bytes = bincode::serialize(&meta)?;
            tables.insert(table, bytes.as_slice())?;
        }
        write_txn.commit()?;

        tracing::debug!("Created table {}", table);
        Ok(())
    }

    fn read_rows(&self, table: &str) -> Result<Vec<Vec<Cell>>> {
        let read_txn = self.db.begin_read()?;
        let tables = read_txn.open_table(tables::TABLES)?;
        let meta = load_meta(&tables, table)?
            .ok_or_else(|| AppError::TableNotFound(table.to_string()))?;

        let rows = read_txn.open_table(tables::ROWS)?;
        (0..meta.row_count)
            .map(|index| load_row(&rows, table, index))
            .collect()
    }

    fn write_cell(&self, table: &str, row: u64, column: u64, value: Cell) -> Result<()> {
        self.update(table, |meta, rows| {
            let mut cells = load_row(&*rows, table, row)?;
            place_cell(&mut cells, column, value);

            let bytes = bincode::serialize(&cells)?;
            rows.insert((table, row), bytes.as_slice())?;

            if row >= meta.row_count {
                meta.row_count = row + 1;
            }
            Ok(())
        })
    }

    fn append_row(&self, table: &str, values: Vec<Cell>) -> Result<u64> {
        self.update(table, |meta, rows| {
            let index = meta.row_count;
            let bytes = bincode::serialize(&values)?;
            rows.insert((table, index), bytes.as_slice())?;
            meta.row_count += 1;
            Ok(index)
        })
    }

    fn clear(&self, table: &str) -> Result<()> {
        self.update(table, |meta, rows| {
            for index in 0..meta.row_count {
                rows.remove((table, index))?;
            }
            meta.reset();
            Ok(())
        })
    }

    fn freeze_rows(&self, table: &str, count: u64) -> Result<()> {
        self.update(table, |meta, _| {
            meta.frozen_rows = count;
            Ok(())
        })
    }

    fn set_bold(&self, table: &str, row: u64) -> Result<()> {
        self.update(table, |meta, _| {
            meta.mark_bold(row);
            Ok(())
        })
    }
}
