//! Operator routines, run from the command line rather than over HTTP.

use crate::constants::HEADER_ROW;
use crate::error::Result;
use crate::models::Cell;
use crate::schemas::CATEGORIES;
use crate::store::TabularStore;

/// Whether a category table had to be created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Created,
    Existing,
}

/// Check that the store is reachable and every predefined category table exists
///
/// Missing tables are created empty; existing ones are left untouched.
pub fn verify_access(store: &dyn TabularStore) -> Result<Vec<(&'static str, TableStatus)>> {
    let name = store.name()?;
    tracing::info!("Successfully accessed store: {}", name);

    let mut report = Vec::with_capacity(CATEGORIES.len());
    for schema in &CATEGORIES {
        let status = if store.table(schema.name)?.is_some() {
            tracing::info!("Table exists: {}", schema.name);
            TableStatus::Existing
        } else {
            store.create_table(schema.name)?;
            tracing::info!("Created table: {}", schema.name);
            TableStatus::Created
        };
        report.push((schema.name, status));
    }

    tracing::info!("Access check completed successfully");
    Ok(report)
}

/// Reset every predefined category table to its header row
///
/// Destructive: existing rows in those tables are discarded. Tables outside
/// the predefined set are not touched.
pub fn initialize_schemas(store: &dyn TabularStore) -> Result<()> {
    for schema in &CATEGORIES {
        let columns = schema.columns();

        store.create_table(schema.name)?;
        store.clear(schema.name)?;
        store.append_row(schema.name, columns.iter().map(Cell::text).collect())?;
        store.set_bold(schema.name, HEADER_ROW)?;
        store.freeze_rows(schema.name, 1)?;

        tracing::info!(
            "Initialized table: {} with {} columns",
            schema.name,
            columns.len()
        );
    }

    tracing::info!("All tables initialized successfully");
    Ok(())
}
