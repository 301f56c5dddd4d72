//! Appending form submissions to their category table.

use crate::constants::HEADER_ROW;
use crate::error::Result;
use crate::models::{Cell, Submission};
use crate::store::TabularStore;

/// What a successful ingest did to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReceipt {
    pub category: String,
    /// Index of the appended row
    pub row: u64,
    pub created_table: bool,
    /// Columns added to the header by this submission
    pub new_columns: Vec<String>,
}

/// Decode a raw body and append it to its category table
///
/// Decoding happens before any store access, so a malformed body never
/// mutates the store.
pub fn handle_submission(store: &dyn TabularStore, raw_body: &str) -> Result<IngestReceipt> {
    let submission = Submission::parse(raw_body)?;
    append_submission(store, &submission)
}

/// Append a decoded submission, growing the table's header as needed
pub fn append_submission(
    store: &dyn TabularStore,
    submission: &Submission,
) -> Result<IngestReceipt> {
    let category = submission.category();

    let (created_table, has_header) = match store.table(&category)? {
        Some(meta) => (false, meta.row_count > HEADER_ROW),
        None => {
            store.create_table(&category)?;
            tracing::info!("Created table for category {}", category);
            (true, false)
        }
    };

    let mut new_columns = Vec::new();
    let mut headers = if has_header {
        store.read_header(&category)?
    } else {
        let header_row: Vec<Cell> = submission.keys().map(Cell::text).collect();
        store.append_row(&category, header_row)?;
        store.set_bold(&category, HEADER_ROW)?;
        new_columns.extend(submission.keys().map(str::to_owned));
        store.read_header(&category)?
    };

    let missing: Vec<String> = submission
        .keys()
        .filter(|key| !headers.iter().any(|h| h == key))
        .map(str::to_owned)
        .collect();

    for key in missing {
        let column = headers.len() as u64;
        store.write_cell(&category, HEADER_ROW, column, Cell::text(key.as_str()))?;
        tracing::debug!("Added column {} to {} at {}", key, category, column);
        headers.push(key.clone());
        new_columns.push(key);
    }

    let row = store.append_row(&category, submission.project(&headers))?;

    tracing::info!(
        "Appended row {} to {} ({} columns, {} new)",
        row,
        category,
        headers.len(),
        new_columns.len()
    );

    Ok(IngestReceipt {
        category,
        row,
        created_table,
        new_columns,
    })
}
