use redb::TableDefinition;

/// Tables table: table name -> TableMeta (serialized)
pub const TABLES: TableDefinition<&str, &[u8]> = TableDefinition::new("tables");

/// Rows table: (table name, row index) -> Vec<Cell> (serialized)
/// Row 0 of every table is its header row
pub const ROWS: TableDefinition<(&str, u64), &[u8]> = TableDefinition::new("rows");
