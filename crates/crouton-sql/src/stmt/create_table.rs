use super::*;

use crouton_core::schema::db::Table;

/// A statement to create a SQL table.
#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: Name,

    /// Column definitions, in lowered column order
    pub columns: Vec<ColumnDef>,
}

impl Statement {
    pub fn create_table(table: &Table) -> Self {
        CreateTable {
            name: Name::from(&table.name[..]),
            columns: table.columns.iter().map(ColumnDef::from_schema).collect(),
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
