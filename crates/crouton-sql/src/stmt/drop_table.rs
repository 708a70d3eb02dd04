use super::*;

use crouton_core::schema::db::Table;

/// A statement to drop a SQL table.
#[derive(Debug, Clone)]
pub struct DropTable {
    /// Name of the table.
    pub name: Name,
}

impl Statement {
    /// Drops a table.
    pub fn drop_table(table: &Table) -> Self {
        DropTable {
            name: Name::from(&table.name[..]),
        }
        .into()
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}
