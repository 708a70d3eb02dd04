use super::Operation;
use crate::schema::db::TableId;

/// Drop a table.
///
/// Carried in structured form; the connection renders the statement in its
/// own dialect.
#[derive(Debug, Clone)]
pub struct DropTable {
    /// The table to drop
    pub table: TableId,
}

impl From<DropTable> for Operation {
    fn from(value: DropTable) -> Self {
        Operation::DropTable(value)
    }
}
