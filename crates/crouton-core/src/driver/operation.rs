mod drop_table;
pub use drop_table::DropTable;

mod exec_sql;
pub use exec_sql::ExecSql;

/// A database operation handed to a connection for execution.
#[derive(Debug, Clone)]
pub enum Operation {
    /// Execute a fully rendered SQL statement
    ExecSql(ExecSql),

    /// Drop a table
    DropTable(DropTable),
}
