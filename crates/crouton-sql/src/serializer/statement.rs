use super::ToSql;

use crate::stmt::Statement;

impl ToSql for &Statement {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
        }
    }
}
