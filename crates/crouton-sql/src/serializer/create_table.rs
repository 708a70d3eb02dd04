use super::{Comma, ToSql};

use crate::stmt;

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let columns = Comma(&self.columns);

        fmt!(f, "CREATE TABLE ", &self.name, " (", columns, ")");
    }
}
