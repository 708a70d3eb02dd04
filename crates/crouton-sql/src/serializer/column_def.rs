use super::{Ident, ToSql};

use crate::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let name = Ident(&self.name);

        fmt!(f, name, " ", self.ty);

        // Constraint order is part of the rendered contract: a promoted
        // identifier field reads `PRIMARY KEY NOT NULL`, a synthesized one
        // reads `AUTO_INCREMENT PRIMARY KEY` with no nullability clause.
        if self.primary_key {
            if self.auto_increment {
                fmt!(f, " AUTO_INCREMENT PRIMARY KEY");
            } else {
                fmt!(f, " PRIMARY KEY NOT NULL");
            }
        } else if !self.nullable {
            fmt!(f, " NOT NULL");
        }
    }
}
