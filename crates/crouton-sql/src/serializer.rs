#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Period};

mod ident;
use ident::Ident;

// Fragment serializers
mod column_def;
mod create_table;
mod drop_table;
mod name;
mod statement;
mod ty;

use crate::stmt::Statement;

use crouton_core::{
    driver::{Capability, Operation},
    schema::db,
};

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Schema against which statements are serialized
    schema: &'a db::Schema,

    /// Capability of the connected database; supplies the dialect's
    /// storage type spellings.
    capability: &'a Capability,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl<'a> Serializer<'a> {
    pub fn new(schema: &'a db::Schema, capability: &'a Capability) -> Serializer<'a> {
        Serializer { schema, capability }
    }

    /// Render a statement. A fresh string is produced on every call;
    /// nothing is cached between calls.
    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt);

        ret
    }

    /// Render a structured driver operation to SQL.
    ///
    /// Raw statements pass through untouched; structured operations are
    /// resolved against the schema and rendered like any other statement.
    pub fn serialize_operation(&self, op: &Operation) -> String {
        match op {
            Operation::ExecSql(op) => op.sql.clone(),
            Operation::DropTable(op) => {
                self.serialize(&Statement::drop_table(self.schema.table(op.table)))
            }
        }
    }
}
