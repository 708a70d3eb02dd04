use crouton_core::schema::db::{self, Column};

/// One column definition within a CREATE TABLE statement.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: String,
    pub ty: db::Type,
    pub nullable: bool,
    pub primary_key: bool,
    pub auto_increment: bool,
}

impl ColumnDef {
    pub(crate) fn from_schema(column: &Column) -> ColumnDef {
        ColumnDef {
            name: column.name.clone(),
            ty: column.ty,
            nullable: column.nullable,
            primary_key: column.primary_key,
            auto_increment: column.auto_increment,
        }
    }
}
