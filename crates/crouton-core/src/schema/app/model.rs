use super::{Field, FieldId, FieldTy, IdColumn};
use crate::schema::Name;

use std::fmt;

/// A statically declared record type mapped to one database table.
///
/// The descriptor is attached to the model type at definition time,
/// registered once with the schema builder, and consulted read-only
/// thereafter.
#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Name of the model
    pub name: Name,

    /// Fields contained by the model, in declaration order
    pub fields: Vec<Field>,

    /// When set, the model maps to this table instead of the pluralized
    /// model name.
    pub table_name: Option<String>,

    /// Identifier column configuration
    pub id_column: IdColumn,
}

/// Uniquely identifies a model
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ModelId(pub usize);

impl Model {
    pub fn new(id: ModelId, name: &str) -> Self {
        Self {
            id,
            name: Name::new(name),
            fields: vec![],
            table_name: None,
            id_column: IdColumn::default(),
        }
    }

    /// Append a field. Fields lower to columns in the order they are
    /// declared here.
    pub fn field(mut self, name: &str, ty: FieldTy) -> Self {
        let index = self.fields.len();
        self.fields.push(Field {
            id: FieldId {
                model: self.id,
                index,
            },
            name: name.to_string(),
            ty,
        });
        self
    }

    /// Map the model to the given table name instead of the pluralized
    /// model name.
    pub fn table_name(mut self, name: &str) -> Self {
        self.table_name = Some(name.to_string());
        self
    }

    /// Override the identifier column name.
    ///
    /// A declared field carrying this name backs the primary key itself;
    /// otherwise a synthetic column with this name is appended.
    pub fn id_column_name(mut self, name: &str) -> Self {
        self.id_column.name = name.to_string();
        self
    }

    /// Override the identifier column type. Only consulted when the
    /// identifier column is synthesized; a declared field's own type always
    /// wins.
    pub fn id_column_ty(mut self, ty: FieldTy) -> Self {
        self.id_column.ty = ty;
        self
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
