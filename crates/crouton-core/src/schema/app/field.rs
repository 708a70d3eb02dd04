use super::ModelId;

use std::fmt;

#[derive(Debug, Clone)]
pub struct Field {
    /// Uniquely identifies the field within the containing model
    pub id: FieldId,

    /// The field name
    pub name: String,

    /// The field's declared value type
    pub ty: FieldTy,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FieldId {
    pub model: ModelId,
    pub index: usize,
}

/// Scalar value types a model field can declare.
///
/// The set is closed: every variant has an entry in the storage type
/// mapping, so an unmappable field type cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTy {
    Bool,
    I32,
    I64,
    F64,
    String,
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({}/{})", self.model.0, self.index)
    }
}
