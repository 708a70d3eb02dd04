use super::FieldTy;

/// Identifier column configuration for a model.
///
/// When a declared field carries the configured name, that field backs the
/// table's primary key and `ty` is ignored. Otherwise a synthetic
/// auto-increment column with this name and type is appended to the table.
#[derive(Debug, Clone)]
pub struct IdColumn {
    /// Name of the identifier column
    pub name: String,

    /// Type of the identifier column when it is synthesized
    pub ty: FieldTy,
}

impl Default for IdColumn {
    fn default() -> Self {
        Self {
            name: "id".to_string(),
            ty: FieldTy::I64,
        }
    }
}
