use crate::schema::app;

/// Database storage types, as they appear in CREATE TABLE statements.
///
/// Distinct from [`app::FieldTy`]: a `FieldTy` is the application's view of
/// a field, this is how the database stores the column. The keyword each
/// variant renders to is dialect-specific and supplied by the connection's
/// capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// A boolean value
    Boolean,

    /// A signed integer
    Integer,

    /// A double-precision floating point number
    Double,

    /// Unconstrained text type
    Text,
}

impl Type {
    pub fn from_app(ty: app::FieldTy) -> Type {
        match ty {
            app::FieldTy::Bool => Type::Boolean,
            app::FieldTy::I32 | app::FieldTy::I64 => Type::Integer,
            app::FieldTy::F64 => Type::Double,
            app::FieldTy::String => Type::Text,
        }
    }
}
