mod field;
pub use field::{Field, FieldId, FieldTy};

mod id_column;
pub use id_column::IdColumn;

mod model;
pub use model::{Model, ModelId};

mod schema;
pub use schema::Schema;
