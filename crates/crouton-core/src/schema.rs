pub mod app;

mod builder;
pub use builder::Builder;

pub mod db;

pub mod mapping;
use mapping::Mapping;

mod name;
pub use name::Name;

use app::ModelId;
use db::Table;

use std::sync::Arc;

#[derive(Debug)]
pub struct Schema {
    /// Application-level schema
    pub app: app::Schema,

    /// Database-level schema
    pub db: Arc<db::Schema>,

    /// Maps the app-level schema to the db-level schema
    pub mapping: Mapping,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The table a model lowers to, if the model is registered.
    pub fn table_for(&self, id: impl Into<ModelId>) -> Option<&Table> {
        self.mapping.table(id).map(|table| self.db.table(table))
    }
}
