use super::{app::ModelId, db::TableId};

use indexmap::IndexMap;

/// Maps the app-level schema to the db-level schema.
#[derive(Debug, Default)]
pub struct Mapping {
    models: IndexMap<ModelId, Model>,
}

/// How one model lowers to the database schema.
#[derive(Debug)]
pub struct Model {
    /// Table the model's fields are lowered into
    pub table: TableId,
}

impl Mapping {
    pub(crate) fn insert(&mut self, id: ModelId, model: Model) {
        self.models.insert(id, model);
    }

    /// The table a model maps to, if the model is registered.
    pub fn table(&self, id: impl Into<ModelId>) -> Option<TableId> {
        self.models.get(&id.into()).map(|model| model.table)
    }
}
