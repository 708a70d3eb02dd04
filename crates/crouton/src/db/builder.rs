use super::Db;
use crate::{Model, Result};

use crouton_core::{driver::Connection, schema};

use std::sync::Arc;

/// Builds a [`Db`] handle: register models, then connect.
#[derive(Debug, Default)]
pub struct Builder {
    /// Schema builder accumulating model descriptors
    core: schema::Builder,
}

impl Builder {
    /// Register a model with the schema.
    pub fn register<M: Model>(&mut self) -> &mut Self {
        self.core.register(M::schema());
        self
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.core.table_name_prefix(prefix);
        self
    }

    /// Lower the registered models and attach the connection.
    ///
    /// This is where invalid model sets are rejected; a handle that builds
    /// successfully cannot fail to generate statements.
    pub fn connect(&mut self, connection: impl Connection) -> Result<Db> {
        let schema = std::mem::take(&mut self.core).build()?;

        Ok(Db {
            connection: Arc::new(connection),
            schema: Arc::new(schema),
        })
    }
}
