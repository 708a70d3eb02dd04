mod builder;
pub use builder::Builder;

use crate::{Model, Result};

use crouton_core::{
    driver::{operation, Connection},
    schema::{db, Schema},
    Error,
};
use crouton_sql as sql;

use std::sync::Arc;

/// A database handle.
///
/// The handle is the explicitly passed context for table lifecycle
/// operations; there is no process-wide default. Cloning is cheap and
/// clones share the connection and the schema.
#[derive(Debug, Clone)]
pub struct Db {
    /// The connection operations execute on
    connection: Arc<dyn Connection>,

    /// Schema shared by all clones of the handle
    schema: Arc<Schema>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Create the table backing `M`.
    ///
    /// The statement is rendered in the connection's dialect and handed
    /// over as a raw SQL string.
    pub async fn create_table<M: Model>(&self) -> Result<()> {
        let table = self.table_for::<M>()?;

        let stmt = sql::Statement::create_table(table);
        let sql = sql::Serializer::new(self.schema.db.as_ref(), self.connection.capability())
            .serialize(&stmt);

        log::debug!("executing `{sql}`");

        let response = self
            .connection
            .exec(&self.schema.db, operation::ExecSql { sql }.into())
            .await?;

        log::debug!("created table `{}`; rows={}", table.name, response.rows.into_count());

        Ok(())
    }

    /// Drop the table backing `M`.
    ///
    /// Drop statements stay structured; the connection renders them in its
    /// own dialect.
    pub async fn drop_table<M: Model>(&self) -> Result<()> {
        let table = self.table_for::<M>()?;

        log::debug!("dropping table `{}`", table.name);

        self.connection
            .exec(&self.schema.db, operation::DropTable { table: table.id }.into())
            .await?;

        Ok(())
    }

    /// The schema this handle operates on
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    fn table_for<M: Model>(&self) -> Result<&db::Table> {
        self.schema
            .table_for(M::id())
            .ok_or_else(|| Error::unknown_model(M::schema().name.as_str()))
    }
}
