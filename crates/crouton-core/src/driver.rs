mod capability;
pub use capability::{Capability, StorageTypes};

pub mod operation;
pub use operation::Operation;

mod response;
pub use response::{Response, Rows};

use crate::{async_trait, schema::db, Result};

use std::{fmt::Debug, sync::Arc};

/// A database connection capable of executing operations.
///
/// Raw statements arrive fully rendered; structured operations are rendered
/// by the connection in its own dialect. Every call completes exactly once,
/// with either a response or an error.
#[async_trait]
pub trait Connection: Debug + Send + Sync + 'static {
    /// Describes the connected database, which informs statement rendering.
    fn capability(&self) -> &'static Capability;

    /// Execute a database operation
    async fn exec(&self, schema: &Arc<db::Schema>, op: Operation) -> Result<Response>;
}
