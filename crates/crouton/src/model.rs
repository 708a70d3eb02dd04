use crate::{Db, Result};

use crouton_core::schema::app::{self, ModelId};

use async_trait::async_trait;

/// Generate a unique model ID at runtime.
///
/// Backed by a global atomic counter, so each call returns a new ID and
/// calling concurrently is safe. Implementations of [`Model::id`] cache the
/// result so a model type keeps one ID for the life of the process.
pub fn generate_unique_id() -> ModelId {
    use std::sync::atomic::{AtomicUsize, Ordering};

    static NEXT_MODEL_ID: AtomicUsize = AtomicUsize::new(0);

    ModelId(NEXT_MODEL_ID.fetch_add(1, Ordering::Relaxed))
}

/// A statically declared record type mapped to one database table.
///
/// Implementors hand the system a field-descriptor table once, via
/// [`Model::schema`]; everything else is derived from it.
#[async_trait]
pub trait Model: Sized + Send + Sync + 'static {
    /// Unique identifier for this model within the schema.
    ///
    /// Identifiers are *not* unique across schemas.
    fn id() -> ModelId;

    /// The model's static schema descriptor.
    fn schema() -> app::Model;

    /// Create the table backing this model.
    async fn create_table(db: &Db) -> Result<()> {
        db.create_table::<Self>().await
    }

    /// Drop the table backing this model.
    async fn drop_table(db: &Db) -> Result<()> {
        db.drop_table::<Self>().await
    }
}
