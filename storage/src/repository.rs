use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::Part;

/// Read access to the parts catalog.
#[async_trait]
pub trait PartCatalog: Send + Sync {
    /// Returns every part, ordered by id.
    async fn list_parts(&self) -> Result<Vec<Part>, StorageError>;
}
