//! Transfer seam between the sync task and the storage client.

use async_trait::async_trait;

use crate::catalog::FileRecord;
use crate::error::Result;

/// Downloads one resolved file record to its local path.
///
/// Implemented by [`StorageClient`] for real runs and by mocks in tests.
///
/// [`StorageClient`]: crate::api::StorageClient
#[async_trait]
pub trait Transfer: Send + Sync {
    async fn download(&self, record: &FileRecord) -> Result<()>;
}
