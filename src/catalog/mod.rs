//! Catalog module.
//!
//! Provides:
//! - File records resolved from remote paths
//! - The `RecordStore` lookup trait used by the sync task
//! - A JSON-backed catalog implementation

pub mod record;
pub mod store;

pub use record::FileRecord;
pub use store::{Catalog, RecordStore};
