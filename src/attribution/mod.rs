mod api;
mod store;

pub use api::{capture, load_stored, AttributionRecord, UTM_STORAGE_KEY};
pub use store::{MemorySessionStore, SessionStore, StorageError, StorageResult};
