mod manager;
pub mod persistence;

pub use manager::{AppState, RequestStatus, RequestTicket, ResetScope, View};
pub use persistence::{FileStore, KeyValueStore, MemoryStore};
