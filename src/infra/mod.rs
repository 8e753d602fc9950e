pub mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore, QuoteHistoryStore, StoreError};
