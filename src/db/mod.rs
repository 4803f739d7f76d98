pub mod initialize;
pub mod kv;
pub mod migrate;
pub mod pool;

pub use kv::SqliteStore;
