//! LodeKV - single-node column-family key-value store
//!
//! This is the main library crate that re-exports all LodeKV components.

pub use lode_core as core;
pub use lode_protocol as protocol;
pub use lode_server as server;
pub use lode_storage as storage;

// Re-export commonly used types
pub use lode_core::{Error, Result};

pub use lode_protocol::{
    KvPair, RawDeleteRequest, RawDeleteResponse, RawGetRequest, RawGetResponse, RawPutRequest,
    RawPutResponse, RawScanRequest, RawScanResponse,
};

pub use lode_server::{Server, ServerConfig};
pub use lode_storage::{
    MemEngine, Modify, RocksEngine, Storage, StorageIterator, StorageOptions, StorageReader,
};
