//! LodeKV Storage Layer
//!
//! Decouples get/put/delete/scan semantics from the concrete embedded
//! engine. Callers talk to the [`Storage`] trait; engines are swappable
//! without touching the raw API layer above.
//!
//! # Architecture
//!
//! - [`Storage`] / [`StorageReader`] / [`StorageIterator`] - the abstraction
//!   seam: snapshot acquisition, atomic batched writes, column-family
//!   scoped reads
//! - [`RocksEngine`] - RocksDB-backed engine adapter
//! - [`MemEngine`] - in-memory engine for tests and embedding
//!
//! # Column Families
//!
//! - `default` - user data
//! - `lock` - lock records
//! - `write` - write records
//!
//! Every reader is bound to a point-in-time snapshot taken when it was
//! created; writes committed afterwards are not visible through it.

pub mod engine;
pub mod memory;
pub mod modify;
pub mod options;
pub mod storage;

pub use engine::RocksEngine;
pub use memory::MemEngine;
pub use modify::Modify;
pub use options::StorageOptions;
pub use storage::{COLUMN_FAMILIES, Storage, StorageIterator, StorageReader, cf};
