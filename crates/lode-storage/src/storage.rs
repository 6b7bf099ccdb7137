//! Storage abstraction traits
//!
//! The seam between request handling and the embedded engine. Handlers
//! depend only on these traits; [`crate::RocksEngine`] and
//! [`crate::MemEngine`] are interchangeable behind them.

use crate::modify::Modify;
use lode_core::Result;

/// Column family names
pub mod cf {
    pub const DEFAULT: &str = "default";
    pub const LOCK: &str = "lock";
    pub const WRITE: &str = "write";
}

/// All column families managed by a LodeKV engine
pub const COLUMN_FAMILIES: &[&str] = &[cf::DEFAULT, cf::LOCK, cf::WRITE];

/// A column-family-aware key-value store with snapshot reads.
///
/// `reader` and `write` may be called concurrently from multiple request
/// handlers. Writes from different calls are serialized by the engine in
/// some total order; no ordering is guaranteed across batches beyond that.
pub trait Storage: Send + Sync {
    /// Lifecycle hook called once at process startup.
    fn start(&self) -> Result<()>;

    /// Releases engine resources. Idempotent: repeated calls return `Ok`.
    /// `reader` and `write` fail once the engine is stopped.
    fn stop(&self) -> Result<()>;

    /// Acquires a consistent point-in-time view for reads.
    ///
    /// Writes committed after this call returns are not visible through
    /// the returned reader. Fails if the engine cannot start a read view.
    fn reader(&self) -> Result<Box<dyn StorageReader + '_>>;

    /// Applies every mutation in `batch`, in order, against live state.
    ///
    /// Fails fast at the first failing entry. Whether entries applied
    /// before the failure are rolled back is engine-specific; callers must
    /// not assume multi-entry atomicity.
    fn write(&self, batch: Vec<Modify>) -> Result<()>;
}

/// A read handle bound to the snapshot taken when it was created.
///
/// The snapshot resource is released on drop; iterators borrow the reader
/// and must be dropped first.
pub trait StorageReader {
    /// Returns the value for `key` in `cf`, or `Ok(None)` if the key does
    /// not exist in that column family. Absence is not an error.
    fn get_cf(&self, cf: &str, key: &[u8]) -> Result<Option<Vec<u8>>>;

    /// Returns a fresh forward iterator over `cf`, bound to this reader's
    /// snapshot.
    fn iter_cf(&self, cf: &str) -> Result<Box<dyn StorageIterator + '_>>;
}

/// A forward-only cursor over one column family, in ascending key order.
///
/// Freshly created iterators are unpositioned; call [`seek`] first.
/// Iterator resources are released on drop.
///
/// [`seek`]: StorageIterator::seek
pub trait StorageIterator {
    /// Positions the cursor at the first entry with key >= `key`. An empty
    /// key positions at the first entry in the column family.
    fn seek(&mut self, key: &[u8]);

    /// False once the cursor has advanced past the last entry.
    fn valid(&self) -> bool;

    /// The entry under the cursor, or `None` when the cursor is not valid.
    fn current(&self) -> Option<(&[u8], &[u8])>;

    /// Advances the cursor by one entry.
    fn next(&mut self);
}
