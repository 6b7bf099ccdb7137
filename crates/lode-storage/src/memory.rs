//! In-memory engine adapter
//!
//! Keeps the whole keyspace in sorted maps behind a `RwLock`. Readers
//! clone the maps under the read lock, which gives them the same
//! point-in-time snapshot semantics as the RocksDB adapter. Used by tests
//! and by embedders that do not want a disk footprint.

use crate::modify::Modify;
use crate::storage::{COLUMN_FAMILIES, Storage, StorageIterator, StorageReader};
use lode_core::{Error, Result};
use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

type CfMap = HashMap<String, BTreeMap<Vec<u8>, Vec<u8>>>;

/// Memory-backed implementation of [`Storage`].
pub struct MemEngine {
    data: RwLock<CfMap>,
    stopped: AtomicBool,
}

impl MemEngine {
    /// Create an empty engine with the standard column families.
    pub fn new() -> Self {
        let mut data = CfMap::new();
        for name in COLUMN_FAMILIES {
            data.insert((*name).to_string(), BTreeMap::new());
        }
        Self {
            data: RwLock::new(data),
            stopped: AtomicBool::new(false),
        }
    }

    fn check_running(&self) -> Result<()> {
        if self.stopped.load(Ordering::SeqCst) {
            return Err(Error::Stopped);
        }
        Ok(())
    }
}

impl Default for MemEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemEngine {
    fn start(&self) -> Result<()> {
        Ok(())
    }

    fn stop(&self) -> Result<()> {
        self.stopped.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn reader(&self) -> Result<Box<dyn StorageReader + '_>> {
        self.check_running()?;
        let snapshot = self.data.read().unwrap().clone();
        Ok(Box::new(MemReader { snapshot }))
    }

    fn write(&self, batch: Vec<Modify>) -> Result<()> {
        self.check_running()?;

        // Entries are applied in order under the write lock; a failing
        // entry leaves the already-applied prefix in place.
        let mut data = self.data.write().unwrap();
        for m in batch {
            match m {
                Modify::Put { cf, key, value } => {
                    let table = data
                        .get_mut(&cf)
                        .ok_or_else(|| Error::UnknownColumnFamily(cf.clone()))?;
                    table.insert(key, value);
                }
                Modify::Delete { cf, key } => {
                    let table = data
                        .get_mut(&cf)
                        .ok_or_else(|| Error::UnknownColumnFamily(cf.clone()))?;
                    table.remove(&key);
                }
            }
        }
        Ok(())
    }
}

/// Owned snapshot of the keyspace at reader creation time.
struct MemReader {
    snapshot: CfMap,
}

impl MemReader {
    fn table(&self, cf: &str) -> Result<&BTreeMap<Vec<u8>, Vec<u8>>> {
        self.snapshot
            .get(cf)
            .ok_or_else(|| Error::UnknownColumnFamily(cf.to_string()))
    }
}

impl StorageReader for MemReader {
    fn get_cf(&self, cf: &str, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.table(cf)?.get(key).cloned())
    }

    fn iter_cf(&self, cf: &str) -> Result<Box<dyn StorageIterator + '_>> {
        let entries = self
            .table(cf)?
            .iter()
            .map(|(k, v)| (k.as_slice(), v.as_slice()))
            .collect();
        Ok(Box::new(MemIter { entries, pos: 0 }))
    }
}

struct MemIter<'a> {
    entries: Vec<(&'a [u8], &'a [u8])>,
    pos: usize,
}

impl StorageIterator for MemIter<'_> {
    fn seek(&mut self, key: &[u8]) {
        self.pos = self.entries.partition_point(|(k, _)| *k < key);
    }

    fn valid(&self) -> bool {
        self.pos < self.entries.len()
    }

    fn current(&self) -> Option<(&[u8], &[u8])> {
        self.entries.get(self.pos).copied()
    }

    fn next(&mut self) {
        if self.pos < self.entries.len() {
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::cf;
    use proptest::prelude::*;

    #[test]
    fn test_partial_batch_keeps_applied_prefix() {
        let engine = MemEngine::new();
        let err = engine
            .write(vec![
                Modify::put(cf::DEFAULT, b"applied".to_vec(), b"1".to_vec()),
                Modify::put("bogus", b"never".to_vec(), b"2".to_vec()),
            ])
            .unwrap_err();
        assert!(matches!(err, Error::UnknownColumnFamily(_)));

        // No rollback at this layer.
        let reader = engine.reader().unwrap();
        assert_eq!(
            reader.get_cf(cf::DEFAULT, b"applied").unwrap(),
            Some(b"1".to_vec())
        );
    }

    #[test]
    fn test_seek_positions_and_empty_key() {
        let engine = MemEngine::new();
        engine
            .write(vec![
                Modify::put(cf::DEFAULT, b"b".to_vec(), b"2".to_vec()),
                Modify::put(cf::DEFAULT, b"d".to_vec(), b"4".to_vec()),
            ])
            .unwrap();

        let reader = engine.reader().unwrap();
        let mut iter = reader.iter_cf(cf::DEFAULT).unwrap();

        iter.seek(b"");
        assert_eq!(iter.current(), Some((&b"b"[..], &b"2"[..])));

        iter.seek(b"c");
        assert_eq!(iter.current(), Some((&b"d"[..], &b"4"[..])));

        iter.seek(b"e");
        assert!(!iter.valid());
        assert_eq!(iter.current(), None);
    }

    #[test]
    fn test_stop_blocks_further_access() {
        let engine = MemEngine::new();
        engine.stop().unwrap();
        engine.stop().unwrap();
        assert!(engine.reader().is_err());
        assert!(engine.write(vec![]).is_err());
    }

    proptest! {
        // Put then get observes the value; delete then get observes absence,
        // for arbitrary keys and values.
        #[test]
        fn prop_put_get_delete_round_trip(key in proptest::collection::vec(any::<u8>(), 0..64),
                                          value in proptest::collection::vec(any::<u8>(), 0..256)) {
            let engine = MemEngine::new();
            engine
                .write(vec![Modify::put(cf::DEFAULT, key.clone(), value.clone())])
                .unwrap();
            let reader = engine.reader().unwrap();
            prop_assert_eq!(reader.get_cf(cf::DEFAULT, &key).unwrap(), Some(value));
            drop(reader);

            engine
                .write(vec![Modify::delete(cf::DEFAULT, key.clone())])
                .unwrap();
            let reader = engine.reader().unwrap();
            prop_assert_eq!(reader.get_cf(cf::DEFAULT, &key).unwrap(), None);
        }

        // The last entry for a duplicated key wins within one batch.
        #[test]
        fn prop_batch_last_write_wins(key in proptest::collection::vec(any::<u8>(), 0..32),
                                      v1 in proptest::collection::vec(any::<u8>(), 0..32),
                                      v2 in proptest::collection::vec(any::<u8>(), 0..32)) {
            let engine = MemEngine::new();
            engine
                .write(vec![
                    Modify::put(cf::DEFAULT, key.clone(), v1),
                    Modify::put(cf::DEFAULT, key.clone(), v2.clone()),
                ])
                .unwrap();
            let reader = engine.reader().unwrap();
            prop_assert_eq!(reader.get_cf(cf::DEFAULT, &key).unwrap(), Some(v2));
        }
    }
}
