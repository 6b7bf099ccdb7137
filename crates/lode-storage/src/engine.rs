//! RocksDB engine adapter

use crate::modify::Modify;
use crate::options::StorageOptions;
use crate::storage::{COLUMN_FAMILIES, Storage, StorageIterator, StorageReader};
use lode_core::{Error, Result};
use rocksdb::{
    ColumnFamily, ColumnFamilyDescriptor, DB, DBRawIterator, Options, Snapshot, WriteBatch,
};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

/// Subdirectory under the data root reserved for this engine's files
const ENGINE_SUBDIR: &str = "kv";

/// RocksDB-backed implementation of [`Storage`].
///
/// Readers are RocksDB snapshots; writes go through a single engine
/// `WriteBatch`. Concurrent writes are serialized by RocksDB's write path.
pub struct RocksEngine {
    db: DB,
    stopped: AtomicBool,
}

impl RocksEngine {
    /// Open or create the engine under `options.path`.
    pub fn open(options: StorageOptions) -> Result<Self> {
        let kv_path = options.path.join(ENGINE_SUBDIR);
        std::fs::create_dir_all(&kv_path)?;

        info!("Opening storage engine at {:?}", kv_path);

        let mut db_opts = Options::default();
        db_opts.create_if_missing(options.create_if_missing);
        db_opts.create_missing_column_families(true);
        db_opts.set_write_buffer_size(options.write_buffer_size);
        db_opts.set_max_write_buffer_number(options.max_write_buffer_number);
        db_opts.set_max_background_jobs(options.max_background_jobs);

        if options.enable_compression {
            db_opts.set_compression_type(rocksdb::DBCompressionType::Lz4);
        }

        let cf_descriptors: Vec<ColumnFamilyDescriptor> = COLUMN_FAMILIES
            .iter()
            .map(|name| ColumnFamilyDescriptor::new(*name, Options::default()))
            .collect();

        let db = DB::open_cf_descriptors(&db_opts, &kv_path, cf_descriptors)
            .map_err(|e| Error::Engine(e.to_string()))?;

        info!("Storage engine opened");

        Ok(Self {
            db,
            stopped: AtomicBool::new(false),
        })
    }

    fn cf(&self, name: &str) -> Result<&ColumnFamily> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| Error::UnknownColumnFamily(name.to_string()))
    }

    fn check_running(&self) -> Result<()> {
        if self.stopped.load(Ordering::SeqCst) {
            return Err(Error::Stopped);
        }
        Ok(())
    }
}

impl Storage for RocksEngine {
    fn start(&self) -> Result<()> {
        // The engine is fully usable once open; nothing to do in-process.
        Ok(())
    }

    fn stop(&self) -> Result<()> {
        if self.stopped.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        self.db.flush().map_err(|e| Error::Engine(e.to_string()))?;
        info!("Storage engine stopped");
        Ok(())
    }

    fn reader(&self) -> Result<Box<dyn StorageReader + '_>> {
        self.check_running()?;
        Ok(Box::new(RocksReader {
            db: &self.db,
            snapshot: self.db.snapshot(),
        }))
    }

    fn write(&self, batch: Vec<Modify>) -> Result<()> {
        self.check_running()?;

        // Column families are resolved before anything is staged, so a bad
        // entry fails the batch without applying a prefix.
        let mut wb = WriteBatch::default();
        for m in &batch {
            let handle = self.cf(m.cf())?;
            match m {
                Modify::Put { key, value, .. } => wb.put_cf(handle, key, value),
                Modify::Delete { key, .. } => wb.delete_cf(handle, key),
            }
        }

        self.db.write(wb).map_err(|e| Error::Engine(e.to_string()))?;

        debug!("Applied write batch of {} mutations", batch.len());
        Ok(())
    }
}

/// Snapshot-bound reader over a [`RocksEngine`].
///
/// The snapshot is released when the reader is dropped.
struct RocksReader<'a> {
    db: &'a DB,
    snapshot: Snapshot<'a>,
}

impl RocksReader<'_> {
    fn cf(&self, name: &str) -> Result<&ColumnFamily> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| Error::UnknownColumnFamily(name.to_string()))
    }
}

impl StorageReader for RocksReader<'_> {
    fn get_cf(&self, cf: &str, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let handle = self.cf(cf)?;
        self.snapshot
            .get_cf(handle, key)
            .map_err(|e| Error::Engine(e.to_string()))
    }

    fn iter_cf(&self, cf: &str) -> Result<Box<dyn StorageIterator + '_>> {
        let handle = self.cf(cf)?;
        Ok(Box::new(RocksIter {
            inner: self.snapshot.raw_iterator_cf(handle),
        }))
    }
}

struct RocksIter<'a> {
    inner: DBRawIterator<'a>,
}

impl StorageIterator for RocksIter<'_> {
    fn seek(&mut self, key: &[u8]) {
        self.inner.seek(key);
    }

    fn valid(&self) -> bool {
        self.inner.valid()
    }

    fn current(&self) -> Option<(&[u8], &[u8])> {
        self.inner.item()
    }

    fn next(&mut self) {
        self.inner.next();
    }
}
