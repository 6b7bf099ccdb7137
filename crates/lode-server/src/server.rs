//! Server implementation and raw API handlers
//!
//! Each handler acquires what it needs, translates the outcome into
//! response fields, and releases its reader and iterator on every path.
//! A missing key or an engine failure is a normal response variant, not a
//! fault.

use crate::config::ServerConfig;
use lode_core::Result;
use lode_protocol::{
    KvPair, RawDeleteRequest, RawDeleteResponse, RawGetRequest, RawGetResponse, RawPutRequest,
    RawPutResponse, RawScanRequest, RawScanResponse,
};
use lode_storage::{Modify, RocksEngine, Storage, StorageOptions};
use std::sync::Arc;
use tracing::info;

/// LodeKV server: raw API handlers over an injected storage engine.
pub struct Server {
    config: ServerConfig,
    storage: Arc<dyn Storage>,
}

impl Server {
    /// Create a server backed by a RocksDB engine under `config.data_dir`.
    pub fn new(config: ServerConfig) -> Result<Self> {
        let storage = RocksEngine::open(StorageOptions::new(&config.data_dir))?;
        Ok(Self {
            config,
            storage: Arc::new(storage),
        })
    }

    /// Create a server over any storage engine.
    pub fn with_storage(config: ServerConfig, storage: Arc<dyn Storage>) -> Self {
        Self { config, storage }
    }

    /// Get the configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Start the underlying storage
    pub fn start(&self) -> Result<()> {
        info!("Starting LodeKV server");
        info!("Data directory: {:?}", self.config.data_dir);
        self.storage.start()?;
        info!("LodeKV server started");
        Ok(())
    }

    /// Stop the underlying storage
    pub fn stop(&self) -> Result<()> {
        info!("Stopping LodeKV server");
        self.storage.stop()?;
        info!("LodeKV server stopped");
        Ok(())
    }

    /// Get server version
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Point read. Absence is reported via `not_found`, engine failures
    /// via `error`.
    pub fn raw_get(&self, req: &RawGetRequest) -> RawGetResponse {
        let reader = match self.storage.reader() {
            Ok(r) => r,
            Err(e) => {
                return RawGetResponse {
                    error: e.to_string(),
                    ..Default::default()
                };
            }
        };

        match reader.get_cf(&req.cf, &req.key) {
            Ok(Some(value)) => RawGetResponse {
                value,
                ..Default::default()
            },
            Ok(None) => RawGetResponse {
                not_found: true,
                ..Default::default()
            },
            Err(e) => RawGetResponse {
                error: e.to_string(),
                ..Default::default()
            },
        }
    }

    /// Point write via a single-entry batch.
    pub fn raw_put(&self, req: &RawPutRequest) -> RawPutResponse {
        let batch = vec![Modify::put(
            req.cf.clone(),
            req.key.clone(),
            req.value.clone(),
        )];

        match self.storage.write(batch) {
            Ok(()) => RawPutResponse::default(),
            Err(e) => RawPutResponse {
                error: e.to_string(),
            },
        }
    }

    /// Point delete via a single-entry batch.
    pub fn raw_delete(&self, req: &RawDeleteRequest) -> RawDeleteResponse {
        let batch = vec![Modify::delete(req.cf.clone(), req.key.clone())];

        match self.storage.write(batch) {
            Ok(()) => RawDeleteResponse::default(),
            Err(e) => RawDeleteResponse {
                error: e.to_string(),
            },
        }
    }

    /// Bounded forward scan from `start_key`, collecting at most `limit`
    /// pairs in ascending key order. A limit of zero yields an empty
    /// result.
    pub fn raw_scan(&self, req: &RawScanRequest) -> RawScanResponse {
        let reader = match self.storage.reader() {
            Ok(r) => r,
            Err(e) => {
                return RawScanResponse {
                    error: e.to_string(),
                    ..Default::default()
                };
            }
        };

        let mut iter = match reader.iter_cf(&req.cf) {
            Ok(it) => it,
            Err(e) => {
                return RawScanResponse {
                    error: e.to_string(),
                    ..Default::default()
                };
            }
        };

        iter.seek(&req.start_key);

        let mut kvs = Vec::new();
        while (kvs.len() as u32) < req.limit {
            match iter.current() {
                Some((key, value)) => kvs.push(KvPair {
                    key: key.to_vec(),
                    value: value.to_vec(),
                    ..Default::default()
                }),
                None => break,
            }
            iter.next();
        }

        RawScanResponse {
            kvs,
            ..Default::default()
        }
    }
}
