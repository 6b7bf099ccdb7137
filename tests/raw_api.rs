//! Full-stack integration: raw API handlers over the RocksDB engine.

use lodekv::storage::cf;
use lodekv::{
    RawGetRequest, RawPutRequest, RawScanRequest, Server, ServerConfig,
};
use tempfile::TempDir;

fn create_server() -> (Server, TempDir) {
    let dir = TempDir::new().unwrap();
    let server = Server::new(ServerConfig::new(dir.path())).unwrap();
    server.start().unwrap();
    (server, dir)
}

fn put(server: &Server, key: &[u8], value: &[u8]) {
    let resp = server.raw_put(&RawPutRequest {
        cf: cf::DEFAULT.to_string(),
        key: key.to_vec(),
        value: value.to_vec(),
    });
    assert_eq!(resp.error, "");
}

#[test]
fn scan_scenario() {
    let (server, _dir) = create_server();
    put(&server, b"a", b"1");
    put(&server, b"b", b"2");

    let resp = server.raw_scan(&RawScanRequest {
        cf: cf::DEFAULT.to_string(),
        start_key: b"a".to_vec(),
        limit: 1,
    });
    assert_eq!(resp.kvs.len(), 1);
    assert_eq!(resp.kvs[0].key, b"a");
    assert_eq!(resp.kvs[0].value, b"1");

    let resp = server.raw_scan(&RawScanRequest {
        cf: cf::DEFAULT.to_string(),
        start_key: b"aa".to_vec(),
        limit: 10,
    });
    assert_eq!(resp.kvs.len(), 1);
    assert_eq!(resp.kvs[0].key, b"b");
    assert_eq!(resp.kvs[0].value, b"2");
}

#[test]
fn reads_are_snapshot_consistent_under_writes() {
    use lodekv::{Modify, RocksEngine, Storage, StorageOptions};

    let dir = TempDir::new().unwrap();
    let storage = RocksEngine::open(StorageOptions::for_testing(dir.path())).unwrap();

    storage
        .write(vec![Modify::put(cf::DEFAULT, b"k".to_vec(), b"old".to_vec())])
        .unwrap();

    let reader = storage.reader().unwrap();
    storage
        .write(vec![Modify::put(cf::DEFAULT, b"k".to_vec(), b"new".to_vec())])
        .unwrap();

    assert_eq!(
        reader.get_cf(cf::DEFAULT, b"k").unwrap(),
        Some(b"old".to_vec())
    );
    drop(reader);

    let reader = storage.reader().unwrap();
    assert_eq!(
        reader.get_cf(cf::DEFAULT, b"k").unwrap(),
        Some(b"new".to_vec())
    );
}

#[test]
fn get_distinguishes_absence_from_failure() {
    let (server, _dir) = create_server();

    let absent = server.raw_get(&RawGetRequest {
        cf: cf::DEFAULT.to_string(),
        key: b"nope".to_vec(),
    });
    assert!(absent.not_found);
    assert_eq!(absent.error, "");

    let fault = server.raw_get(&RawGetRequest {
        cf: "bogus".to_string(),
        key: b"nope".to_vec(),
    });
    assert!(!fault.not_found);
    assert!(!fault.error.is_empty());
}
