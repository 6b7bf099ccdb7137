//! Storage configuration options

use std::path::PathBuf;

/// Options for configuring a storage engine
#[derive(Debug, Clone)]
pub struct StorageOptions {
    /// Root data directory; the engine keeps its files in a fixed
    /// subdirectory underneath it
    pub path: PathBuf,

    /// Whether to create the database if it doesn't exist
    pub create_if_missing: bool,

    /// Maximum size of the write buffer (memtable) in bytes
    pub write_buffer_size: usize,

    /// Maximum number of write buffers
    pub max_write_buffer_number: i32,

    /// Number of background compaction threads
    pub max_background_jobs: i32,

    /// Enable compression
    pub enable_compression: bool,
}

impl StorageOptions {
    /// Create options for a database at the given path
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Create options optimized for development/testing
    pub fn for_testing<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            create_if_missing: true,
            write_buffer_size: 4 * 1024 * 1024, // 4MB
            max_write_buffer_number: 2,
            max_background_jobs: 2,
            enable_compression: false,
        }
    }

    /// Set the write buffer size
    pub fn write_buffer_size(mut self, size: usize) -> Self {
        self.write_buffer_size = size;
        self
    }

    /// Enable or disable compression
    pub fn compression(mut self, enabled: bool) -> Self {
        self.enable_compression = enabled;
        self
    }
}

impl Default for StorageOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./data"),
            create_if_missing: true,
            write_buffer_size: 32 * 1024 * 1024, // 32MB
            max_write_buffer_number: 3,
            max_background_jobs: 4,
            enable_compression: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = StorageOptions::default();
        assert!(opts.create_if_missing);
        assert!(opts.enable_compression);
    }

    #[test]
    fn test_testing_options() {
        let opts = StorageOptions::for_testing("/tmp/test");
        assert!(!opts.enable_compression);
        assert_eq!(opts.path, PathBuf::from("/tmp/test"));
    }

    #[test]
    fn test_builder_pattern() {
        let opts = StorageOptions::new("/data")
            .write_buffer_size(128 * 1024 * 1024)
            .compression(false);

        assert_eq!(opts.write_buffer_size, 128 * 1024 * 1024);
        assert!(!opts.enable_compression);
    }
}
