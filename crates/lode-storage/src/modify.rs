//! Mutation model for batched writes

/// A single mutation against one (column family, key) pair.
///
/// A write batch is an ordered `Vec<Modify>`; when the same (cf, key)
/// appears more than once, the last entry wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modify {
    /// Create or overwrite a key
    Put {
        cf: String,
        key: Vec<u8>,
        value: Vec<u8>,
    },
    /// Remove a key (no-op if absent)
    Delete { cf: String, key: Vec<u8> },
}

impl Modify {
    /// Create a put mutation
    pub fn put(cf: impl Into<String>, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Modify::Put {
            cf: cf.into(),
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a delete mutation
    pub fn delete(cf: impl Into<String>, key: impl Into<Vec<u8>>) -> Self {
        Modify::Delete {
            cf: cf.into(),
            key: key.into(),
        }
    }

    /// The column family this mutation targets
    pub fn cf(&self) -> &str {
        match self {
            Modify::Put { cf, .. } | Modify::Delete { cf, .. } => cf,
        }
    }

    /// The key this mutation targets
    pub fn key(&self) -> &[u8] {
        match self {
            Modify::Put { key, .. } | Modify::Delete { key, .. } => key,
        }
    }
}
