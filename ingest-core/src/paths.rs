//! Object key derivation.
//!
//! A submitted filename such as `photos/2024/beach.png` with root `archive`
//! produces two keys:
//!
//! ```rust
//! use ingest_core::ObjectKeys;
//!
//! let keys = ObjectKeys::derive(Some("archive"), "photos/2024/beach.png");
//! assert_eq!(keys.metadata_key, "archive/photos/2024/beach_metadata.log");
//! assert_eq!(keys.file_key, "archive/photos/2024/beach.png");
//! ```

pub const METADATA_LOG_SUFFIX: &str = "_metadata.log";

/// Split a `/`-delimited filename into `(directory_prefix, base_name)`.
///
/// `base_name` is the last segment cut at its first `.`, so `a.tar.gz`
/// yields `a`. Without a `/` the prefix is empty.
pub fn split_path(filename: &str) -> (String, String) {
    let (directory, last) = match filename.rsplit_once('/') {
        Some((directory, last)) => (directory, last),
        None => ("", filename),
    };

    let base = last.split('.').next().unwrap_or_default();

    (directory.to_string(), base.to_string())
}

/// Join `prefixes` and `leaf` with `/`, skipping empty prefixes.
///
/// The leaf is always appended, even when empty.
pub fn join_key(prefixes: &[&str], leaf: &str) -> String {
    let mut key = String::new();
    for prefix in prefixes.iter().filter(|p| !p.is_empty()) {
        key.push_str(prefix);
        key.push('/');
    }
    key.push_str(leaf);
    key
}

/// The pair of keys written for one ingested file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectKeys {
    pub metadata_key: String,
    pub file_key: String,
}

impl ObjectKeys {
    pub fn derive(root: Option<&str>, filename: &str) -> Self {
        let root = root.unwrap_or_default();
        let (directory, base) = split_path(filename);

        Self {
            metadata_key: join_key(&[root, directory.as_str()], &format!("{base}{METADATA_LOG_SUFFIX}")),
            file_key: join_key(&[root], filename),
        }
    }

    /// Keys in response order: metadata first, file second.
    pub fn into_vec(self) -> Vec<String> {
        vec![self.metadata_key, self.file_key]
    }
}
