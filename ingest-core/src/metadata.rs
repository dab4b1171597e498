use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::Value;

const S3_ROOT_FIELD: &str = "S3Root";

/// Contents of the optional `metadata` form part.
///
/// Only `S3Root` is read, matched without regard to ASCII case. When the key
/// repeats the last string value wins. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadMetadata {
    pub s3_root: String,
}

impl UploadMetadata {
    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        let mut metadata = Self::default();
        metadata.apply_json(bytes)?;
        Ok(metadata)
    }

    /// Update from a JSON object in place.
    ///
    /// Fields absent from `bytes`, or holding a non-string value, keep their
    /// current value. On error nothing is changed.
    pub fn apply_json(&mut self, bytes: &[u8]) -> serde_json::Result<()> {
        let patch: MetadataPatch = serde_json::from_slice(bytes)?;
        if let Some(root) = patch.s3_root {
            self.s3_root = root;
        }
        Ok(())
    }

    /// The root prefix, or `None` when absent or empty.
    pub fn root(&self) -> Option<&str> {
        (!self.s3_root.is_empty()).then_some(self.s3_root.as_str())
    }
}

#[derive(Default)]
struct MetadataPatch {
    s3_root: Option<String>,
}

impl<'de> Deserialize<'de> for MetadataPatch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(PatchVisitor)
    }
}

struct PatchVisitor;

impl<'de> Visitor<'de> for PatchVisitor {
    type Value = MetadataPatch;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    // entries arrive in document order, so later keys overwrite earlier ones
    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut patch = MetadataPatch::default();
        while let Some(key) = map.next_key::<String>()? {
            let value = map.next_value::<Value>()?;
            if !key.eq_ignore_ascii_case(S3_ROOT_FIELD) {
                continue;
            }
            if let Value::String(root) = value {
                patch.s3_root = Some(root);
            }
        }
        Ok(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_s3_root_and_ignores_other_fields() {
        let meta = UploadMetadata::from_json(br#"{"S3Root":"root","camera":"x100"}"#).unwrap();
        assert_eq!(meta.root(), Some("root"));
    }

    #[test]
    fn missing_or_empty_root_means_no_prefix() {
        assert_eq!(UploadMetadata::from_json(b"{}").unwrap().root(), None);
        assert_eq!(UploadMetadata::from_json(br#"{"S3Root":""}"#).unwrap().root(), None);
    }

    #[test]
    fn key_match_ignores_case() {
        let meta = UploadMetadata::from_json(br#"{"s3root":"root"}"#).unwrap();
        assert_eq!(meta.root(), Some("root"));

        let meta = UploadMetadata::from_json(br#"{"S3ROOT":"upper"}"#).unwrap();
        assert_eq!(meta.root(), Some("upper"));
    }

    #[test]
    fn repeated_key_keeps_last_string() {
        let meta = UploadMetadata::from_json(br#"{"S3Root":"a","S3Root":"b"}"#).unwrap();
        assert_eq!(meta.root(), Some("b"));

        let meta = UploadMetadata::from_json(br#"{"s3root":"b","S3Root":"a"}"#).unwrap();
        assert_eq!(meta.root(), Some("a"));
    }

    #[test]
    fn non_string_value_leaves_root_unchanged() {
        let mut meta = UploadMetadata::from_json(br#"{"S3Root":"keep"}"#).unwrap();

        meta.apply_json(br#"{"S3Root":42}"#).unwrap();
        assert_eq!(meta.root(), Some("keep"));

        meta.apply_json(br#"{"S3Root":"a","S3Root":null}"#).unwrap();
        assert_eq!(meta.root(), Some("a"));
    }

    #[test]
    fn malformed_json_changes_nothing() {
        let mut meta = UploadMetadata::from_json(br#"{"S3Root":"keep"}"#).unwrap();

        assert!(meta.apply_json(br#"{"S3Root":"new""#).is_err());
        assert!(meta.apply_json(b"[1,2]").is_err());
        assert!(meta.apply_json(br#"{"S3Root":"new"} trailing"#).is_err());
        assert_eq!(meta.root(), Some("keep"));
    }
}
