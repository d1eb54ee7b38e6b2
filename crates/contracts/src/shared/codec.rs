//! JSON codec for persisted collections.
//!
//! Collections are stored as whole, self-contained JSON arrays. A missing
//! blob is an empty collection; a corrupt blob is reported by the caller and
//! also treated as empty.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn encode_collection<T: Serialize>(items: &[T]) -> Result<String> {
    serde_json::to_string(items).context("failed to serialize collection")
}

pub fn decode_collection<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>> {
    serde_json::from_str(raw).context("failed to parse collection blob")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_sku::aggregate::Sku;

    #[test]
    fn round_trip_is_identity() {
        let skus = vec![
            Sku::new_with_id(
                "1".into(),
                "2024-01-01".into(),
                "A".into(),
                "SKU-1".into(),
                10.0,
                6.0,
                5.0,
            )
            .unwrap(),
            Sku::new_with_id(
                "2".into(),
                "2024-01-02".into(),
                "B".into(),
                "SKU-2".into(),
                3.5,
                1.25,
                4.0,
            )
            .unwrap(),
        ];
        let raw = encode_collection(&skus).unwrap();
        let back: Vec<Sku> = decode_collection(&raw).unwrap();
        assert_eq!(back, skus);
    }

    #[test]
    fn corrupt_blob_is_an_error() {
        assert!(decode_collection::<Sku>("{not json").is_err());
        assert!(decode_collection::<Sku>("{\"an\":\"object\"}").is_err());
    }

    #[test]
    fn empty_array_decodes_empty() {
        let v: Vec<Sku> = decode_collection("[]").unwrap();
        assert!(v.is_empty());
    }
}
