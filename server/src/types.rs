//! Catalog entry served under `/items`.

use serde::{Deserialize, Deserializer, Serialize};

/// A single catalog item. The SKU is an opaque client-supplied string; none of
/// the fields are validated, and a missing or `null` field decodes as `""`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Item {
    #[serde(rename = "SKU", deserialize_with = "null_as_empty")]
    pub sku: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub color: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub size: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Item {
    pub fn new(sku: impl Into<String>, color: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            color: color.into(),
            size: size.into(),
        }
    }
}
