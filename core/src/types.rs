//! Catalog DTOs as the consumer sees them.

use serde::{Deserialize, Serialize};

/// A catalog item. Keys on the wire are `SKU`, `color` and `size`; a field
/// the server omits decodes as `""`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Item {
    #[serde(rename = "SKU")]
    pub sku: String,
    pub color: String,
    pub size: String,
}
