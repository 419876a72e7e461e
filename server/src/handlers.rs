//! Handlers for the two `/items` operations.

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::store::ItemStore;
use crate::types::Item;

pub async fn list_items(State(store): State<ItemStore>) -> Json<Vec<Item>> {
    let items = store.list_all().await;
    debug!(count = items.len(), "listing items");
    Json(items)
}

pub async fn create_item(
    State(store): State<ItemStore>,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let item = decode_item(&body).inspect_err(|e| warn!(error = %e, "rejected item body"))?;
    let created = store.create(item).await;
    info!(sku = %created.sku, "item created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET` routes would otherwise answer `HEAD` too.
pub async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

/// Decodes a create body, whatever the request's content type says.
///
/// Only the first JSON value is read; anything after it is ignored. That value
/// must be an object or `null`, and `null` decodes as an empty item.
pub fn decode_item(body: &[u8]) -> Result<Item, ApiError> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let object = Option::<Map<String, Value>>::deserialize(&mut deserializer)?.unwrap_or_default();
    Ok(serde_json::from_value(Value::Object(object))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_object() {
        let item = decode_item(br#"{"SKU":"111222333","color":"Purple","size":"XXL"}"#).unwrap();
        assert_eq!(item, Item::new("111222333", "Purple", "XXL"));
    }

    #[test]
    fn decodes_empty_object_to_empty_fields() {
        assert_eq!(decode_item(b"{}").unwrap(), Item::default());
    }

    #[test]
    fn top_level_null_decodes_to_empty_item() {
        assert_eq!(decode_item(b"null").unwrap(), Item::default());
    }

    #[test]
    fn null_fields_decode_as_empty() {
        let item = decode_item(br#"{"SKU":null,"color":"Red","size":"S"}"#).unwrap();
        assert_eq!(item, Item::new("", "Red", "S"));
    }

    #[test]
    fn data_after_first_value_is_ignored() {
        let item = decode_item(br#"{"SKU":"1","color":"Red","size":"S"} trailing"#).unwrap();
        assert_eq!(item, Item::new("1", "Red", "S"));
    }

    #[test]
    fn rejects_scalars() {
        assert!(decode_item(b"42").is_err());
        assert!(decode_item(br#""111222333""#).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = decode_item(br#"{"SKU":"1","#).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn rejects_empty_body() {
        assert!(decode_item(b"").is_err());
    }

    #[test]
    fn rejects_arrays() {
        let err = decode_item(br#"["1","Red","S"]"#).unwrap_err();
        assert!(err.to_string().contains("invalid type"), "{err}");
    }

    #[test]
    fn rejects_non_string_fields() {
        let err = decode_item(br#"{"SKU":111222333}"#).unwrap_err();
        assert!(err.to_string().contains("expected a string"), "{err}");
    }
}
