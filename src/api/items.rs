//! Item Endpoints
//!
//! Listing, fetching from the marketplace, editing and deleting items.

use serde::Serialize;

use super::{del, del_with, ensure_success, get, post, put, seg, ApiClient};
use crate::error::ApiError;
use crate::models::{ApiResponse, FetchItemsRequest, FetchOutcome, Item, ItemKey, ItemPatch, Listing};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub(crate) struct BatchKeysArgs<'a> {
    pub items: &'a [ItemKey],
}

#[derive(Serialize)]
struct MultiQuantityArgs {
    multi_quantity_delivery: bool,
}

#[derive(Serialize)]
struct MultiSpecArgs {
    is_multi_spec: bool,
}

// ========================
// Paths
// ========================

pub fn items_path(cookie_id: Option<&str>) -> String {
    match cookie_id {
        Some(id) if !id.is_empty() => format!("/items/cookie/{}", seg(id)),
        _ => "/items".to_string(),
    }
}

pub fn item_path(cookie_id: &str, item_id: &str) -> String {
    format!("/items/{}/{}", seg(cookie_id), seg(item_id))
}

// ========================
// Commands
// ========================

/// List stored items, optionally for one account
pub async fn get_items(client: &ApiClient, cookie_id: Option<&str>) -> Result<Vec<Item>, ApiError> {
    let listing: Listing<Item> = get(client, &items_path(cookie_id)).await?;
    Ok(listing.into_items())
}

pub async fn delete_item(client: &ApiClient, cookie_id: &str, item_id: &str) -> Result<ApiResponse, ApiError> {
    ensure_success(del(client, &item_path(cookie_id, item_id)).await?)
}

pub async fn batch_delete_items(client: &ApiClient, keys: &[ItemKey]) -> Result<ApiResponse, ApiError> {
    ensure_success(del_with(client, "/items/batch", &BatchKeysArgs { items: keys }).await?)
}

/// Pull one page of listings from the marketplace account
pub async fn fetch_items_from_account(
    client: &ApiClient,
    cookie_id: &str,
    page: Option<u32>,
) -> Result<FetchOutcome, ApiError> {
    let body = FetchItemsRequest {
        cookie_id,
        page: Some(page.unwrap_or(1).max(1)),
    };
    post(client, "/items/get-by-page", &body).await
}

/// Pull every page of listings from the marketplace account
pub async fn fetch_all_items_from_account(client: &ApiClient, cookie_id: &str) -> Result<FetchOutcome, ApiError> {
    let body = FetchItemsRequest { cookie_id, page: None };
    post(client, "/items/get-all-from-account", &body).await
}

pub async fn update_item(
    client: &ApiClient,
    cookie_id: &str,
    item_id: &str,
    patch: &ItemPatch,
) -> Result<ApiResponse, ApiError> {
    ensure_success(put(client, &item_path(cookie_id, item_id), patch).await?)
}

pub async fn update_item_multi_quantity_delivery(
    client: &ApiClient,
    cookie_id: &str,
    item_id: &str,
    enabled: bool,
) -> Result<ApiResponse, ApiError> {
    let path = format!("{}/multi-quantity-delivery", item_path(cookie_id, item_id));
    let body = MultiQuantityArgs { multi_quantity_delivery: enabled };
    ensure_success(put(client, &path, &body).await?)
}

pub async fn update_item_multi_spec(
    client: &ApiClient,
    cookie_id: &str,
    item_id: &str,
    enabled: bool,
) -> Result<ApiResponse, ApiError> {
    let path = format!("{}/multi-spec", item_path(cookie_id, item_id));
    ensure_success(put(client, &path, &MultiSpecArgs { is_multi_spec: enabled }).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_items_path() {
        assert_eq!(items_path(None), "/items");
        assert_eq!(items_path(Some("")), "/items");
        assert_eq!(items_path(Some("shop a")), "/items/cookie/shop%20a");
        assert_eq!(item_path("acc", "7788"), "/items/acc/7788");
    }

    #[test]
    fn test_batch_keys_body() {
        let keys = vec![ItemKey { cookie_id: "a".into(), item_id: "1".into() }];
        let v = serde_json::to_value(BatchKeysArgs { items: &keys }).unwrap();
        assert_eq!(v, json!({"items": [{"cookie_id": "a", "item_id": "1"}]}));
    }

    #[test]
    fn test_fetch_bodies() {
        let all = serde_json::to_value(FetchItemsRequest { cookie_id: "a", page: None }).unwrap();
        assert_eq!(all, json!({"cookie_id": "a"}));
        let page = serde_json::to_value(FetchItemsRequest { cookie_id: "a", page: Some(3) }).unwrap();
        assert_eq!(page, json!({"cookie_id": "a", "page": 3}));
    }

    #[test]
    fn test_patch_sends_only_set_fields() {
        let patch = ItemPatch {
            item_detail: Some("新详情".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"item_detail": "新详情"}));
    }
}
