//! Item Reply Endpoints
//!
//! Keyword replies stored per item.

use super::items::BatchKeysArgs;
use super::{del, del_with, ensure_success, get, put, seg, ApiClient};
use crate::error::ApiError;
use crate::models::{ApiResponse, ItemKey, ItemReply, ItemReplyPayload, Listing};

pub fn item_replies_path(cookie_id: Option<&str>) -> String {
    match cookie_id {
        Some(id) if !id.is_empty() => format!("/itemReplays/cookie/{}", seg(id)),
        _ => "/itemReplays".to_string(),
    }
}

pub fn item_reply_path(cookie_id: &str, item_id: &str) -> String {
    format!("/item-reply/{}/{}", seg(cookie_id), seg(item_id))
}

pub async fn get_item_replies(client: &ApiClient, cookie_id: Option<&str>) -> Result<Vec<ItemReply>, ApiError> {
    let listing: Listing<ItemReply> = get(client, &item_replies_path(cookie_id)).await?;
    Ok(listing.into_items())
}

/// Create or replace the reply of one item
pub async fn save_item_reply(
    client: &ApiClient,
    cookie_id: &str,
    item_id: &str,
    payload: &ItemReplyPayload,
) -> Result<ApiResponse, ApiError> {
    ensure_success(put(client, &item_reply_path(cookie_id, item_id), payload).await?)
}

pub async fn delete_item_reply(client: &ApiClient, cookie_id: &str, item_id: &str) -> Result<ApiResponse, ApiError> {
    ensure_success(del(client, &item_reply_path(cookie_id, item_id)).await?)
}

pub async fn batch_delete_item_replies(client: &ApiClient, keys: &[ItemKey]) -> Result<ApiResponse, ApiError> {
    ensure_success(del_with(client, "/item-reply/batch", &BatchKeysArgs { items: keys }).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_paths() {
        assert_eq!(item_replies_path(None), "/itemReplays");
        assert_eq!(item_replies_path(Some("acc")), "/itemReplays/cookie/acc");
        assert_eq!(item_reply_path("acc", "1/2"), "/item-reply/acc/1%2F2");
    }
}
