//! Default Reply Endpoints
//!
//! Per-item and batch configuration of the automatic reply sent to buyers.

use serde::Serialize;

use super::items::item_path;
use super::upload::image_form;
use super::{del, ensure_success, get, post, post_form, put, seg, ApiClient};
use crate::error::ApiError;
use crate::models::{ApiResponse, BatchDefaultReplyRequest, DefaultReplyForm, ItemDefaultReplyConfig, UploadResponse};

#[derive(Serialize)]
struct ItemIdsArgs<'a> {
    item_ids: &'a [String],
}

pub fn default_reply_path(cookie_id: &str, item_id: &str) -> String {
    format!("{}/default-reply", item_path(cookie_id, item_id))
}

pub fn batch_default_reply_path(cookie_id: &str) -> String {
    format!("/items/{}/batch-default-reply", seg(cookie_id))
}

pub fn batch_delete_default_reply_path(cookie_id: &str) -> String {
    format!("/items/{}/batch-delete-default-reply", seg(cookie_id))
}

/// Stored config of one item; `None` when the item has none or the server says so
pub async fn get_item_default_reply(
    client: &ApiClient,
    cookie_id: &str,
    item_id: &str,
) -> Result<Option<ItemDefaultReplyConfig>, ApiError> {
    let response: ApiResponse<ItemDefaultReplyConfig> = get(client, &default_reply_path(cookie_id, item_id)).await?;
    Ok(match response.success {
        Some(true) => response.data,
        _ => None,
    })
}

pub async fn save_item_default_reply(
    client: &ApiClient,
    cookie_id: &str,
    item_id: &str,
    form: &DefaultReplyForm,
) -> Result<ApiResponse, ApiError> {
    ensure_success(put(client, &default_reply_path(cookie_id, item_id), form).await?)
}

pub async fn delete_item_default_reply(
    client: &ApiClient,
    cookie_id: &str,
    item_id: &str,
) -> Result<ApiResponse, ApiError> {
    ensure_success(del(client, &default_reply_path(cookie_id, item_id)).await?)
}

/// Upload an image for one item's default reply
pub async fn upload_item_default_reply_image(
    client: &ApiClient,
    cookie_id: &str,
    item_id: &str,
    image: &web_sys::File,
) -> Result<UploadResponse, ApiError> {
    let path = format!("{}/upload-image", default_reply_path(cookie_id, item_id));
    post_form(client, &path, image_form(image)?).await
}

/// Apply one config to several items of the same account
pub async fn batch_save_item_default_reply(
    client: &ApiClient,
    cookie_id: &str,
    request: &BatchDefaultReplyRequest,
) -> Result<ApiResponse, ApiError> {
    ensure_success(post(client, &batch_default_reply_path(cookie_id), request).await?)
}

pub async fn batch_delete_item_default_reply(
    client: &ApiClient,
    cookie_id: &str,
    item_ids: &[String],
) -> Result<ApiResponse, ApiError> {
    let body = ItemIdsArgs { item_ids };
    ensure_success(post(client, &batch_delete_default_reply_path(cookie_id), &body).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_reply_paths() {
        assert_eq!(default_reply_path("acc", "42"), "/items/acc/42/default-reply");
        assert_eq!(batch_default_reply_path("acc"), "/items/acc/batch-default-reply");
        assert_eq!(batch_delete_default_reply_path("a b"), "/items/a%20b/batch-delete-default-reply");
    }

    #[test]
    fn test_save_body_sends_empty_image() {
        let form = DefaultReplyForm {
            reply_content: "在的".into(),
            reply_image_url: String::new(),
            enabled: true,
            reply_once: true,
        };
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            json!({"reply_content": "在的", "reply_image_url": "", "enabled": true, "reply_once": true})
        );
    }

    #[test]
    fn test_item_ids_body() {
        let ids = vec!["1".to_string(), "2".to_string()];
        let v = serde_json::to_value(ItemIdsArgs { item_ids: &ids }).unwrap();
        assert_eq!(v, json!({"item_ids": ["1", "2"]}));
    }
}
