//! Image Upload
//!
//! Generic image upload and the multipart form shared with per-item uploads.

use super::{post_form, ApiClient};
use crate::error::ApiError;
use crate::models::UploadResponse;

/// Form field the backend reads the file from
const IMAGE_FIELD: &str = "image";

pub(crate) fn image_form(image: &web_sys::File) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
    form.append_with_blob_and_filename(IMAGE_FIELD, image, &image.name())
        .map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
    Ok(form)
}

/// Upload an image not tied to a particular item
pub async fn upload_image(client: &ApiClient, image: &web_sys::File) -> Result<UploadResponse, ApiError> {
    post_form(client, "/upload-image", image_form(image)?).await
}

impl UploadResponse {
    /// URL of the stored image; `require_success` also demands `success: true`
    pub fn into_image_url(self, require_success: bool) -> Result<String, String> {
        let accepted = !require_success || self.success == Some(true);
        match self.image_url.filter(|u| !u.is_empty()) {
            Some(url) if accepted => Ok(url),
            _ => Err(self
                .detail
                .or(self.message)
                .unwrap_or_else(|| "图片上传失败".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> UploadResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_item_upload_requires_success() {
        let ok = response(r#"{"success":true,"image_url":"/static/uploads/a.png"}"#);
        assert_eq!(ok.into_image_url(true).unwrap(), "/static/uploads/a.png");

        let refused = response(r#"{"success":false,"image_url":"/x.png","message":"too large"}"#);
        assert_eq!(refused.into_image_url(true).unwrap_err(), "too large");
    }

    #[test]
    fn test_generic_upload_only_needs_url() {
        let ok = response(r#"{"image_url":"/static/uploads/b.png"}"#);
        assert_eq!(ok.into_image_url(false).unwrap(), "/static/uploads/b.png");

        let failed = response(r#"{"detail":"unsupported type","message":"ignored"}"#);
        assert_eq!(failed.into_image_url(false).unwrap_err(), "unsupported type");

        assert_eq!(response("{}").into_image_url(false).unwrap_err(), "图片上传失败");
    }
}
