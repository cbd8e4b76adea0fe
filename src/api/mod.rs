//! REST Client
//!
//! Thin wrappers over the backend's HTTP endpoints, organized by domain.
//! Every call goes through [`ApiClient`], which carries base URL and bearer token.

mod accounts;
mod default_reply;
mod item_replies;
mod items;
mod upload;

use gloo_net::http::{Request, RequestBuilder};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::ApiResponse;

// Re-export all public items
pub use accounts::*;
pub use default_reply::*;
pub use item_replies::*;
pub use items::*;
pub use upload::*;

/// Characters left as-is in a path segment (RFC 3986 unreserved)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Connection handle passed to every wrapper
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.config.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }
}

/// Percent-encode one path segment
pub(crate) fn seg(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

// ========================
// Verb Helpers
// ========================

pub(crate) async fn get<T: DeserializeOwned>(client: &ApiClient, path: &str) -> Result<T, ApiError> {
    let request = client.authorize(Request::get(&client.url(path))).build()?;
    execute("GET", path, request).await
}

pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
    client: &ApiClient,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = client
        .authorize(Request::post(&client.url(path)))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    execute("POST", path, request).await
}

pub(crate) async fn put<B: Serialize, T: DeserializeOwned>(
    client: &ApiClient,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = client
        .authorize(Request::put(&client.url(path)))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    execute("PUT", path, request).await
}

pub(crate) async fn del<T: DeserializeOwned>(client: &ApiClient, path: &str) -> Result<T, ApiError> {
    let request = client.authorize(Request::delete(&client.url(path))).build()?;
    execute("DELETE", path, request).await
}

/// DELETE carrying a JSON body (batch endpoints)
pub(crate) async fn del_with<B: Serialize, T: DeserializeOwned>(
    client: &ApiClient,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = client
        .authorize(Request::delete(&client.url(path)))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    execute("DELETE", path, request).await
}

/// Multipart POST; the browser sets the boundary header itself.
/// Upload endpoints describe failures in their JSON body, so an error status
/// still decodes into `T` when the body fits.
pub(crate) async fn post_form<T: DeserializeOwned>(
    client: &ApiClient,
    path: &str,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    let request = client
        .authorize(Request::post(&client.url(path)))
        .body(form)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    send("POST", path, request, true).await
}

async fn execute<T: DeserializeOwned>(method: &str, path: &str, request: Request) -> Result<T, ApiError> {
    send(method, path, request, false).await
}

async fn send<T: DeserializeOwned>(
    method: &str,
    path: &str,
    request: Request,
    decode_errors: bool,
) -> Result<T, ApiError> {
    log::debug!("{} {}", method, path);
    let response = request.send().await.map_err(|e| {
        log::warn!("{} {} failed: {}", method, path, e);
        ApiError::from(e)
    })?;
    let body = response.text().await?;
    read_response(response.status(), &response.status_text(), &body, decode_errors).map_err(|err| {
        log::warn!("{} {} -> {}", method, path, err);
        err
    })
}

// ========================
// Response Handling
// ========================

/// Turn a finished response into `T`; non-2xx is an error unless `decode_errors`
/// is set and the body decodes
pub(crate) fn read_response<T: DeserializeOwned>(
    status: u16,
    status_text: &str,
    body: &str,
    decode_errors: bool,
) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        return decode_body(body);
    }
    if decode_errors && !body.trim().is_empty() {
        if let Ok(value) = serde_json::from_str(body) {
            return Ok(value);
        }
    }
    Err(status_error(status, status_text, body))
}

/// Decode a JSON body; an empty body reads as `{}`
pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    if body.trim().is_empty() {
        return serde_json::from_value(serde_json::Value::Object(Default::default())).map_err(ApiError::from);
    }
    serde_json::from_str(body).map_err(ApiError::from)
}

/// Build a status error from the body's `detail` or `message`, else the status text
pub(crate) fn status_error(status: u16, status_text: &str, body: &str) -> ApiError {
    let from_body = serde_json::from_str::<serde_json::Value>(body).ok().and_then(|v| {
        ["detail", "message"].iter().find_map(|key| match v.get(key) {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(serde_json::Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        })
    });
    let message = from_body
        .or_else(|| Some(status_text.to_string()).filter(|s| !s.is_empty()))
        .unwrap_or_else(|| format!("HTTP {}", status));
    ApiError::Status { status, message }
}

/// Treat an explicit `success: false` envelope as a failure
pub(crate) fn ensure_success<T>(response: ApiResponse<T>) -> Result<ApiResponse<T>, ApiError> {
    match response.success {
        Some(false) => Err(ApiError::Rejected(
            response.message.unwrap_or_else(|| "request rejected".to_string()),
        )),
        _ => Ok(response),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Item, Listing};

    #[test]
    fn test_seg_encodes_reserved() {
        assert_eq!(seg("abc-1_2.3~"), "abc-1_2.3~");
        assert_eq!(seg("a/b c"), "a%2Fb%20c");
        assert_eq!(seg("账号"), "%E8%B4%A6%E5%8F%B7");
    }

    #[test]
    fn test_client_url() {
        let client = ApiClient::new(ApiConfig {
            base_url: "http://localhost:8080".into(),
            ..Default::default()
        });
        assert_eq!(client.url("/items"), "http://localhost:8080/items");
    }

    #[test]
    fn test_decode_empty_body() {
        let resp: ApiResponse = decode_body("").unwrap();
        assert_eq!(resp, ApiResponse::default());
        let listing: Listing<Item> = decode_body("  ").unwrap();
        assert!(listing.into_items().is_empty());
    }

    #[test]
    fn test_decode_bad_body() {
        let err = decode_body::<ApiResponse>("<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_status_error_message() {
        assert_eq!(
            status_error(401, "Unauthorized", r#"{"detail":"token expired"}"#),
            ApiError::Status { status: 401, message: "token expired".into() }
        );
        assert_eq!(
            status_error(400, "Bad Request", r#"{"message":"bad id"}"#),
            ApiError::Status { status: 400, message: "bad id".into() }
        );
        assert_eq!(
            status_error(502, "Bad Gateway", "upstream down"),
            ApiError::Status { status: 502, message: "Bad Gateway".into() }
        );
        assert_eq!(
            status_error(500, "", ""),
            ApiError::Status { status: 500, message: "HTTP 500".into() }
        );
        let ApiError::Status { message, .. } =
            status_error(422, "Unprocessable", r#"{"detail":[{"msg":"field required"}]}"#)
        else {
            panic!("expected status error");
        };
        assert!(message.contains("field required"));
    }

    #[test]
    fn test_error_body_decoded_for_uploads() {
        let body = r#"{"detail":"文件过大"}"#;
        let upload: crate::models::UploadResponse = read_response(413, "Payload Too Large", body, true).unwrap();
        assert_eq!(upload.into_image_url(false).unwrap_err(), "文件过大");

        let err = read_response::<crate::models::UploadResponse>(502, "Bad Gateway", "<html>", true).unwrap_err();
        assert_eq!(err, ApiError::Status { status: 502, message: "Bad Gateway".into() });

        let err = read_response::<ApiResponse>(400, "Bad Request", body, false).unwrap_err();
        assert_eq!(err, ApiError::Status { status: 400, message: "文件过大".into() });
    }

    #[test]
    fn test_ensure_success() {
        let ok: ApiResponse = serde_json::from_str(r#"{"message":"done"}"#).unwrap();
        assert!(ensure_success(ok).is_ok());
        let rejected: ApiResponse = serde_json::from_str(r#"{"success":false,"message":"no"}"#).unwrap();
        assert_eq!(ensure_success(rejected).unwrap_err(), ApiError::Rejected("no".into()));
    }
}
