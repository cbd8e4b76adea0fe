//! API Connection Configuration
//!
//! Base URL and bearer token, persisted in `localStorage`.

use log::LevelFilter;
use wasm_bindgen::JsValue;

const BASE_URL_KEY: &str = "item_console.base_url";
const TOKEN_KEY: &str = "item_console.token";
const LOG_LEVEL_KEY: &str = "item_console.log_level";

/// Base URL baked in at build time, empty means same origin
pub const DEFAULT_BASE_URL: &str = match option_env!("ITEM_CONSOLE_API_BASE") {
    Some(url) => url,
    None => "",
};

/// Connection settings used by every API call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl ApiConfig {
    /// Build from raw stored values; a stored empty base URL means same origin,
    /// blank tokens and unknown levels fall back
    pub fn from_stored(base_url: Option<String>, token: Option<String>, log_level: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: base_url
                .map(|u| normalize_base_url(&u))
                .unwrap_or(defaults.base_url),
            token: token.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()),
            log_level: log_level
                .and_then(|l| l.trim().parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Join the base URL with an absolute API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Read the persisted configuration, falling back to defaults outside a browser
    pub fn load() -> Self {
        match local_storage() {
            Some(storage) => Self::from_stored(
                storage.get_item(BASE_URL_KEY).ok().flatten(),
                storage.get_item(TOKEN_KEY).ok().flatten(),
                storage.get_item(LOG_LEVEL_KEY).ok().flatten(),
            ),
            None => Self::default(),
        }
    }

    pub fn save(&self) -> Result<(), String> {
        let storage = local_storage().ok_or_else(|| "localStorage unavailable".to_string())?;
        storage.set_item(BASE_URL_KEY, &self.base_url).map_err(js_error)?;
        match &self.token {
            Some(token) => storage.set_item(TOKEN_KEY, token),
            None => storage.remove_item(TOKEN_KEY),
        }
        .map_err(js_error)?;
        storage
            .set_item(LOG_LEVEL_KEY, self.log_level.as_str())
            .map_err(js_error)
    }
}

/// Trim whitespace and trailing slashes so paths can be appended directly
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(not(target_arch = "wasm32"))]
fn local_storage() -> Option<web_sys::Storage> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored_defaults() {
        let cfg = ApiConfig::from_stored(None, Some("   ".into()), Some("bogus".into()));
        assert_eq!(cfg, ApiConfig::default());
        assert!(!cfg.is_authenticated());
    }

    #[test]
    fn test_from_stored_values() {
        let cfg = ApiConfig::from_stored(
            Some(" https://console.example.com/api/ ".into()),
            Some("abc".into()),
            Some("debug".into()),
        );
        assert_eq!(cfg.base_url, "https://console.example.com/api");
        assert_eq!(cfg.token.as_deref(), Some("abc"));
        assert_eq!(cfg.log_level, LevelFilter::Debug);
        assert_eq!(cfg.url("/items"), "https://console.example.com/api/items");
    }

    #[test]
    fn test_stored_empty_base_url_is_same_origin() {
        let cfg = ApiConfig::from_stored(Some("  ".into()), Some("abc".into()), None);
        assert_eq!(cfg.base_url, "");
        assert_eq!(cfg.url("/items"), "/items");
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("/"), "");
        assert_eq!(normalize_base_url("http://h:8080//"), "http://h:8080");
    }
}
