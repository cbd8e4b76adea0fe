//! Frontend Models
//!
//! Data structures matching backend records and response envelopes.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Synthetic local id of a row; the backend sends either a number or a string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalId {
    Number(i64),
    Text(String),
}

impl fmt::Display for LocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalId::Number(n) => write!(f, "{}", n),
            LocalId::Text(s) => f.write_str(s),
        }
    }
}

/// (account, item) pair that addresses an item on the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    pub cookie_id: String,
    pub item_id: String,
}

/// Price as sent by the backend (number or preformatted string)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(f64),
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Number(n) => write!(f, "{}", n),
            Price::Text(s) => f.write_str(s),
        }
    }
}

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: Option<LocalId>,
    pub cookie_id: String,
    pub item_id: String,
    #[serde(default)]
    pub item_title: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub item_detail: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub item_price: Option<String>,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default, deserialize_with = "de_flag")]
    pub is_multi_spec: bool,
    #[serde(default, deserialize_with = "de_flag")]
    pub has_sku: bool,
    #[serde(default, deserialize_with = "de_flag")]
    pub multi_quantity_delivery: bool,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Item {
    /// Row id used for selection; falls back to the server key when the backend sent none
    pub fn local_id(&self) -> LocalId {
        self.id
            .clone()
            .unwrap_or_else(|| LocalId::Text(format!("{}/{}", self.cookie_id, self.item_id)))
    }

    pub fn key(&self) -> ItemKey {
        ItemKey {
            cookie_id: self.cookie_id.clone(),
            item_id: self.item_id.clone(),
        }
    }

    pub fn title_text(&self) -> Option<&str> {
        first_non_empty(&[&self.item_title, &self.title])
    }

    pub fn detail_text(&self) -> Option<&str> {
        first_non_empty(&[&self.item_detail, &self.desc])
    }

    /// Title for display, "-" when missing
    pub fn display_title(&self) -> &str {
        self.title_text().unwrap_or("-")
    }

    /// Price label: the backend's formatted price, else `¥{price}`, else "-"
    pub fn price_label(&self) -> String {
        if let Some(p) = first_non_empty(&[&self.item_price]) {
            return p.to_string();
        }
        match &self.price {
            Some(Price::Number(n)) if *n != 0.0 => format!("¥{}", n),
            Some(Price::Text(s)) if !s.is_empty() => format!("¥{}", s),
            _ => "-".to_string(),
        }
    }

    pub fn multi_spec(&self) -> bool {
        self.is_multi_spec || self.has_sku
    }

    pub fn listing_url(&self) -> String {
        format!("https://www.goofish.com/item?id={}", self.item_id)
    }
}

fn first_non_empty<'a>(fields: &[&'a Option<String>]) -> Option<&'a str> {
    fields
        .iter()
        .filter_map(|f| f.as_deref())
        .find(|s| !s.is_empty())
}

/// Accepts `true`/`false`, `0`/`1`, numeric strings and `null` for boolean flags
fn de_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Float(f64),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        None => false,
        Some(Flag::Bool(b)) => b,
        Some(Flag::Int(n)) => n != 0,
        Some(Flag::Float(n)) => n != 0.0,
        Some(Flag::Text(s)) => matches!(s.trim(), "1" | "true" | "True" | "TRUE"),
    })
}

/// Reads `null` as the type's default
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_true() -> bool {
    true
}

fn de_flag_default_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(true),
        Some(v) => de_flag(v).map_err(serde::de::Error::custom),
    }
}

/// Partial item update (only set fields are sent)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_price: Option<String>,
}

/// Per-item default reply as returned by the backend
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemDefaultReplyConfig {
    #[serde(default)]
    pub item_id: String,
    #[serde(default)]
    pub reply_content: Option<String>,
    #[serde(default)]
    pub reply_image: Option<String>,
    #[serde(default = "default_true", deserialize_with = "de_flag_default_true")]
    pub enabled: bool,
    #[serde(default, deserialize_with = "de_flag")]
    pub reply_once: bool,
}

/// Editable default-reply fields, sent on save (single and batch)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefaultReplyForm {
    pub reply_content: String,
    /// Always sent; empty clears the stored image
    pub reply_image_url: String,
    pub enabled: bool,
    pub reply_once: bool,
}

impl Default for DefaultReplyForm {
    fn default() -> Self {
        Self {
            reply_content: String::new(),
            reply_image_url: String::new(),
            enabled: true,
            reply_once: false,
        }
    }
}

impl From<ItemDefaultReplyConfig> for DefaultReplyForm {
    fn from(config: ItemDefaultReplyConfig) -> Self {
        Self {
            reply_content: config.reply_content.unwrap_or_default(),
            reply_image_url: config.reply_image.unwrap_or_default(),
            enabled: config.enabled,
            reply_once: config.reply_once,
        }
    }
}

impl DefaultReplyForm {
    /// Image URL as edited in a text box
    pub fn set_image(&mut self, url: &str) {
        self.reply_image_url = url.trim().to_string();
    }

    pub fn image(&self) -> &str {
        &self.reply_image_url
    }
}

/// Body of the batch default-reply save
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchDefaultReplyRequest {
    pub item_ids: Vec<String>,
    #[serde(flatten)]
    pub form: DefaultReplyForm,
}

/// Keyword reply attached to an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemReply {
    pub cookie_id: String,
    pub item_id: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub reply_content: String,
    #[serde(default)]
    pub item_title: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ItemReply {
    pub fn local_id(&self) -> LocalId {
        LocalId::Text(format!("{}/{}", self.cookie_id, self.item_id))
    }

    pub fn key(&self) -> ItemKey {
        ItemKey {
            cookie_id: self.cookie_id.clone(),
            item_id: self.item_id.clone(),
        }
    }

    pub fn display_title(&self) -> &str {
        first_non_empty(&[&self.item_title, &self.title]).unwrap_or("-")
    }
}

/// Body of an item reply save
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemReplyPayload {
    pub reply_content: String,
}

/// Linked seller account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub id: String,
}

/// Account as listed by the backend: a bare id or a record with one
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AccountEntry {
    Id(String),
    Record { id: String },
}

impl From<AccountEntry> for Account {
    fn from(entry: AccountEntry) -> Self {
        match entry {
            AccountEntry::Id(id) | AccountEntry::Record { id } => Account { id },
        }
    }
}

/// List endpoints answer either `[...]` or `{ "items": [...] }`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(default = "Option::default")]
        items: Option<Vec<T>>,
    },
}

impl<T> Listing<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Listing::Bare(items) => items,
            Listing::Wrapped { items } => items.unwrap_or_default(),
        }
    }
}

/// Generic `{success, message, data}` envelope
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse<T = serde_json::Value> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            success: None,
            message: None,
            data: None,
        }
    }
}

/// Result of pulling items from an account into the local database
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FetchOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub saved_count: u64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of both image upload endpoints
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Body of single-page and all-pages fetches
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchItemsRequest<'a> {
    pub cookie_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(v: serde_json::Value) -> Item {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_listing_shapes() {
        let bare: Listing<AccountEntry> = serde_json::from_value(json!([])).unwrap();
        assert!(bare.into_items().is_empty());

        let wrapped: Listing<ItemReply> = serde_json::from_value(json!({
            "items": [{"cookie_id": "a", "item_id": "1", "reply_content": "hi"}]
        }))
        .unwrap();
        assert_eq!(wrapped.into_items().len(), 1);

        let missing: Listing<ItemReply> = serde_json::from_value(json!({"total": 0})).unwrap();
        assert!(missing.into_items().is_empty());

        let null_items: Listing<ItemReply> = serde_json::from_value(json!({"items": null})).unwrap();
        assert!(null_items.into_items().is_empty());
    }

    #[test]
    fn test_item_fallbacks() {
        let it = item(json!({
            "id": 7, "cookie_id": "acc", "item_id": "123",
            "item_title": "", "title": "Old title",
            "desc": "from desc", "price": 19.5
        }));
        assert_eq!(it.local_id(), LocalId::Number(7));
        assert_eq!(it.display_title(), "Old title");
        assert_eq!(it.detail_text(), Some("from desc"));
        assert_eq!(it.price_label(), "¥19.5");

        let bare = item(json!({"cookie_id": "acc", "item_id": "9"}));
        assert_eq!(bare.display_title(), "-");
        assert_eq!(bare.detail_text(), None);
        assert_eq!(bare.price_label(), "-");
        assert_eq!(bare.local_id(), LocalId::Text("acc/9".into()));
    }

    #[test]
    fn test_item_price_prefers_formatted() {
        let it = item(json!({"cookie_id": "a", "item_id": "1", "item_price": "¥8.00", "price": 8}));
        assert_eq!(it.price_label(), "¥8.00");
    }

    #[test]
    fn test_flags_accept_numbers() {
        let it = item(json!({
            "id": "x1", "cookie_id": "a", "item_id": "1",
            "is_multi_spec": 0, "has_sku": 1, "multi_quantity_delivery": null
        }));
        assert!(it.multi_spec());
        assert!(!it.multi_quantity_delivery);
        assert_eq!(it.local_id(), LocalId::Text("x1".into()));
    }

    #[test]
    fn test_default_reply_config_defaults() {
        let cfg: ItemDefaultReplyConfig = serde_json::from_value(json!({"item_id": "1"})).unwrap();
        assert!(cfg.enabled);
        assert!(!cfg.reply_once);

        let form = DefaultReplyForm::from(ItemDefaultReplyConfig {
            item_id: "1".into(),
            reply_content: Some("你好".into()),
            reply_image: Some(String::new()),
            enabled: false,
            reply_once: true,
        });
        assert_eq!(form.reply_content, "你好");
        assert_eq!(form.reply_image_url, "");
        assert!(!form.enabled);
        assert!(form.reply_once);
    }

    #[test]
    fn test_batch_request_is_flat() {
        let body = BatchDefaultReplyRequest {
            item_ids: vec!["1".into(), "2".into()],
            form: DefaultReplyForm {
                reply_content: "hello".into(),
                ..Default::default()
            },
        };
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(
            v,
            json!({
                "item_ids": ["1", "2"],
                "reply_content": "hello",
                "reply_image_url": "",
                "enabled": true,
                "reply_once": false
            })
        );
    }

    #[test]
    fn test_account_entries() {
        let listing: Listing<AccountEntry> =
            serde_json::from_value(json!(["a", {"id": "b", "enabled": true}])).unwrap();
        let accounts: Vec<Account> = listing.into_items().into_iter().map(Account::from).collect();
        assert_eq!(accounts, vec![Account { id: "a".into() }, Account { id: "b".into() }]);
    }

    #[test]
    fn test_set_image_trims() {
        let mut form = DefaultReplyForm::default();
        form.set_image("  ");
        assert_eq!(form.image(), "");
        form.set_image(" /static/a.png ");
        assert_eq!(form.image(), "/static/a.png");
    }

    #[test]
    fn test_cleared_image_is_sent_empty() {
        let cfg: ItemDefaultReplyConfig = serde_json::from_value(json!({
            "item_id": "1", "reply_content": "hi", "reply_image": "/static/a.png"
        }))
        .unwrap();
        let mut form = DefaultReplyForm::from(cfg);
        assert_eq!(form.image(), "/static/a.png");
        form.set_image("");
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            json!({"reply_content": "hi", "reply_image_url": "", "enabled": true, "reply_once": false})
        );
    }

    #[test]
    fn test_null_reply_content_keeps_row() {
        let listing: Listing<ItemReply> = serde_json::from_value(json!({
            "items": [
                {"cookie_id": "a", "item_id": "1", "reply_content": null},
                {"cookie_id": "a", "item_id": "2", "reply_content": "在的"}
            ]
        }))
        .unwrap();
        let rows = listing.into_items();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].reply_content, "");
        assert_eq!(rows[1].reply_content, "在的");
    }
}
