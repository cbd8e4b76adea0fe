//! Search Filter
//!
//! Case-insensitive substring match over a row's title, description and id.

use crate::selection::Listed;

pub fn matches<T: Listed>(row: &T, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    if keyword.is_empty() {
        return true;
    }
    row.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&keyword))
}

/// Rows matching `keyword`, in original order; an empty keyword keeps everything
pub fn filter_rows<T: Listed + Clone>(rows: &[T], keyword: &str) -> Vec<T> {
    rows.iter().filter(|row| matches(*row, keyword)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Item, ItemReply};

    fn item(item_id: &str, title: Option<&str>, detail: Option<&str>) -> Item {
        serde_json::from_value(serde_json::json!({
            "cookie_id": "acc",
            "item_id": item_id,
            "title": title,
            "desc": detail,
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_keyword_keeps_all() {
        let items = vec![item("1", None, None), item("2", Some("x"), None)];
        assert_eq!(filter_rows(&items, "").len(), 2);
    }

    #[test]
    fn test_whitespace_is_part_of_keyword() {
        let items = vec![item("1", Some("iPhone 15"), None), item("2", Some("iPhone15"), None)];
        let found = filter_rows(&items, "phone ");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].item_id, "1");
        assert!(filter_rows(&items, "   ").is_empty());
    }

    #[test]
    fn test_title_case_insensitive() {
        let items = vec![item("1", Some("iPhone 15 Pro"), None), item("2", Some("Switch"), None)];
        let found = filter_rows(&items, "IPHONE");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].item_id, "1");
    }

    #[test]
    fn test_matches_description_and_id() {
        let items = vec![
            item("7788", Some("A"), None),
            item("1", Some("B"), Some("九成新 Mechanical Keyboard")),
        ];
        assert_eq!(filter_rows(&items, "keyboard")[0].item_id, "1");
        assert_eq!(filter_rows(&items, "九成新")[0].item_id, "1");
        assert_eq!(filter_rows(&items, "778")[0].item_id, "7788");
        assert!(filter_rows(&items, "missing").is_empty());
    }

    #[test]
    fn test_reply_rows() {
        let reply = ItemReply {
            cookie_id: "acc".into(),
            item_id: "5".into(),
            reply_content: "Still Available".into(),
            item_title: None,
            title: None,
            updated_at: None,
        };
        assert!(matches(&reply, "available"));
        assert!(!matches(&reply, "sold"));
    }
}
