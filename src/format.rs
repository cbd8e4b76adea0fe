//! Display Formatting
//!
//! Timestamps and the toast texts shown by the item pages.

use chrono::{DateTime, Local, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a backend timestamp for the table; unknown formats are shown verbatim
pub fn format_timestamp(raw: Option<&str>) -> String {
    let raw = match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return "-".to_string(),
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(DISPLAY_FORMAT).to_string();
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn on_off(enabled: bool) -> &'static str {
    if enabled { "开启" } else { "关闭" }
}

pub fn toggle_message(feature: &str, enabled: bool) -> String {
    format!("{}已{}", feature, on_off(enabled))
}

pub fn fetch_summary(total: u64, saved: u64) -> String {
    format!("成功获取商品，共 {} 件，保存 {} 件", total, saved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_timestamp() {
        assert_eq!(format_timestamp(None), "-");
        assert_eq!(format_timestamp(Some("  ")), "-");
    }

    #[test]
    fn test_naive_timestamps() {
        assert_eq!(format_timestamp(Some("2024-03-01 09:05:00")), "2024-03-01 09:05:00");
        assert_eq!(format_timestamp(Some("2024-03-01T09:05:00.123456")), "2024-03-01 09:05:00");
    }

    #[test]
    fn test_rfc3339_converted_to_local() {
        let raw = "2024-03-01T09:05:00+00:00";
        let expected = DateTime::parse_from_rfc3339(raw)
            .unwrap()
            .with_timezone(&Local)
            .format(DISPLAY_FORMAT)
            .to_string();
        assert_eq!(format_timestamp(Some(raw)), expected);
    }

    #[test]
    fn test_unparseable_kept() {
        assert_eq!(format_timestamp(Some("yesterday")), "yesterday");
    }

    #[test]
    fn test_messages() {
        assert_eq!(toggle_message("多规格", true), "多规格已开启");
        assert_eq!(toggle_message("多数量发货", false), "多数量发货已关闭");
        assert_eq!(fetch_summary(12, 10), "成功获取商品，共 12 件，保存 10 件");
    }
}
