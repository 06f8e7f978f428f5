//! 日期格式化模块
//!
//! 认证服务以 ISO 8601 字符串下发 `created_at`（可能带或不带时区、
//! 可能带微秒），这里统一解析并按法语习惯 (dd/mm/YYYY) 格式化。

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// 将 ISO 8601 / RFC 3339 时间字符串格式化为 `dd/mm/YYYY`
///
/// 返回 None 如果解析失败
pub fn format_date_fr(raw: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.format("%d/%m/%Y").to_string());
    }
    // Python 的 isoformat() 默认不带时区
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.format("%d/%m/%Y").to_string());
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d.format("%d/%m/%Y").to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339() {
        assert_eq!(
            format_date_fr("2024-03-09T18:05:00+02:00").as_deref(),
            Some("09/03/2024")
        );
    }

    #[test]
    fn formats_naive_isoformat_with_micros() {
        assert_eq!(
            format_date_fr("2023-11-30T08:00:00.123456").as_deref(),
            Some("30/11/2023")
        );
    }

    #[test]
    fn formats_bare_date() {
        assert_eq!(format_date_fr("2022-07-01").as_deref(), Some("01/07/2022"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(format_date_fr("pas une date").is_none());
        assert!(format_date_fr("").is_none());
    }
}
