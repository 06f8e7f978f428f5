//! serde 辅助模块
//!
//! 预测服务把 pandas 的 NaN/缺失值清洗为 JSON `null`，
//! 这里提供把 `null` 落回 `Default` 的反序列化辅助函数。

use serde::{Deserialize, Deserializer};

/// `null` 与缺失字段一律按 `T::default()` 处理
///
/// 搭配 `#[serde(default, deserialize_with = "null_to_default")]` 使用。
pub fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "null_to_default")]
        score: f64,
        #[serde(default, deserialize_with = "null_to_default")]
        name: String,
    }

    #[test]
    fn null_becomes_default() {
        let row: Row = serde_json::from_str(r#"{"score": null, "name": null}"#).unwrap();
        assert_eq!(row.score, 0.0);
        assert_eq!(row.name, "");
    }

    #[test]
    fn missing_becomes_default() {
        let row: Row = serde_json::from_str("{}").unwrap();
        assert_eq!(row.score, 0.0);
    }

    #[test]
    fn present_value_passes_through() {
        let row: Row = serde_json::from_str(r#"{"score": 78.5, "name": "Zidane"}"#).unwrap();
        assert_eq!(row.score, 78.5);
        assert_eq!(row.name, "Zidane");
    }
}
