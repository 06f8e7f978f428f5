//! 批量结果处理模块
//!
//! 批量预测结果的本地检索、筛选、排序、统计，以及两种
//! CSV 导出文本的生成。全部在客户端完成，纯函数、无 DOM 依赖。

use crate::attributes::{
    AttributeValue, BATCH_RECOMMENDATION_ATTRIBUTES, MIN_RECOMMENDATION_ATTRIBUTES,
};
use crate::performance::{PerformanceTier, format_score};
use crate::protocol::BatchPrediction;
use std::collections::BTreeMap;

#[cfg(test)]
mod tests;

// =========================================================
// 筛选与排序
// =========================================================

/// 排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// 按预测分数降序
    #[default]
    Prediction,
    /// 按姓名 (本地化字典序)
    Name,
    /// 按编号升序
    Id,
}

impl SortKey {
    pub fn as_key(&self) -> &'static str {
        match self {
            SortKey::Prediction => "prediction",
            SortKey::Name => "name",
            SortKey::Id => "id",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "name" => SortKey::Name,
            "id" => SortKey::Id,
            _ => SortKey::Prediction,
        }
    }
}

/// 姓名比较用的本地化键：小写并去掉法语变音符号
pub fn locale_key(name: &str) -> String {
    name.chars()
        .flat_map(|c| c.to_lowercase())
        .map(|c| match c {
            'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

/// 文本检索 (姓名或球员编号的子串) + 等级筛选
pub fn filter_predictions(
    rows: &[BatchPrediction],
    search: &str,
    tier: Option<PerformanceTier>,
) -> Vec<BatchPrediction> {
    let needle = search.to_lowercase();
    rows.iter()
        .filter(|row| {
            let matches_search = needle.is_empty()
                || row.name.to_lowercase().contains(&needle)
                || row.player_id_text().to_lowercase().contains(&needle);
            let matches_tier = match tier {
                Some(tier) => PerformanceTier::from_score(row.prediction) == tier,
                None => true,
            };
            matches_search && matches_tier
        })
        .cloned()
        .collect()
}

pub fn sort_predictions(rows: &mut [BatchPrediction], key: SortKey) {
    match key {
        SortKey::Prediction => rows.sort_by(|a, b| b.prediction.total_cmp(&a.prediction)),
        SortKey::Name => rows.sort_by(|a, b| locale_key(&a.name).cmp(&locale_key(&b.name))),
        SortKey::Id => rows.sort_by_key(|row| row.id),
    }
}

pub fn filter_and_sort(
    rows: &[BatchPrediction],
    search: &str,
    tier: Option<PerformanceTier>,
    key: SortKey,
) -> Vec<BatchPrediction> {
    let mut filtered = filter_predictions(rows, search, tier);
    sort_predictions(&mut filtered, key);
    filtered
}

// =========================================================
// 统计
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerformanceStats {
    pub excellent: usize,
    pub good: usize,
    pub average: usize,
    pub poor: usize,
    pub mean: f64,
}

impl PerformanceStats {
    pub fn count(&self, tier: PerformanceTier) -> usize {
        match tier {
            PerformanceTier::Excellent => self.excellent,
            PerformanceTier::Good => self.good,
            PerformanceTier::Average => self.average,
            PerformanceTier::Poor => self.poor,
        }
    }

    /// 平均分的展示文本 (两位小数)
    pub fn mean_label(&self) -> String {
        format!("{:.2}", self.mean)
    }
}

pub fn performance_stats(rows: &[BatchPrediction]) -> PerformanceStats {
    let mut stats = PerformanceStats::default();
    let mut sum = 0.0;
    for row in rows {
        match PerformanceTier::from_score(row.prediction) {
            PerformanceTier::Excellent => stats.excellent += 1,
            PerformanceTier::Good => stats.good += 1,
            PerformanceTier::Average => stats.average += 1,
            PerformanceTier::Poor => stats.poor += 1,
        }
        sum += row.prediction;
    }
    if !rows.is_empty() {
        stats.mean = sum / rows.len() as f64;
    }
    stats
}

// =========================================================
// CSV 导出
// =========================================================

pub const CSV_SUMMARY_HEADERS: [&str; 5] =
    ["ID", "ID Joueur", "Nom", "Prédiction", "Niveau de performance"];

/// 完整导出时从附加列里剔除的固定键
pub const CSV_EXCLUDED_KEYS: [&str; 5] = ["id", "player_id", "name", "prediction", "image"];

pub fn summary_filename(date: &str) -> String {
    format!("predictions_joueurs_resume_{date}.csv")
}

pub fn full_filename(date: &str) -> String {
    format!("predictions_joueurs_complet_{date}.csv")
}

/// 含逗号的文本字段加双引号
fn csv_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => {
            if s.contains(',') {
                format!("\"{s}\"")
            } else {
                s.clone()
            }
        }
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn summary_fields(row: &BatchPrediction) -> Vec<String> {
    vec![
        row.id.to_string(),
        csv_value(&row.player_id),
        // 姓名总是加引号
        format!("\"{}\"", row.name),
        format_score(row.prediction),
        PerformanceTier::from_score(row.prediction).label().to_string(),
    ]
}

/// 所有行附加列的并集，按首次出现顺序
fn extra_columns(rows: &[BatchPrediction]) -> Vec<String> {
    let mut columns = Vec::new();
    for row in rows {
        for key in row.extra.keys() {
            if CSV_EXCLUDED_KEYS.contains(&key.as_str()) {
                continue;
            }
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

/// 摘要导出：固定 5 列，一行一个结果
pub fn export_summary_csv(rows: &[BatchPrediction]) -> String {
    let mut lines = vec![CSV_SUMMARY_HEADERS.join(",")];
    for row in rows {
        lines.push(summary_fields(row).join(","));
    }
    lines.join("\n")
}

/// 完整导出：摘要列 + 所有出现过的数据列
pub fn export_full_csv(rows: &[BatchPrediction]) -> String {
    let columns = extra_columns(rows);

    let mut header: Vec<String> = CSV_SUMMARY_HEADERS.iter().map(|h| h.to_string()).collect();
    header.extend(columns.iter().cloned());

    let mut lines = vec![header.join(",")];
    for row in rows {
        let mut fields = summary_fields(row);
        for column in &columns {
            let value = row.extra.get(column).unwrap_or(&serde_json::Value::Null);
            fields.push(csv_value(value));
        }
        lines.push(fields.join(","));
    }
    lines.join("\n")
}

// =========================================================
// 推荐功能的数据提取
// =========================================================

fn value_as_number(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// 从结果行提取白名单属性的数值
pub fn recommendation_attributes(row: &BatchPrediction) -> BTreeMap<String, f64> {
    let mut attributes = BTreeMap::new();
    for name in BATCH_RECOMMENDATION_ATTRIBUTES {
        if let Some(value) = row.extra.get(name).and_then(value_as_number) {
            attributes.insert(name.to_string(), value);
        }
    }
    attributes
}

/// 该行是否有足够数据进入详情/推荐页
pub fn has_recommendation_data(row: &BatchPrediction) -> bool {
    recommendation_attributes(row).len() >= MIN_RECOMMENDATION_ATTRIBUTES
}

/// 结果行转为属性映射 (详情页用，保留枚举文本)
pub fn player_data_from_row(row: &BatchPrediction) -> BTreeMap<String, AttributeValue> {
    row.extra
        .iter()
        .filter_map(|(key, value)| {
            let value = match value {
                serde_json::Value::Number(n) => n.as_f64().map(AttributeValue::Number)?,
                serde_json::Value::String(s) => AttributeValue::Text(s.clone()),
                _ => return None,
            };
            Some((key.clone(), value))
        })
        .collect()
}
