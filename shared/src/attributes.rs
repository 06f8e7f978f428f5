//! 球员属性目录模块
//!
//! 这是纯粹的领域层，不依赖 DOM。定义 34 个数值属性 (1-100，
//! 其中 3 个以 1-10 展示、存储时 ×10)、3 个枚举属性，以及
//! 表单默认值、法语标签、分组和推荐功能的数据门槛。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 属性值：数值或枚举文本
///
/// 预测请求体直接序列化此类型，JSON 形如 `{"finishing": 90, "preferred_foot": "droit"}`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Number(f64),
    Text(String),
}

impl AttributeValue {
    /// 尝试取数值；文本会被解析 (对应 CSV 来源的字符串数字)
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(n) => Some(*n),
            AttributeValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    pub fn display(&self) -> String {
        match self {
            AttributeValue::Number(n) => crate::performance::format_score(*n),
            AttributeValue::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        AttributeValue::Number(n)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

// =========================================================
// 属性目录 (Catalogue)
// =========================================================

/// 34 个数值属性及其表单默认值
pub const NUMERIC_DEFAULTS: [(&str, f64); 34] = [
    ("potential", 82.0),
    ("acceleration", 75.0),
    ("sprint_speed", 78.0),
    ("agility", 72.0),
    ("balance", 70.0),
    ("jumping", 68.0),
    ("stamina", 85.0),
    ("strength", 74.0),
    ("dribbling", 80.0),
    ("crossing", 65.0),
    ("finishing", 78.0),
    ("heading_accuracy", 62.0),
    ("short_passing", 82.0),
    ("volleys", 60.0),
    ("curve", 68.0),
    ("free_kick_accuracy", 65.0),
    ("long_passing", 75.0),
    ("ball_control", 84.0),
    ("long_shots", 72.0),
    ("shot_power", 76.0),
    ("penalties", 70.0),
    ("reactions", 78.0),
    ("aggression", 65.0),
    ("interceptions", 70.0),
    ("positioning", 75.0),
    ("vision", 80.0),
    ("marking", 68.0),
    ("standing_tackle", 72.0),
    ("sliding_tackle", 65.0),
    ("gk_diving", 15.0),
    ("gk_handling", 16.0),
    ("gk_kicking", 23.0),
    ("gk_positioning", 18.0),
    ("gk_reflexes", 17.0),
];

/// 以 1-10 展示、存储时 ×10 的属性
pub const SCALED_ATTRIBUTES: [&str; 3] = ["acceleration", "sprint_speed", "agility"];

/// 3 个枚举属性及其默认值
pub const CATEGORICAL_DEFAULTS: [(&str, &str); 3] = [
    ("preferred_foot", "droit"),
    ("attacking_work_rate", "moyen"),
    ("defensive_work_rate", "moyen"),
];

pub const PREFERRED_FOOT_OPTIONS: [&str; 2] = ["gauche", "droit"];
pub const WORK_RATE_OPTIONS: [&str; 3] = ["faible", "moyen", "élevé"];

/// 推荐功能要求的最少有效数值属性数
pub const MIN_RECOMMENDATION_ATTRIBUTES: usize = 5;

/// 批量结果行提取推荐数据时使用的固定属性白名单
pub const BATCH_RECOMMENDATION_ATTRIBUTES: [&str; 20] = [
    "potential",
    "acceleration",
    "sprint_speed",
    "agility",
    "dribbling",
    "crossing",
    "finishing",
    "short_passing",
    "ball_control",
    "shot_power",
    "long_shots",
    "reactions",
    "positioning",
    "vision",
    "stamina",
    "strength",
    "balance",
    "jumping",
    "aggression",
    "interceptions",
];

/// 表单分组
pub struct AttributeCategory {
    pub name: &'static str,
    pub attributes: &'static [&'static str],
}

pub const CATEGORIES: [AttributeCategory; 5] = [
    AttributeCategory {
        name: "physique",
        attributes: &[
            "potential",
            "acceleration",
            "sprint_speed",
            "agility",
            "balance",
            "jumping",
            "stamina",
            "strength",
            "dribbling",
        ],
    },
    AttributeCategory {
        name: "technique",
        attributes: &[
            "crossing",
            "finishing",
            "heading_accuracy",
            "short_passing",
            "volleys",
            "curve",
            "free_kick_accuracy",
            "long_passing",
            "ball_control",
            "long_shots",
            "shot_power",
            "penalties",
        ],
    },
    AttributeCategory {
        name: "mental",
        attributes: &[
            "reactions",
            "aggression",
            "interceptions",
            "positioning",
            "vision",
            "marking",
            "standing_tackle",
            "sliding_tackle",
        ],
    },
    AttributeCategory {
        name: "gardien",
        attributes: &[
            "gk_diving",
            "gk_handling",
            "gk_kicking",
            "gk_positioning",
            "gk_reflexes",
        ],
    },
    AttributeCategory {
        name: "préférences",
        attributes: &["preferred_foot", "attacking_work_rate", "defensive_work_rate"],
    },
];

pub fn is_scaled(attribute: &str) -> bool {
    SCALED_ATTRIBUTES.contains(&attribute)
}

pub fn is_categorical(attribute: &str) -> bool {
    CATEGORICAL_DEFAULTS.iter().any(|(name, _)| *name == attribute)
}

/// 枚举属性的可选值
pub fn categorical_options(attribute: &str) -> &'static [&'static str] {
    if attribute == "preferred_foot" {
        &PREFERRED_FOOT_OPTIONS
    } else {
        &WORK_RATE_OPTIONS
    }
}

/// 滑杆上展示的数值 (缩放属性取十分位)
pub fn display_value(attribute: &str, value: f64) -> f64 {
    if is_scaled(attribute) {
        (value / 10.0).round()
    } else {
        value
    }
}

/// 属性的法语标签
pub fn label(attribute: &str) -> Option<&'static str> {
    let text = match attribute {
        "potential" => "Potentiel",
        "acceleration" => "Accélération",
        "sprint_speed" => "Vitesse de sprint",
        "agility" => "Agilité",
        "balance" => "Équilibre",
        "jumping" => "Saut",
        "stamina" => "Endurance",
        "strength" => "Force",
        "dribbling" => "Dribble",
        "crossing" => "Centres",
        "finishing" => "Finition",
        "heading_accuracy" => "Précision de la tête",
        "short_passing" => "Passe courte",
        "volleys" => "Volées",
        "curve" => "Effet",
        "free_kick_accuracy" => "Précision coups francs",
        "long_passing" => "Passe longue",
        "ball_control" => "Contrôle de balle",
        "long_shots" => "Tirs lointains",
        "shot_power" => "Puissance de tir",
        "penalties" => "Pénaltys",
        "reactions" => "Réactions",
        "aggression" => "Agressivité",
        "interceptions" => "Interceptions",
        "positioning" => "Placement",
        "vision" => "Vision",
        "marking" => "Marquage",
        "standing_tackle" => "Tacle debout",
        "sliding_tackle" => "Tacle glissé",
        "gk_diving" => "Plongeon",
        "gk_handling" => "Prise de balle",
        "gk_kicking" => "Dégagement",
        "gk_positioning" => "Placement gardien",
        "gk_reflexes" => "Réflexes",
        "preferred_foot" => "Pied préféré",
        "attacking_work_rate" => "Tâche offensive",
        "defensive_work_rate" => "Tâche défensive",
        _ => return None,
    };
    Some(text)
}

/// 标签，未知属性退化为大写下划线转空格
pub fn display_label(attribute: &str) -> String {
    match label(attribute) {
        Some(text) => text.to_string(),
        None => attribute.replace('_', " ").to_uppercase(),
    }
}

// =========================================================
// 双映射设计 (默认值 + 覆盖值)
// =========================================================

/// 单个属性的默认值
pub fn default_value(attribute: &str) -> Option<AttributeValue> {
    NUMERIC_DEFAULTS
        .iter()
        .find(|(name, _)| *name == attribute)
        .map(|(_, value)| AttributeValue::Number(*value))
        .or_else(|| {
            CATEGORICAL_DEFAULTS
                .iter()
                .find(|(name, _)| *name == attribute)
                .map(|(_, value)| AttributeValue::from(*value))
        })
}

/// 完整的默认球员属性映射
pub fn default_player() -> BTreeMap<String, AttributeValue> {
    let mut player = BTreeMap::new();
    for (name, value) in NUMERIC_DEFAULTS {
        player.insert(name.to_string(), AttributeValue::Number(value));
    }
    for (name, value) in CATEGORICAL_DEFAULTS {
        player.insert(name.to_string(), AttributeValue::from(value));
    }
    player
}

/// 覆盖映射叠加到默认映射之上 (用于推荐请求，预测请求只发覆盖映射)
pub fn merge_over_defaults(
    overrides: &BTreeMap<String, AttributeValue>,
) -> BTreeMap<String, AttributeValue> {
    let mut merged = default_player();
    for (name, value) in overrides {
        merged.insert(name.clone(), value.clone());
    }
    merged
}

// =========================================================
// 推荐功能的数据准备与门槛
// =========================================================

/// 把任意来源的属性映射收敛为推荐服务需要的 34 个数值
///
/// 缺失、无法解析或非有限的值退化为 50.0 (与预测服务的约定一致)。
pub fn normalize_for_recommendations(
    data: &BTreeMap<String, AttributeValue>,
) -> BTreeMap<String, f64> {
    NUMERIC_DEFAULTS
        .iter()
        .map(|(name, _)| {
            let value = data
                .get(*name)
                .and_then(AttributeValue::as_number)
                .filter(|v| v.is_finite())
                .unwrap_or(50.0);
            (name.to_string(), value)
        })
        .collect()
}

/// 有效 (有限) 数值属性的个数
pub fn numeric_attribute_count(data: &BTreeMap<String, f64>) -> usize {
    data.values().filter(|v| v.is_finite()).count()
}

/// 数据是否足以请求训练推荐
pub fn has_enough_for_recommendations(data: &BTreeMap<String, f64>) -> bool {
    numeric_attribute_count(data) >= MIN_RECOMMENDATION_ATTRIBUTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_is_complete() {
        assert_eq!(NUMERIC_DEFAULTS.len(), 34);
        assert_eq!(default_player().len(), 37);
        // 每个属性恰好属于一个分组
        let grouped: Vec<&str> = CATEGORIES
            .iter()
            .flat_map(|c| c.attributes.iter().copied())
            .collect();
        assert_eq!(grouped.len(), 37);
        for (name, _) in NUMERIC_DEFAULTS {
            assert!(grouped.contains(&name), "{name} absent des catégories");
            assert!(label(name).is_some(), "{name} sans label");
        }
    }

    #[test]
    fn merge_keeps_defaults_and_applies_overrides() {
        let mut overrides = BTreeMap::new();
        overrides.insert("finishing".to_string(), AttributeValue::Number(90.0));
        overrides.insert("preferred_foot".to_string(), AttributeValue::from("gauche"));

        let merged = merge_over_defaults(&overrides);
        assert_eq!(merged["finishing"].as_number(), Some(90.0));
        assert_eq!(merged["preferred_foot"], AttributeValue::from("gauche"));
        // 未触碰的字段保持默认
        assert_eq!(merged["stamina"].as_number(), Some(85.0));
        assert_eq!(merged.len(), 37);
    }

    #[test]
    fn normalize_falls_back_to_fifty() {
        let mut data = BTreeMap::new();
        data.insert("finishing".to_string(), AttributeValue::Number(88.0));
        data.insert("vision".to_string(), AttributeValue::from("72"));
        data.insert("stamina".to_string(), AttributeValue::from("NaN"));
        data.insert("marking".to_string(), AttributeValue::from("n/a"));

        let normalized = normalize_for_recommendations(&data);
        assert_eq!(normalized.len(), 34);
        assert_eq!(normalized["finishing"], 88.0);
        assert_eq!(normalized["vision"], 72.0);
        // 非有限与不可解析的值退化为 50
        assert_eq!(normalized["stamina"], 50.0);
        assert_eq!(normalized["marking"], 50.0);
        // 完全缺失的属性也是 50
        assert_eq!(normalized["gk_diving"], 50.0);
    }

    #[test]
    fn recommendation_gate_requires_five_values() {
        let mut data = BTreeMap::new();
        for name in ["potential", "finishing", "dribbling", "vision"] {
            data.insert(name.to_string(), 70.0);
        }
        assert!(!has_enough_for_recommendations(&data));

        data.insert("stamina".to_string(), 80.0);
        assert!(has_enough_for_recommendations(&data));
    }

    #[test]
    fn recommendation_gate_ignores_nan() {
        let mut data = BTreeMap::new();
        for name in ["potential", "finishing", "dribbling", "vision", "stamina"] {
            data.insert(name.to_string(), 70.0);
        }
        data.insert("marking".to_string(), f64::NAN);
        assert_eq!(numeric_attribute_count(&data), 5);
        assert!(has_enough_for_recommendations(&data));

        data.insert("stamina".to_string(), f64::NAN);
        assert!(!has_enough_for_recommendations(&data));
    }

    #[test]
    fn scaled_display_values() {
        assert_eq!(display_value("acceleration", 75.0), 8.0);
        assert_eq!(display_value("sprint_speed", 78.0), 8.0);
        assert_eq!(display_value("agility", 72.0), 7.0);
        assert_eq!(display_value("finishing", 78.0), 78.0);
    }

    #[test]
    fn label_fallback_for_unknown_attribute() {
        assert_eq!(display_label("xg_per_90"), "XG PER 90");
        assert_eq!(display_label("finishing"), "Finition");
    }

    #[test]
    fn attribute_value_serializes_untagged() {
        let mut overrides = BTreeMap::new();
        overrides.insert("finishing".to_string(), AttributeValue::Number(90.0));
        overrides.insert("preferred_foot".to_string(), AttributeValue::from("droit"));
        let json = serde_json::to_value(&overrides).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"finishing": 90.0, "preferred_foot": "droit"})
        );
    }
}
