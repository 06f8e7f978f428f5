//! 表现等级模块
//!
//! 由预测分数推导四档表现等级。单个结果页、批量结果表、
//! 统计卡片和 CSV 导出全部复用这里的同一套阈值。

use serde::{Deserialize, Serialize};

/// 表现等级 (由固定阈值划分)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    /// score >= 80
    Excellent,
    /// 70 <= score < 80
    Good,
    /// 60 <= score < 70
    Average,
    /// score < 60
    Poor,
}

impl PerformanceTier {
    pub const ALL: [PerformanceTier; 4] = [
        PerformanceTier::Excellent,
        PerformanceTier::Good,
        PerformanceTier::Average,
        PerformanceTier::Poor,
    ];

    /// **核心分档逻辑**：所有视图必须经由此函数取得等级
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 70.0 {
            Self::Good
        } else if score >= 60.0 {
            Self::Average
        } else {
            Self::Poor
        }
    }

    /// 等级的法语展示文本
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Bon",
            Self::Average => "Moyen",
            Self::Poor => "À améliorer",
        }
    }

    /// CSS class，同时也是批量结果页筛选器的取值
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
            Self::Poor => "poor",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Excellent => "#38a169",
            Self::Good => "#319795",
            Self::Average => "#dd6b20",
            Self::Poor => "#e53e3e",
        }
    }

    /// 结果页展示的说明文字
    pub fn description(&self) -> &'static str {
        match self {
            Self::Excellent => "Un joueur exceptionnel avec un haut niveau de performance.",
            Self::Good => "Un joueur solide avec un fort potentiel d'amélioration.",
            Self::Average => "Un joueur moyen qui peut progresser avec un bon entraînement.",
            Self::Poor => {
                "Un joueur nécessitant une amélioration importante dans plusieurs domaines."
            }
        }
    }

    /// 统计卡片上的分数区间文本
    pub fn range_label(&self) -> &'static str {
        match self {
            Self::Excellent => "Note 80+",
            Self::Good => "Note 70-79",
            Self::Average => "Note 60-69",
            Self::Poor => "Moins de 60",
        }
    }

    /// 从筛选器取值解析等级，"all" 或未知值返回 None
    pub fn from_filter_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.css_class() == key)
    }
}

/// 分数的展示格式：整数不带小数点，其余按原样输出
pub fn format_score(score: f64) -> String {
    if score.is_finite() && score.fract() == 0.0 {
        format!("{}", score as i64)
    } else {
        format!("{}", score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_thresholds() {
        assert_eq!(PerformanceTier::from_score(100.0), PerformanceTier::Excellent);
        assert_eq!(PerformanceTier::from_score(80.0), PerformanceTier::Excellent);
        assert_eq!(PerformanceTier::from_score(79.99), PerformanceTier::Good);
        assert_eq!(PerformanceTier::from_score(70.0), PerformanceTier::Good);
        assert_eq!(PerformanceTier::from_score(69.5), PerformanceTier::Average);
        assert_eq!(PerformanceTier::from_score(60.0), PerformanceTier::Average);
        assert_eq!(PerformanceTier::from_score(59.99), PerformanceTier::Poor);
        assert_eq!(PerformanceTier::from_score(0.0), PerformanceTier::Poor);
    }

    #[test]
    fn french_labels() {
        assert_eq!(PerformanceTier::from_score(78.0).label(), "Bon");
        assert_eq!(PerformanceTier::from_score(85.0).label(), "Excellent");
        assert_eq!(PerformanceTier::from_score(65.0).label(), "Moyen");
        assert_eq!(PerformanceTier::from_score(12.0).label(), "À améliorer");
    }

    #[test]
    fn filter_keys_match_css_classes() {
        for tier in PerformanceTier::ALL {
            assert_eq!(PerformanceTier::from_filter_key(tier.css_class()), Some(tier));
        }
        assert_eq!(PerformanceTier::from_filter_key("all"), None);
        assert_eq!(PerformanceTier::from_filter_key(""), None);
    }

    #[test]
    fn score_formatting() {
        assert_eq!(format_score(78.0), "78");
        assert_eq!(format_score(78.5), "78.5");
        assert_eq!(format_score(0.0), "0");
    }
}
