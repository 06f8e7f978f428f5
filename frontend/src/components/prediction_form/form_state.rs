//! 表单状态管理模块
//!
//! 双映射设计：完整的默认属性映射 + 用户显式改动的覆盖映射。
//! 预测请求只发送覆盖映射（稀疏）；推荐与结果页在边界处
//! 将覆盖映射叠加到默认映射上，两者永不就地合并。

use footperf_shared::attributes::{self, AttributeValue};
use footperf_shared::protocol::SinglePredictionRequest;
use leptos::prelude::*;
use std::collections::BTreeMap;

/// 单人预测表单状态
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，适合在组件间传递。
#[derive(Clone, Copy)]
pub struct PlayerFormState {
    /// 用户显式改动过的字段（稀疏覆盖映射）
    overrides: RwSignal<BTreeMap<String, AttributeValue>>,
}

impl PlayerFormState {
    pub fn new() -> Self {
        Self {
            overrides: RwSignal::new(BTreeMap::new()),
        }
    }

    /// 记录一次显式改动
    pub fn set_attribute(&self, attribute: &str, value: AttributeValue) {
        let attribute = attribute.to_string();
        self.overrides.update(|map| {
            map.insert(attribute, value);
        });
    }

    /// 当前数值（覆盖值优先，否则默认值；响应式）
    pub fn current_number(&self, attribute: &str) -> f64 {
        self.overrides
            .with(|map| map.get(attribute).and_then(AttributeValue::as_number))
            .or_else(|| {
                attributes::default_value(attribute).and_then(|v| v.as_number())
            })
            .unwrap_or(50.0)
    }

    /// 当前枚举文本（覆盖值优先，否则默认值；响应式）
    pub fn current_text(&self, attribute: &str) -> String {
        self.overrides
            .with(|map| {
                map.get(attribute).map(|value| match value {
                    AttributeValue::Text(s) => s.clone(),
                    AttributeValue::Number(n) => n.to_string(),
                })
            })
            .or_else(|| attributes::default_value(attribute).map(|v| v.display()))
            .unwrap_or_default()
    }

    /// 改动过的字段数（响应式）
    pub fn changed_count(&self) -> usize {
        self.overrides.with(|map| map.len())
    }

    /// 预测请求体：只含改动过的字段
    pub fn to_request(&self) -> SinglePredictionRequest {
        SinglePredictionRequest(self.overrides.get_untracked())
    }

    /// 推荐与结果页用的完整映射（默认值 ⊕ 覆盖值）
    pub fn merged(&self) -> BTreeMap<String, AttributeValue> {
        self.overrides
            .with_untracked(attributes::merge_over_defaults)
    }
}

impl Default for PlayerFormState {
    fn default() -> Self {
        Self::new()
    }
}
