//! 导航结果状态模块
//!
//! 预测结果经由内存中的导航状态在视图间传递：不持久化、
//! 不进 URL，页面刷新后即丢失（显式的非目标）。
//! 目标视图在状态缺失时渲染解释性的空状态。

use footperf_shared::attributes::AttributeValue;
use footperf_shared::protocol::BatchPrediction;
use leptos::prelude::*;
use std::collections::BTreeMap;

/// 单次预测的结果载荷
#[derive(Clone, Debug, PartialEq)]
pub struct SingleOutcome {
    pub prediction: f64,
    /// 完整属性映射（默认值 ⊕ 覆盖值，或批量行的全部数据）
    pub player_data: BTreeMap<String, AttributeValue>,
    /// 从批量结果页进入时，返回按钮指向批量列表
    pub from_batch: bool,
}

/// 结果状态上下文
#[derive(Clone, Copy)]
pub struct ResultState {
    pub single: RwSignal<Option<SingleOutcome>>,
    pub batch: RwSignal<Option<Vec<BatchPrediction>>>,
}

impl ResultState {
    pub fn new() -> Self {
        Self {
            single: RwSignal::new(None),
            batch: RwSignal::new(None),
        }
    }
}

impl Default for ResultState {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取结果状态
pub fn use_results() -> ResultState {
    use_context::<ResultState>().expect("ResultState should be provided")
}
