// ==========================================
// 喷雾药液混配计算系统 - 混配优先级表
// ==========================================
// 职责: 剂型 → 混配优先级的不可变映射
// 红线: 优先级表显式传入引擎,禁止模块级可变全局状态
// 红线: 未登记剂型必须报错,不得静默兜底 (混配顺序是安全相关输出)
// ==========================================

use crate::domain::types::Formulation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// PriorityTable - 混配优先级表
// ==========================================
// 数值越小越先加入 (1 = 最先),多个剂型可共享同一优先级
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityTable {
    entries: BTreeMap<Formulation, u8>,
}

impl PriorityTable {
    /// 标准优先级表
    ///
    /// 固定农艺顺序:
    /// 1) 助剂/水质调理剂
    /// 2) 固体剂型 (WP 与 WG/DF 同级)
    /// 3) 可溶粒剂
    /// 4) 悬浮剂
    /// 5) 乳油
    /// 6) 可溶液剂
    pub fn standard() -> Self {
        Self::from_entries([
            (Formulation::Adjuvant, 1),
            (Formulation::WettablePowder, 2),
            (Formulation::Granule, 2),
            (Formulation::SolubleGranule, 3),
            (Formulation::Suspension, 4),
            (Formulation::Emulsion, 5),
            (Formulation::SolubleLiquid, 6),
        ])
    }

    /// 从条目列表构造自定义优先级表
    ///
    /// 说明: 自定义表允许缺少条目 (例如从站点配置文件反序列化),
    /// 缺失剂型在计算入口按校验错误处理,不在构造时拒绝。
    pub fn from_entries(entries: impl IntoIterator<Item = (Formulation, u8)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// 查询剂型的混配优先级
    ///
    /// # 返回
    /// - Some(priority): 已登记剂型
    /// - None: 未登记剂型 (调用方必须报校验错误)
    pub fn priority_of(&self, formulation: Formulation) -> Option<u8> {
        self.entries.get(&formulation).copied()
    }

    /// 已登记条目数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否为空表
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::standard()
    }
}
