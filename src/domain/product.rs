// ==========================================
// 喷雾药液混配计算系统 - 产品领域模型
// ==========================================
// 职责: 定义待混配的药剂产品
// 红线: 产品不携带优先级字段,优先级只能由剂型查表得出
// ==========================================

use crate::domain::types::{Formulation, Unit};
use serde::{Deserialize, Serialize};

// ==========================================
// Product - 药剂产品
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,           // 产品名称 (用户自定义标签,不要求唯一)
    pub dose_per_hectare: f64,  // 每公顷剂量 (以 unit 计)
    pub unit: Unit,             // 计量单位 (仅展示)
    pub formulation: Formulation, // 剂型 (决定混配顺序)
}

impl Product {
    /// 构造产品记录
    pub fn new(
        name: impl Into<String>,
        dose_per_hectare: f64,
        unit: Unit,
        formulation: Formulation,
    ) -> Self {
        Self {
            name: name.into(),
            dose_per_hectare,
            unit,
            formulation,
        }
    }
}
