// ==========================================
// 喷雾药液混配计算系统 - 混配方案领域模型
// ==========================================
// 职责: 定义一次计算产出的混配方案与批次报表结构
// 红线: 方案是瞬态快照,每次调用重新计算,不跨调用保留
// ==========================================

use crate::domain::product::Product;
use crate::domain::types::{BatchKind, Formulation, Unit};
use serde::{Deserialize, Serialize};

// ==========================================
// MixPlan - 混配方案
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixPlan {
    pub total_volume_l: f64,      // 总药液量 (升, = 面积 * 施药量)
    pub full_batches: u32,        // 整罐批次数
    pub remainder_volume_l: f64,  // 尾批药液量 (升, 0 <= 尾批 < 罐容量)
    pub ordered_products: Vec<Product>, // 按混配顺序排列的产品 (输入的稳定置换)
}

impl MixPlan {
    /// 判断是否存在尾批
    pub fn has_remainder(&self) -> bool {
        self.remainder_volume_l > 0.0
    }

    /// 批次总数 (整罐批次 + 可能的尾批)
    pub fn batch_count(&self) -> u32 {
        self.full_batches + u32::from(self.has_remainder())
    }
}

// ==========================================
// BatchDosage - 批次配药明细行
// ==========================================
// 一行对应一个产品在单个批次中的用量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchDosage {
    pub product_name: String,     // 产品名称
    pub formulation: Formulation, // 剂型
    pub priority: u8,             // 混配顺序 (1 = 最先加入)
    pub dose_per_hectare: f64,    // 每公顷剂量
    pub unit: Unit,               // 计量单位 (仅展示)
    pub quantity: f64,            // 本批次用量 (以 unit 计)
}

// ==========================================
// BatchTable - 批次配药表
// ==========================================
// 整罐批次共用一张表 (batch_count > 1),尾批单独一张
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchTable {
    pub kind: BatchKind,        // 批次类型
    pub batch_volume_l: f64,    // 单批药液量 (升)
    pub hectares_covered: f64,  // 单批覆盖面积 (公顷)
    pub batch_count: u32,       // 适用批次数
    pub rows: Vec<BatchDosage>, // 明细行 (按混配顺序)
}
