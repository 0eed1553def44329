// ==========================================
// 喷雾药液混配计算系统 - 配方领域模型
// ==========================================
// 职责: 定义外部持有的作业配置 (配方)
// 说明: 配方是调用方每次传入的完整输入,核心不跨调用保留状态
// ==========================================

use crate::domain::product::Product;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// SprayRecipe - 喷雾作业配方
// ==========================================
// 对应配方文件结构: {area, rate, tank_capacity, products}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprayRecipe {
    #[serde(default)]
    pub recipe_name: Option<String>, // 配方名称 (可选)
    pub area_ha: f64,                // 作业面积 (公顷)
    pub rate_l_per_ha: f64,          // 施药量 (升/公顷)
    pub tank_capacity_l: f64,        // 混药罐容量 (升)
    pub products: Vec<Product>,      // 产品清单 (保持用户录入顺序)
    #[serde(default)]
    pub saved_at: Option<NaiveDateTime>, // 保存时间 (导出时写入)
}

impl SprayRecipe {
    /// 构造未命名配方
    pub fn new(
        area_ha: f64,
        rate_l_per_ha: f64,
        tank_capacity_l: f64,
        products: Vec<Product>,
    ) -> Self {
        Self {
            recipe_name: None,
            area_ha,
            rate_l_per_ha,
            tank_capacity_l,
            products,
            saved_at: None,
        }
    }
}
