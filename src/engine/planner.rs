// ==========================================
// 喷雾药液混配计算系统 - 引擎编排器
// ==========================================
// 用途: 协调校验、批次拆分、混配排序,产出完整混配方案
// 红线: 纯计算,无副作用,相同输入必得相同输出
// ==========================================

use crate::config::PriorityTable;
use crate::domain::plan::MixPlan;
use crate::domain::product::Product;
use crate::domain::recipe::SprayRecipe;
use crate::engine::batch_split::BatchSplitter;
use crate::engine::mixing_order::MixOrderSorter;
use crate::engine::validator::{self, ValidationResult};
use tracing::{debug, instrument};

// ==========================================
// MixPlanner - 混配方案编排器
// ==========================================
pub struct MixPlanner {
    priority_table: PriorityTable,
    splitter: BatchSplitter,
    sorter: MixOrderSorter,
}

impl MixPlanner {
    /// 创建编排器实例
    ///
    /// # 参数
    /// - `priority_table`: 混配优先级表 (不可变配置,显式注入)
    pub fn new(priority_table: PriorityTable) -> Self {
        Self {
            priority_table,
            splitter: BatchSplitter::new(),
            sorter: MixOrderSorter::new(),
        }
    }

    /// 使用标准优先级表创建编排器
    pub fn standard() -> Self {
        Self::new(PriorityTable::standard())
    }

    /// 当前注入的优先级表
    pub fn priority_table(&self) -> &PriorityTable {
        &self.priority_table
    }

    /// 计算混配方案
    ///
    /// 流程 (失败即停,任何计算前先完成全部校验):
    /// 1) 校验作业参数与产品清单
    /// 2) 批次拆分 (总量/整罐批次/尾批)
    /// 3) 产品按剂型优先级稳定排序
    ///
    /// # 参数
    /// - `area_ha`: 作业面积 (公顷, >= 0)
    /// - `rate_l_per_ha`: 施药量 (升/公顷, > 0)
    /// - `tank_capacity_l`: 罐容量 (升, > 0)
    /// - `products`: 用户录入顺序的产品清单 (可为空)
    ///
    /// # 返回
    /// - Ok(MixPlan): 完整混配方案
    /// - Err(ValidationError): 输入非法,未产出任何部分结果
    #[instrument(skip(self, products), fields(count = products.len()))]
    pub fn plan(
        &self,
        area_ha: f64,
        rate_l_per_ha: f64,
        tank_capacity_l: f64,
        products: &[Product],
    ) -> ValidationResult<MixPlan> {
        // 1. 前置校验
        validator::validate_operation_params(area_ha, rate_l_per_ha, tank_capacity_l)?;
        validator::validate_products(products, &self.priority_table)?;

        // 2. 批次拆分
        let split = self.splitter.split(area_ha, rate_l_per_ha, tank_capacity_l)?;

        // 3. 混配排序
        let ordered_products = self.sorter.sort(products, &self.priority_table)?;

        debug!(
            total_volume_l = split.total_volume_l,
            full_batches = split.full_batches,
            remainder_volume_l = split.remainder_volume_l,
            "混配方案计算完成"
        );

        Ok(MixPlan {
            total_volume_l: split.total_volume_l,
            full_batches: split.full_batches,
            remainder_volume_l: split.remainder_volume_l,
            ordered_products,
        })
    }

    /// 按配方计算混配方案
    pub fn plan_for_recipe(&self, recipe: &SprayRecipe) -> ValidationResult<MixPlan> {
        self.plan(
            recipe.area_ha,
            recipe.rate_l_per_ha,
            recipe.tank_capacity_l,
            &recipe.products,
        )
    }
}
