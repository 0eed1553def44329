// ==========================================
// 喷雾药液混配计算系统 - 混配方案 API
// ==========================================
// 职责: 业务门面,供 CLI / 展示层调用
// 输入: 配方 (直接传入或来自文件)
// 输出: MixPlanReport (概要 + 批次配药表)
// 红线: 零体积批次不生成配药表
// ==========================================

use crate::api::error::ApiResult;
use crate::config::PriorityTable;
use crate::domain::plan::{BatchDosage, BatchTable, MixPlan};
use crate::domain::product::Product;
use crate::domain::recipe::SprayRecipe;
use crate::domain::types::BatchKind;
use crate::engine::validator::ValidationError;
use crate::engine::{DosageEngine, MixPlanner};
use crate::importer::{ProductCsvImporter, RecipeImporter};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::instrument;

// ==========================================
// MixPlanReport - 混配方案报表
// ==========================================
// 展示层 (表格/PDF/分享链接) 消费的完整 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixPlanReport {
    pub recipe_name: Option<String>, // 配方名称
    pub area_ha: f64,                // 作业面积 (公顷)
    pub rate_l_per_ha: f64,          // 施药量 (升/公顷)
    pub tank_capacity_l: f64,        // 混药罐容量 (升)
    pub total_volume_l: f64,         // 总药液量 (升)
    pub full_batches: u32,           // 整罐批次数
    pub remainder_volume_l: f64,     // 尾批药液量 (升)
    pub batch_tables: Vec<BatchTable>, // 批次配药表 (零体积批次已过滤)
}

// ==========================================
// PlanApi - 混配方案 API
// ==========================================
pub struct PlanApi {
    planner: MixPlanner,
    dosage: DosageEngine,
    recipe_importer: RecipeImporter,
    csv_importer: ProductCsvImporter,
}

impl PlanApi {
    /// 使用标准优先级表创建 API 实例
    pub fn new() -> Self {
        Self::with_priority_table(PriorityTable::standard())
    }

    /// 使用自定义优先级表创建 API 实例
    ///
    /// 计算端与导入端共享同一份表,保证校验口径一致。
    pub fn with_priority_table(priority_table: PriorityTable) -> Self {
        Self {
            planner: MixPlanner::new(priority_table.clone()),
            dosage: DosageEngine::new(),
            recipe_importer: RecipeImporter::new(priority_table),
            csv_importer: ProductCsvImporter::new(),
        }
    }

    /// 计算混配方案报表
    ///
    /// 批次表生成规则:
    /// - full_batches > 0 → 一张整罐配药表 (各整罐批次用量相同)
    /// - remainder_volume > 0 → 一张尾批配药表
    /// - 零体积批次不生成表 (恰好整除时只有整罐表)
    #[instrument(skip(self, recipe), fields(products = recipe.products.len()))]
    pub fn compute_mix_plan(&self, recipe: &SprayRecipe) -> ApiResult<MixPlanReport> {
        let plan = self.planner.plan_for_recipe(recipe)?;

        let mut batch_tables = Vec::with_capacity(2);
        if plan.full_batches > 0 {
            batch_tables.push(self.build_batch_table(
                BatchKind::Full,
                recipe.tank_capacity_l,
                plan.full_batches,
                &plan,
                recipe.rate_l_per_ha,
            )?);
        }
        if plan.remainder_volume_l > 0.0 {
            batch_tables.push(self.build_batch_table(
                BatchKind::Remainder,
                plan.remainder_volume_l,
                1,
                &plan,
                recipe.rate_l_per_ha,
            )?);
        }

        Ok(MixPlanReport {
            recipe_name: recipe.recipe_name.clone(),
            area_ha: recipe.area_ha,
            rate_l_per_ha: recipe.rate_l_per_ha,
            tank_capacity_l: recipe.tank_capacity_l,
            total_volume_l: plan.total_volume_l,
            full_batches: plan.full_batches,
            remainder_volume_l: plan.remainder_volume_l,
            batch_tables,
        })
    }

    /// 从配方 JSON 文件计算混配方案报表
    pub fn plan_from_json_file(&self, path: &Path) -> ApiResult<MixPlanReport> {
        let recipe = self.recipe_importer.import_from_json(path)?;
        self.compute_mix_plan(&recipe)
    }

    /// 从 CSV 文件导入产品清单 (走与计算入口相同的校验)
    pub fn products_from_csv_file(&self, path: &Path) -> ApiResult<Vec<Product>> {
        let products = self.csv_importer.import_from_csv(path)?;
        crate::engine::validator::validate_products(&products, self.planner.priority_table())?;
        Ok(products)
    }

    /// 导出配方到 JSON 文件
    pub fn export_recipe(&self, recipe: &SprayRecipe, path: &Path) -> ApiResult<()> {
        self.recipe_importer.export_to_json(recipe, path)?;
        Ok(())
    }

    // ==========================================
    // 内部: 批次表构建
    // ==========================================

    fn build_batch_table(
        &self,
        kind: BatchKind,
        batch_volume_l: f64,
        batch_count: u32,
        plan: &MixPlan,
        rate_l_per_ha: f64,
    ) -> ApiResult<BatchTable> {
        let hectares_covered = self.dosage.hectares_covered(batch_volume_l, rate_l_per_ha)?;

        let mut rows = Vec::with_capacity(plan.ordered_products.len());
        for product in &plan.ordered_products {
            let priority = self
                .planner
                .priority_table()
                .priority_of(product.formulation)
                .ok_or_else(|| ValidationError::UnknownFormulation {
                    name: product.name.clone(),
                    formulation: product.formulation,
                })?;
            let quantity =
                self.dosage
                    .quantity_for_batch(product, batch_volume_l, rate_l_per_ha)?;

            rows.push(BatchDosage {
                product_name: product.name.clone(),
                formulation: product.formulation,
                priority,
                dose_per_hectare: product.dose_per_hectare,
                unit: product.unit,
                quantity,
            });
        }

        Ok(BatchTable {
            kind,
            batch_volume_l,
            hectares_covered,
            batch_count,
            rows,
        })
    }
}

impl Default for PlanApi {
    fn default() -> Self {
        Self::new()
    }
}
