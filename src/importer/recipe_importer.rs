// ==========================================
// 喷雾药液混配计算系统 - 配方导入器
// ==========================================
// 职责: 配方 JSON 文件的导入与导出
// 说明: 配方文件即 {area, rate, tank_capacity, products} 配置快照,
//       导入后立即走与计算入口相同的校验路径
// ==========================================

use crate::config::PriorityTable;
use crate::domain::recipe::SprayRecipe;
use crate::importer::ImporterError;
use crate::engine::validator;
use chrono::Utc;
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

// ==========================================
// RecipeImporter - 配方导入器
// ==========================================
pub struct RecipeImporter {
    priority_table: PriorityTable,
}

impl RecipeImporter {
    /// 创建配方导入器
    ///
    /// # 参数
    /// - `priority_table`: 混配优先级表 (与计算端保持同一份配置)
    pub fn new(priority_table: PriorityTable) -> Self {
        Self { priority_table }
    }

    /// 从 JSON 文件导入配方
    ///
    /// 流程:
    /// 1) 读文件 + 反序列化
    /// 2) 作业参数校验
    /// 3) 产品清单校验 (剂量/剂型登记)
    ///
    /// # 返回
    /// - Ok(SprayRecipe): 已通过全部校验的配方
    /// - Err(ImporterError): 读取/解析/校验任一环节失败
    #[instrument(skip(self))]
    pub fn import_from_json(&self, path: &Path) -> Result<SprayRecipe, ImporterError> {
        let raw = fs::read_to_string(path)?;
        let recipe: SprayRecipe = serde_json::from_str(&raw)?;

        validator::validate_operation_params(
            recipe.area_ha,
            recipe.rate_l_per_ha,
            recipe.tank_capacity_l,
        )?;
        validator::validate_products(&recipe.products, &self.priority_table)?;

        info!(
            products = recipe.products.len(),
            area_ha = recipe.area_ha,
            "配方导入完成"
        );
        Ok(recipe)
    }

    /// 导出配方到 JSON 文件
    ///
    /// 导出前走同一校验路径,保存时间写入 saved_at。
    #[instrument(skip(self, recipe))]
    pub fn export_to_json(
        &self,
        recipe: &SprayRecipe,
        path: &Path,
    ) -> Result<(), ImporterError> {
        validator::validate_operation_params(
            recipe.area_ha,
            recipe.rate_l_per_ha,
            recipe.tank_capacity_l,
        )?;
        validator::validate_products(&recipe.products, &self.priority_table)?;

        let mut snapshot = recipe.clone();
        snapshot.saved_at = Some(Utc::now().naive_utc());

        let json = serde_json::to_string_pretty(&snapshot)?;
        fs::write(path, json)?;

        info!(products = recipe.products.len(), "配方导出完成");
        Ok(())
    }
}
