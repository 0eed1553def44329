// ==========================================
// 喷雾药液混配计算系统 - 产品清单 CSV 导入器
// ==========================================
// 职责: CSV 产品清单 → Vec<Product>
// 列定义: product_name, dose_per_ha, unit, formulation
// 说明: 字段错误携带数据行号 (含表头行),便于用户定位
// ==========================================

use crate::domain::product::Product;
use crate::domain::types::{Formulation, Unit};
use crate::importer::ImporterError;
use std::path::Path;
use tracing::{info, instrument};

// ==========================================
// ProductCsvImporter - 产品清单导入器
// ==========================================
pub struct ProductCsvImporter {
    // 无状态导入器,不需要注入依赖
}

impl ProductCsvImporter {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 从 CSV 文件导入产品清单
    ///
    /// 行顺序即用户录入顺序,后续排序以此为稳定基准。
    ///
    /// # 返回
    /// - Ok(Vec<Product>): 解析后的产品清单 (可为空)
    /// - Err(ImporterError): 文件/解析/字段任一环节失败
    #[instrument(skip(self))]
    pub fn import_from_csv(&self, path: &Path) -> Result<Vec<Product>, ImporterError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut products = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            // 数据行号: 表头占第 1 行
            let row = idx + 2;

            let name = Self::get_string_field(&record, 0).ok_or_else(|| {
                ImporterError::InvalidField {
                    row,
                    field: "product_name",
                    reason: "不能为空".to_string(),
                }
            })?;

            let dose_per_hectare =
                Self::get_f64_field(&record, 1).ok_or_else(|| ImporterError::InvalidField {
                    row,
                    field: "dose_per_ha",
                    reason: "必须为数值".to_string(),
                })?;

            let unit = Self::parse_field::<Unit>(&record, 2, "unit", row)?;
            let formulation =
                Self::parse_field::<Formulation>(&record, 3, "formulation", row)?;

            products.push(Product {
                name,
                dose_per_hectare,
                unit,
                formulation,
            });
        }

        info!(products = products.len(), "产品清单导入完成");
        Ok(products)
    }

    // ==========================================
    // 字段解析辅助函数
    // ==========================================

    fn get_string_field(record: &csv::StringRecord, index: usize) -> Option<String> {
        record
            .get(index)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
    }

    fn get_f64_field(record: &csv::StringRecord, index: usize) -> Option<f64> {
        record.get(index)?.trim().parse::<f64>().ok()
    }

    fn parse_field<T: std::str::FromStr<Err = String>>(
        record: &csv::StringRecord,
        index: usize,
        field: &'static str,
        row: usize,
    ) -> Result<T, ImporterError> {
        let raw = Self::get_string_field(record, index).ok_or_else(|| {
            ImporterError::InvalidField {
                row,
                field,
                reason: "不能为空".to_string(),
            }
        })?;
        raw.parse::<T>()
            .map_err(|reason| ImporterError::InvalidField { row, field, reason })
    }
}

impl Default for ProductCsvImporter {
    fn default() -> Self {
        Self::new()
    }
}
