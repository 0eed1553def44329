// ==========================================
// 喷雾药液混配计算系统 - 导入层
// ==========================================
// 职责: 外部文件 → 领域结构 (配方 JSON / 产品清单 CSV)
// 红线: 导入数据与直接调用走同一校验路径,不得特殊处理
// ==========================================

pub mod product_csv;
pub mod recipe_importer;

use crate::engine::ValidationError;
use thiserror::Error;

// 重导出核心导入器
pub use product_csv::ProductCsvImporter;
pub use recipe_importer::RecipeImporter;

// ==========================================
// ImporterError - 导入错误
// ==========================================
#[derive(Error, Debug)]
pub enum ImporterError {
    #[error("文件读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("配方文件解析失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV 解析失败: {0}")]
    Csv(#[from] csv::Error),

    /// 字段级错误 (带数据行号,便于用户定位)
    #[error("字段无效: 行 {row}, 列 {field}: {reason}")]
    InvalidField {
        row: usize,
        field: &'static str,
        reason: String,
    },

    /// 导入数据未通过领域校验 (与计算入口同一套规则)
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
