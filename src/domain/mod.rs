// ==========================================
// 喷雾药液混配计算系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含计算逻辑,不含文件访问逻辑
// ==========================================

pub mod plan;
pub mod product;
pub mod recipe;
pub mod types;

// 重导出核心类型
pub use plan::{BatchDosage, BatchTable, MixPlan};
pub use product::Product;
pub use recipe::SprayRecipe;
pub use types::{BatchKind, Formulation, Unit};
