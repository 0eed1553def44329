// ==========================================
// 喷雾药液混配计算系统 - 核心库
// ==========================================
// 技术栈: Rust + serde + tracing
// 系统定位: 决策支持系统 (计算核心,展示层外置)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 不可变配置对象
pub mod config;

// 引擎层 - 混配业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{BatchKind, Formulation, Unit};

// 领域实体
pub use domain::{BatchDosage, BatchTable, MixPlan, Product, SprayRecipe};

// 配置
pub use config::PriorityTable;

// 引擎
pub use engine::{
    BatchSplit, BatchSplitter, DosageEngine, MixOrderSorter, MixPlanner, ValidationError,
};

// API
pub use api::{ApiError, ApiResult, MixPlanReport, PlanApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "喷雾药液混配计算系统";

// ==========================================
// 预编译检查
// ==========================================
