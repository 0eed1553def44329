// ==========================================
// 喷雾药液混配计算系统 - 配置层
// ==========================================
// 职责: 不可变配置对象 (混配优先级表)
// 说明: 配置由调用方显式注入,核心不读环境、不读文件
// ==========================================

pub mod priority_table;

// 重导出核心配置对象
pub use priority_table::PriorityTable;
