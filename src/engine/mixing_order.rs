// ==========================================
// 喷雾药液混配计算系统 - 混配顺序引擎
// ==========================================
// 职责: 按剂型优先级对产品清单排序
// 输入: 用户录入顺序的产品清单 + 优先级表
// 输出: 混配顺序排列的产品清单 (输入的稳定置换)
// 红线: 未登记剂型必须报错,混配顺序是安全相关输出
// ==========================================

use crate::config::PriorityTable;
use crate::domain::product::Product;
use crate::engine::validator::{ValidationError, ValidationResult};

// ==========================================
// MixOrderSorter - 混配顺序引擎
// ==========================================
pub struct MixOrderSorter {
    // 无状态引擎,不需要注入依赖
}

impl MixOrderSorter {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 排序产品清单
    ///
    /// 排序键:
    /// 1) 剂型优先级升序 (1 = 最先加入)
    /// 2) 同优先级保持录入顺序 (稳定排序)
    ///
    /// # 参数
    /// - `products`: 用户录入顺序的产品清单
    /// - `priority_table`: 混配优先级表
    ///
    /// # 返回
    /// - Ok: 混配顺序排列的产品清单
    /// - Err(ValidationError::UnknownFormulation): 存在未登记剂型
    pub fn sort(
        &self,
        products: &[Product],
        priority_table: &PriorityTable,
    ) -> ValidationResult<Vec<Product>> {
        let decorated = self.sort_with_priority(products, priority_table)?;
        Ok(decorated.into_iter().map(|(_, product)| product).collect())
    }

    /// 排序并保留每个产品的优先级 (供报表层使用)
    pub fn sort_with_priority(
        &self,
        products: &[Product],
        priority_table: &PriorityTable,
    ) -> ValidationResult<Vec<(u8, Product)>> {
        // 先整体查表,任何缺失条目都在排序前返回
        let mut decorated: Vec<(u8, Product)> = Vec::with_capacity(products.len());
        for product in products {
            let priority = priority_table
                .priority_of(product.formulation)
                .ok_or_else(|| ValidationError::UnknownFormulation {
                    name: product.name.clone(),
                    formulation: product.formulation,
                })?;
            decorated.push((priority, product.clone()));
        }

        // sort_by_key 是稳定排序,同优先级保持录入顺序
        decorated.sort_by_key(|(priority, _)| *priority);
        Ok(decorated)
    }
}

impl Default for MixOrderSorter {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{Formulation, Unit};

    /// 创建测试用的产品记录
    fn create_test_product(name: &str, formulation: Formulation) -> Product {
        Product::new(name, 100.0, Unit::Millilitre, formulation)
    }

    #[test]
    fn test_sort_by_formulation_priority() {
        // 录入顺序: 助剂(1) / 悬浮剂(4) / 水分散粒剂(2)
        // 混配顺序: 助剂 → 水分散粒剂 → 悬浮剂
        let products = vec![
            create_test_product("A", Formulation::Adjuvant),
            create_test_product("S", Formulation::Suspension),
            create_test_product("G", Formulation::Granule),
        ];
        let ordered = MixOrderSorter::new()
            .sort(&products, &PriorityTable::standard())
            .unwrap();
        let names: Vec<&str> = ordered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "G", "S"]);
    }

    #[test]
    fn test_sort_is_stable_within_priority() {
        // WP 与 WG/DF 共享优先级 2,同级保持录入顺序
        let products = vec![
            create_test_product("wg-1", Formulation::Granule),
            create_test_product("wp-1", Formulation::WettablePowder),
            create_test_product("wg-2", Formulation::Granule),
        ];
        let ordered = MixOrderSorter::new()
            .sort(&products, &PriorityTable::standard())
            .unwrap();
        let names: Vec<&str> = ordered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["wg-1", "wp-1", "wg-2"]);
    }

    #[test]
    fn test_sort_is_permutation() {
        let products = vec![
            create_test_product("e", Formulation::Emulsion),
            create_test_product("a", Formulation::Adjuvant),
            create_test_product("sl", Formulation::SolubleLiquid),
            create_test_product("sc", Formulation::Suspension),
        ];
        let ordered = MixOrderSorter::new()
            .sort(&products, &PriorityTable::standard())
            .unwrap();
        assert_eq!(ordered.len(), products.len());
        for product in &products {
            assert!(ordered.contains(product));
        }
    }

    #[test]
    fn test_empty_list_sorts_to_empty() {
        let ordered = MixOrderSorter::new()
            .sort(&[], &PriorityTable::standard())
            .unwrap();
        assert!(ordered.is_empty());
    }

    #[test]
    fn test_unknown_formulation_fails_before_sorting() {
        let table = PriorityTable::from_entries([(Formulation::Adjuvant, 1)]);
        let products = vec![
            create_test_product("a", Formulation::Adjuvant),
            create_test_product("ec", Formulation::Emulsion),
        ];
        let err = MixOrderSorter::new().sort(&products, &table).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownFormulation { .. }));
    }
}
