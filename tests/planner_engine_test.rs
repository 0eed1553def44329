// ==========================================
// MixPlanner 引擎集成测试
// ==========================================
// 测试范围:
// 1. 批次拆分 (整罐/尾批/恰好整除)
// 2. 混配排序 (稳定性/置换性)
// 3. 前置校验 (失败即停)
// 4. 幂等性
// ==========================================

use spray_mix_planner::domain::types::{Formulation, Unit};
use spray_mix_planner::domain::Product;
use spray_mix_planner::engine::{MixPlanner, ValidationError};
use spray_mix_planner::PriorityTable;

const EPS: f64 = 1e-9;

// ==========================================
// 辅助函数
// ==========================================

/// 创建测试用的产品清单 (按用户录入顺序)
fn create_test_products() -> Vec<Product> {
    vec![
        Product::new("Fulltec Max", 50.0, Unit::Millilitre, Formulation::Adjuvant),
        Product::new("Bim Max", 1.2, Unit::Litre, Formulation::Suspension),
        Product::new("Nutrol Max", 150.0, Unit::Millilitre, Formulation::Granule),
        Product::new("Shenzi", 80.0, Unit::Millilitre, Formulation::Emulsion),
        Product::new(
            "Aproach Power",
            600.0,
            Unit::Millilitre,
            Formulation::SolubleLiquid,
        ),
    ]
}

// ==========================================
// 批次拆分
// ==========================================

#[test]
fn test_plan_scenario_with_remainder() {
    // 60 ha * 12 L/ha = 720 L, 罐容量 200 L → 3 整罐 + 120 L 尾批
    let plan = MixPlanner::standard()
        .plan(60.0, 12.0, 200.0, &create_test_products())
        .unwrap();

    assert!((plan.total_volume_l - 720.0).abs() < EPS);
    assert_eq!(plan.full_batches, 3);
    assert!((plan.remainder_volume_l - 120.0).abs() < EPS);
    assert_eq!(plan.batch_count(), 4);
}

#[test]
fn test_plan_exact_division_has_no_remainder() {
    // 总量 100 L 恰好等于罐容量 → 1 整罐, 尾批为 0
    let plan = MixPlanner::standard()
        .plan(10.0, 10.0, 100.0, &[])
        .unwrap();

    assert_eq!(plan.full_batches, 1);
    assert_eq!(plan.remainder_volume_l, 0.0);
    assert!(!plan.has_remainder());
}

#[test]
fn test_plan_mass_balance_holds() {
    // full * capacity + remainder == area * rate (浮点容差内)
    let planner = MixPlanner::standard();
    let cases = [
        (60.0, 12.0, 200.0),
        (47.5, 13.3, 180.0),
        (3.0, 0.7, 15.0),
        (1000.0, 20.0, 600.0),
    ];
    for (area, rate, capacity) in cases {
        let plan = planner.plan(area, rate, capacity, &[]).unwrap();
        let rebuilt = plan.full_batches as f64 * capacity + plan.remainder_volume_l;
        assert!(
            (rebuilt - area * rate).abs() < 1e-6,
            "恒等式被破坏: area={}, rate={}, capacity={}",
            area,
            rate,
            capacity
        );
        assert!(plan.remainder_volume_l >= 0.0);
        assert!(plan.remainder_volume_l < capacity + 1e-6);
    }
}

// ==========================================
// 混配排序
// ==========================================

#[test]
fn test_plan_orders_products_by_formulation() {
    // 录入: 助剂/悬浮剂/粒剂/乳油/可溶液剂 → 混配顺序按优先级升序
    let plan = MixPlanner::standard()
        .plan(60.0, 12.0, 200.0, &create_test_products())
        .unwrap();

    let names: Vec<&str> = plan
        .ordered_products
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Fulltec Max",
            "Nutrol Max",
            "Bim Max",
            "Shenzi",
            "Aproach Power"
        ]
    );
}

#[test]
fn test_plan_ordering_is_stable_permutation() {
    // 同优先级 (WP 与 WG/DF 同为 2) 保持录入顺序
    let products = vec![
        Product::new("wg-a", 10.0, Unit::Gram, Formulation::Granule),
        Product::new("wp-b", 20.0, Unit::Gram, Formulation::WettablePowder),
        Product::new("wg-c", 30.0, Unit::Gram, Formulation::Granule),
        Product::new("adj", 5.0, Unit::Millilitre, Formulation::Adjuvant),
    ];
    let plan = MixPlanner::standard()
        .plan(1.0, 10.0, 100.0, &products)
        .unwrap();

    let names: Vec<&str> = plan
        .ordered_products
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["adj", "wg-a", "wp-b", "wg-c"]);

    // 置换性: 数量一致且每个输入产品都在输出中
    assert_eq!(plan.ordered_products.len(), products.len());
    for product in &products {
        assert!(plan.ordered_products.contains(product));
    }
}

#[test]
fn test_plan_empty_product_list() {
    // 空清单合法: 体积与批次仍然计算
    let plan = MixPlanner::standard().plan(60.0, 12.0, 200.0, &[]).unwrap();
    assert!(plan.ordered_products.is_empty());
    assert!((plan.total_volume_l - 720.0).abs() < EPS);
    assert_eq!(plan.full_batches, 3);
}

// ==========================================
// 前置校验
// ==========================================

#[test]
fn test_plan_rejects_invalid_operation_params() {
    let planner = MixPlanner::standard();
    let products = create_test_products();

    assert!(planner.plan(-1.0, 12.0, 200.0, &products).is_err());
    assert!(planner.plan(60.0, 0.0, 200.0, &products).is_err());
    assert!(planner.plan(60.0, 12.0, 0.0, &products).is_err());
    assert!(planner.plan(60.0, f64::NAN, 200.0, &products).is_err());
}

#[test]
fn test_plan_rejects_unmapped_formulation() {
    // 自定义表缺少条目 → 校验错误,不得静默兜底
    let table = PriorityTable::from_entries([
        (Formulation::Adjuvant, 1),
        (Formulation::Granule, 2),
    ]);
    let planner = MixPlanner::new(table);
    let err = planner
        .plan(60.0, 12.0, 200.0, &create_test_products())
        .unwrap_err();
    assert!(matches!(err, ValidationError::UnknownFormulation { .. }));
}

#[test]
fn test_plan_zero_area_yields_zero_plan() {
    let plan = MixPlanner::standard()
        .plan(0.0, 12.0, 200.0, &create_test_products())
        .unwrap();
    assert_eq!(plan.total_volume_l, 0.0);
    assert_eq!(plan.full_batches, 0);
    assert_eq!(plan.remainder_volume_l, 0.0);
    // 排序仍然执行
    assert_eq!(plan.ordered_products.len(), 5);
}

// ==========================================
// 幂等性
// ==========================================

#[test]
fn test_plan_is_idempotent() {
    // 相同输入必得相同输出
    let planner = MixPlanner::standard();
    let products = create_test_products();
    let first = planner.plan(60.0, 12.0, 200.0, &products).unwrap();
    let second = planner.plan(60.0, 12.0, 200.0, &products).unwrap();
    assert_eq!(first, second);
}
