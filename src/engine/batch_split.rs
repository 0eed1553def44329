// ==========================================
// 喷雾药液混配计算系统 - 批次拆分引擎
// ==========================================
// 职责: 总药液量 → 整罐批次数 + 尾批体积
// 输入: 作业面积、施药量、罐容量
// 输出: BatchSplit (总量/整罐批次/尾批)
// ==========================================

use crate::engine::validator::{self, ValidationResult};
use tracing::debug;

// ==========================================
// BatchSplit - 批次拆分结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchSplit {
    pub total_volume_l: f64,     // 总药液量 (升)
    pub full_batches: u32,       // 整罐批次数
    pub remainder_volume_l: f64, // 尾批药液量 (升)
}

// ==========================================
// BatchSplitter - 批次拆分引擎
// ==========================================
pub struct BatchSplitter {
    // 无状态引擎,不需要注入依赖
}

impl BatchSplitter {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 拆分批次
    ///
    /// 算法:
    /// 1) total = area * rate
    /// 2) full_batches = floor(total / capacity)
    /// 3) remainder = total - full_batches * capacity
    ///
    /// 尾批用减法而非取模,保证恒等式
    /// full_batches * capacity + remainder == total 在浮点容差内成立。
    ///
    /// # 参数
    /// - `area_ha`: 作业面积 (公顷, >= 0)
    /// - `rate_l_per_ha`: 施药量 (升/公顷, > 0)
    /// - `tank_capacity_l`: 罐容量 (升, > 0)
    ///
    /// # 返回
    /// - Ok(BatchSplit): 0 <= remainder < capacity (浮点容差内)
    /// - Err(ValidationError): 参数非法
    pub fn split(
        &self,
        area_ha: f64,
        rate_l_per_ha: f64,
        tank_capacity_l: f64,
    ) -> ValidationResult<BatchSplit> {
        validator::validate_operation_params(area_ha, rate_l_per_ha, tank_capacity_l)?;

        let total_volume_l = area_ha * rate_l_per_ha;
        let full = (total_volume_l / tank_capacity_l).floor();
        // 浮点舍入可能产生轻微负值,钳到 0
        let remainder_volume_l = (total_volume_l - full * tank_capacity_l).max(0.0);

        debug!(
            total_volume_l,
            full_batches = full,
            remainder_volume_l,
            "批次拆分完成"
        );

        Ok(BatchSplit {
            total_volume_l,
            full_batches: full as u32,
            remainder_volume_l,
        })
    }
}

impl Default for BatchSplitter {
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

    const EPS: f64 = 1e-9;

    #[test]
    fn test_split_with_remainder() {
        // 60 ha * 12 L/ha = 720 L → 3 整罐 + 120 L 尾批
        let split = BatchSplitter::new().split(60.0, 12.0, 200.0).unwrap();
        assert!((split.total_volume_l - 720.0).abs() < EPS);
        assert_eq!(split.full_batches, 3);
        assert!((split.remainder_volume_l - 120.0).abs() < EPS);
    }

    #[test]
    fn test_split_exact_division() {
        // 总量恰好整除罐容量 → 无尾批
        let split = BatchSplitter::new().split(10.0, 10.0, 100.0).unwrap();
        assert_eq!(split.full_batches, 1);
        assert_eq!(split.remainder_volume_l, 0.0);
    }

    #[test]
    fn test_split_less_than_one_tank() {
        let split = BatchSplitter::new().split(5.0, 10.0, 200.0).unwrap();
        assert_eq!(split.full_batches, 0);
        assert!((split.remainder_volume_l - 50.0).abs() < EPS);
    }

    #[test]
    fn test_split_zero_area() {
        let split = BatchSplitter::new().split(0.0, 12.0, 200.0).unwrap();
        assert_eq!(split.total_volume_l, 0.0);
        assert_eq!(split.full_batches, 0);
        assert_eq!(split.remainder_volume_l, 0.0);
    }

    #[test]
    fn test_mass_balance_identity() {
        // full * capacity + remainder == total (浮点容差内)
        let splitter = BatchSplitter::new();
        let cases = [
            (60.0, 12.0, 200.0),
            (33.3, 11.7, 180.0),
            (1.0, 0.3, 7.0),
            (250.0, 15.5, 600.0),
        ];
        for (area, rate, capacity) in cases {
            let split = splitter.split(area, rate, capacity).unwrap();
            let rebuilt =
                split.full_batches as f64 * capacity + split.remainder_volume_l;
            assert!(
                (rebuilt - split.total_volume_l).abs() < 1e-6,
                "恒等式被破坏: area={}, rate={}, capacity={}",
                area,
                rate,
                capacity
            );
            assert!(split.remainder_volume_l >= 0.0);
            assert!(split.remainder_volume_l < capacity + 1e-6);
        }
    }

    #[test]
    fn test_split_rejects_invalid_params() {
        let splitter = BatchSplitter::new();
        assert!(splitter.split(60.0, 0.0, 200.0).is_err());
        assert!(splitter.split(60.0, 12.0, 0.0).is_err());
        assert!(splitter.split(-60.0, 12.0, 200.0).is_err());
    }
}
