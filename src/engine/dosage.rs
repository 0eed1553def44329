// ==========================================
// 喷雾药液混配计算系统 - 配药量引擎
// ==========================================
// 职责: 计算单个产品在单个批次中的用量
// 输入: 产品 + 批次体积 + 施药量
// 输出: 本批次用量 (以产品自身单位计,不换算)
// ==========================================

use crate::domain::product::Product;
use crate::engine::validator::{self, ValidationResult};

// ==========================================
// DosageEngine - 配药量引擎
// ==========================================
pub struct DosageEngine {
    // 无状态引擎,不需要注入依赖
}

impl DosageEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 单批覆盖面积 (公顷)
    ///
    /// hectares = batch_volume / rate
    ///
    /// # 参数
    /// - `batch_volume_l`: 批次体积 (升, >= 0)
    /// - `rate_l_per_ha`: 施药量 (升/公顷, > 0)
    pub fn hectares_covered(
        &self,
        batch_volume_l: f64,
        rate_l_per_ha: f64,
    ) -> ValidationResult<f64> {
        validator::validate_rate(rate_l_per_ha)?;
        validator::validate_batch_volume(batch_volume_l)?;
        Ok(batch_volume_l / rate_l_per_ha)
    }

    /// 计算产品在指定批次中的用量
    ///
    /// quantity = dose_per_hectare * (batch_volume / rate)
    ///
    /// 边界: batch_volume == 0 时恒返回 0,不报错;
    /// 调用方可无条件调用,在展示前过滤零体积批次。
    ///
    /// # 参数
    /// - `product`: 产品记录
    /// - `batch_volume_l`: 批次体积 (整罐体积或尾批体积)
    /// - `rate_l_per_ha`: 施药量 (升/公顷, > 0)
    ///
    /// # 返回
    /// - Ok(quantity): 本批次用量, >= 0
    /// - Err(ValidationError): rate <= 0 或批次体积为负/非有限
    pub fn quantity_for_batch(
        &self,
        product: &Product,
        batch_volume_l: f64,
        rate_l_per_ha: f64,
    ) -> ValidationResult<f64> {
        let hectares = self.hectares_covered(batch_volume_l, rate_l_per_ha)?;
        if batch_volume_l == 0.0 {
            return Ok(0.0);
        }
        Ok(product.dose_per_hectare * hectares)
    }
}

impl Default for DosageEngine {
    fn default() -> Self {
        Self::new()
    }
}
