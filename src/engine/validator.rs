// ==========================================
// 喷雾药液混配计算系统 - 输入校验器
// ==========================================
// 职责: 作业参数与产品清单的前置校验
// 红线: 校验失败必须在任何计算之前返回,不得产出部分结果
// 红线: 非法输入报 ValidationError,不得抛数值域错误或静默产出 NaN/Infinity
// ==========================================

use crate::config::PriorityTable;
use crate::domain::product::Product;
use crate::domain::types::Formulation;
use thiserror::Error;

// ==========================================
// ValidationError - 校验错误
// ==========================================
/// 校验错误
/// 所有错误信息必须包含字段名与显式原因
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// 作业参数非法 (面积/施药量/罐容量)
    #[error("作业参数无效: {field}={value}, {reason}")]
    InvalidParameter {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// 产品参数非法 (剂量)
    #[error("产品参数无效: product={name}, {reason}")]
    InvalidProduct { name: String, reason: String },

    /// 剂型未登记混配优先级
    #[error("剂型未登记混配优先级: product={name}, formulation={formulation}")]
    UnknownFormulation {
        name: String,
        formulation: Formulation,
    },
}

/// 校验结果别名
pub type ValidationResult<T> = Result<T, ValidationError>;

// ==========================================
// 参数校验
// ==========================================

/// 校验必须为正数的参数 (施药量/罐容量)
fn ensure_positive(field: &'static str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidParameter {
            field,
            value,
            reason: "必须为有限数值",
        });
    }
    if value <= 0.0 {
        return Err(ValidationError::InvalidParameter {
            field,
            value,
            reason: "必须为正数",
        });
    }
    Ok(())
}

/// 校验作业参数
///
/// 规则:
/// - area_ha >= 0 (零面积合法,产出全零方案)
/// - rate_l_per_ha > 0 (除数)
/// - tank_capacity_l > 0 (除数)
/// - 三者均须为有限数值
pub fn validate_operation_params(
    area_ha: f64,
    rate_l_per_ha: f64,
    tank_capacity_l: f64,
) -> ValidationResult<()> {
    if !area_ha.is_finite() {
        return Err(ValidationError::InvalidParameter {
            field: "area_ha",
            value: area_ha,
            reason: "必须为有限数值",
        });
    }
    if area_ha < 0.0 {
        return Err(ValidationError::InvalidParameter {
            field: "area_ha",
            value: area_ha,
            reason: "不可为负数",
        });
    }
    ensure_positive("rate_l_per_ha", rate_l_per_ha)?;
    ensure_positive("tank_capacity_l", tank_capacity_l)?;
    Ok(())
}

/// 校验施药量 (单独用于配药量计算入口)
pub fn validate_rate(rate_l_per_ha: f64) -> ValidationResult<()> {
    ensure_positive("rate_l_per_ha", rate_l_per_ha)
}

/// 校验批次体积 (整罐体积或尾批体积)
pub fn validate_batch_volume(batch_volume_l: f64) -> ValidationResult<()> {
    if !batch_volume_l.is_finite() {
        return Err(ValidationError::InvalidParameter {
            field: "batch_volume_l",
            value: batch_volume_l,
            reason: "必须为有限数值",
        });
    }
    if batch_volume_l < 0.0 {
        return Err(ValidationError::InvalidParameter {
            field: "batch_volume_l",
            value: batch_volume_l,
            reason: "不可为负数",
        });
    }
    Ok(())
}

// ==========================================
// 产品清单校验
// ==========================================

/// 校验产品清单
///
/// 规则 (逐条,命中即返回):
/// 1) dose_per_hectare 必须为正的有限数值
/// 2) 剂型必须在优先级表中登记
///
/// 空清单合法: 体积与批次仍然计算,混配序列为空。
pub fn validate_products(
    products: &[Product],
    priority_table: &PriorityTable,
) -> ValidationResult<()> {
    for product in products {
        if !product.dose_per_hectare.is_finite() || product.dose_per_hectare <= 0.0 {
            return Err(ValidationError::InvalidProduct {
                name: product.name.clone(),
                reason: format!(
                    "dose_per_hectare={} 必须为正的有限数值",
                    product.dose_per_hectare
                ),
            });
        }
        if priority_table.priority_of(product.formulation).is_none() {
            return Err(ValidationError::UnknownFormulation {
                name: product.name.clone(),
                formulation: product.formulation,
            });
        }
    }
    Ok(())
}
