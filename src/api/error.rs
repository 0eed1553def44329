// ==========================================
// 喷雾药液混配计算系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,转换引擎/导入层错误为用户可读消息
// 红线: 所有错误信息必须包含显式原因 (可解释性)
// ==========================================

use crate::engine::ValidationError;
use crate::importer::ImporterError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("数据校验失败: {0}")]
    ValidationError(String),

    // ==========================================
    // 导入错误
    // ==========================================
    #[error("文件导入失败: {0}")]
    ImportError(String),

    // ==========================================
    // 序列化错误
    // ==========================================
    #[error("序列化失败: {0}")]
    SerializationError(String),
}

/// API层结果别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// 错误转换
// ==========================================

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::ValidationError(err.to_string())
    }
}

impl From<ImporterError> for ApiError {
    fn from(err: ImporterError) -> Self {
        match err {
            // 校验错误保持校验语义,不折叠进导入错误
            ImporterError::Validation(inner) => ApiError::ValidationError(inner.to_string()),
            other => ApiError::ImportError(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Formulation;

    #[test]
    fn test_importer_validation_keeps_validation_semantics() {
        let err = ImporterError::Validation(ValidationError::UnknownFormulation {
            name: "X".to_string(),
            formulation: Formulation::Emulsion,
        });
        assert!(matches!(ApiError::from(err), ApiError::ValidationError(_)));
    }

    #[test]
    fn test_field_error_maps_to_import_error() {
        let err = ImporterError::InvalidField {
            row: 3,
            field: "unit",
            reason: "不能为空".to_string(),
        };
        assert!(matches!(ApiError::from(err), ApiError::ImportError(_)));
    }
}
