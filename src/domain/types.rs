// ==========================================
// 喷雾药液混配计算系统 - 领域类型定义
// ==========================================
// 职责: 定义计量单位、剂型、批次类型等基础枚举
// 红线: 混配优先级由剂型唯一决定,不可独立设置
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 计量单位 (Dose Unit)
// ==========================================
// 仅作展示标签,系统内不做单位换算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "L")]
    Litre, // 升
    #[serde(rename = "mL")]
    Millilitre, // 毫升
    #[serde(rename = "g")]
    Gram, // 克
    #[serde(rename = "kg")]
    Kilogram, // 千克
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Litre => write!(f, "L"),
            Unit::Millilitre => write!(f, "mL"),
            Unit::Gram => write!(f, "g"),
            Unit::Kilogram => write!(f, "kg"),
        }
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" => Ok(Unit::Litre),
            "mL" => Ok(Unit::Millilitre),
            "g" => Ok(Unit::Gram),
            "kg" => Ok(Unit::Kilogram),
            other => Err(format!("未知计量单位: {}", other)),
        }
    }
}

// ==========================================
// 剂型 (Formulation)
// ==========================================
// 剂型决定产品加入药液的先后顺序
// 序列化格式: SCREAMING_SNAKE_CASE (与配方文件一致)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Formulation {
    Adjuvant,       // 助剂/水质调理剂
    WettablePowder, // 可湿性粉剂 (WP)
    Granule,        // 水分散粒剂 (WG/DF)
    SolubleGranule, // 可溶粒剂 (SG)
    Suspension,     // 悬浮剂 (SC/FS)
    Emulsion,       // 乳油 (EC)
    SolubleLiquid,  // 可溶液剂 (SL)
}

impl Formulation {
    /// 全部剂型 (固定枚举集,用于构建优先级表)
    pub const ALL: [Formulation; 7] = [
        Formulation::Adjuvant,
        Formulation::WettablePowder,
        Formulation::Granule,
        Formulation::SolubleGranule,
        Formulation::Suspension,
        Formulation::Emulsion,
        Formulation::SolubleLiquid,
    ];
}

impl fmt::Display for Formulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formulation::Adjuvant => write!(f, "ADJUVANT"),
            Formulation::WettablePowder => write!(f, "WETTABLE_POWDER"),
            Formulation::Granule => write!(f, "GRANULE"),
            Formulation::SolubleGranule => write!(f, "SOLUBLE_GRANULE"),
            Formulation::Suspension => write!(f, "SUSPENSION"),
            Formulation::Emulsion => write!(f, "EMULSION"),
            Formulation::SolubleLiquid => write!(f, "SOLUBLE_LIQUID"),
        }
    }
}

impl FromStr for Formulation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADJUVANT" => Ok(Formulation::Adjuvant),
            "WETTABLE_POWDER" => Ok(Formulation::WettablePowder),
            "GRANULE" => Ok(Formulation::Granule),
            "SOLUBLE_GRANULE" => Ok(Formulation::SolubleGranule),
            "SUSPENSION" => Ok(Formulation::Suspension),
            "EMULSION" => Ok(Formulation::Emulsion),
            "SOLUBLE_LIQUID" => Ok(Formulation::SolubleLiquid),
            other => Err(format!("未知剂型: {}", other)),
        }
    }
}

// ==========================================
// 批次类型 (Batch Kind)
// ==========================================
// FULL: 整罐批次 (体积 = 罐容量)
// REMAINDER: 尾批 (体积 < 罐容量,至多一个)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchKind {
    Full,      // 整罐批次
    Remainder, // 尾批
}

impl fmt::Display for BatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchKind::Full => write!(f, "FULL"),
            BatchKind::Remainder => write!(f, "REMAINDER"),
        }
    }
}
