//! # Costeo Calculation Engine
//!
//! 成本計算與尺碼分配引擎

pub mod batch;
pub mod costing;
pub mod distribution;
pub mod draft;

// Re-export 主要類型
pub use batch::{BatchCostingCalculator, BatchCostingResult, ProductCostInput, ProductCostResult};
pub use costing::{CostingEngine, LaborCostLine, MaterialCostLine, ProductCostBreakdown};
pub use distribution::{
    DistributionEvaluation, DistributionStatus, QuantityBySize, SizeAllocator,
};
pub use draft::{DraftState, DraftSubmission, ProductDraft};

/// 計算警告
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CosteoWarning {
    /// 相關對象（產品參考編號、尺碼…）
    pub subject: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl CosteoWarning {
    pub fn new(subject: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            subject,
            message,
            severity,
        }
    }

    pub fn info(subject: String, message: String) -> Self {
        Self::new(subject, message, WarningSeverity::Info)
    }

    pub fn warning(subject: String, message: String) -> Self {
        Self::new(subject, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Info,
    Warning,
}
