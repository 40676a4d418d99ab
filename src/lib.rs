//! # Costeo
//!
//! 服裝生產成本計算與尺碼分配

pub mod logging;

pub use costeo_calc;
pub use costeo_core;

/// 常用類型
pub mod prelude {
    pub use costeo_calc::{
        BatchCostingCalculator, CostingEngine, CosteoWarning, DistributionEvaluation,
        DistributionStatus, DraftState, DraftSubmission, ProductCostBreakdown, ProductCostInput,
        ProductDraft, QuantityBySize, SizeAllocator, WarningSeverity,
    };
    pub use costeo_core::{
        CosteoConfig, CosteoError, LaborOperation, LaborProcess, LaborSelection, Material,
        MaterialSelection, MaterialUsage, PantalonPayload, PriceCatalog, SizeCatalog, SizeLabel,
        SubmissionPolicy, TenantId, UnitOfMeasure, ValidationMode,
    };
    pub use rust_decimal::Decimal;
}
