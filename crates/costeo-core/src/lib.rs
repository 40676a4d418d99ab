//! # Costeo Core
//!
//! 核心資料模型與類型定義（物料、工序、尺碼、價格目錄、提交資料）

pub mod catalog;
pub mod config;
pub mod labor;
pub mod material;
pub mod payload;
pub mod size;

// Re-export 主要類型
pub use catalog::{PriceCatalog, TenantId};
pub use config::{CosteoConfig, SubmissionPolicy, ValidationMode};
pub use labor::{LaborOperation, LaborProcess, LaborSelection};
pub use material::{Material, MaterialSelection, MaterialUsage, UnitOfMeasure};
pub use payload::{InsumoRequerido, ManoDeObraRequerida, PantalonPayload};
pub use size::{SizeCatalog, SizeLabel};

/// 成本計算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum CosteoError {
    #[error("無效的輸入: {0}")]
    InvalidInput(String),

    #[error("找不到物料: {0}")]
    MaterialNotFound(String),

    #[error("找不到工序: {0}")]
    LaborNotFound(String),

    #[error("尺碼不在目錄中: {0}")]
    UnknownSize(String),

    #[error("尺碼未被選取: {0}")]
    SizeNotSelected(String),

    #[error("尚未選取任何尺碼")]
    NoSizesSelected,

    #[error("尚未設定總生產數量")]
    MissingTotalQuantity,

    #[error("尺碼分配不一致：已分配 {distributed}，預期 {expected}")]
    InvalidDistribution { distributed: u64, expected: u64 },

    #[error("配置錯誤: {0}")]
    ConfigError(String),

    #[error("JSON 解析錯誤: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CosteoError>;
