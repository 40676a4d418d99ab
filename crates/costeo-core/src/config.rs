//! 成本計算配置

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::size::SizeCatalog;
use crate::{CosteoError, Result};

/// 成本與尺碼分配配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CosteoConfig {
    /// 可供選取的尺碼
    pub size_catalog: SizeCatalog,

    /// 輸入驗證模式
    pub validation_mode: ValidationMode,

    /// 尺碼分配不一致時的提交策略
    pub submission_policy: SubmissionPolicy,

    /// 金額顯示的小數位數（哥倫比亞披索：0）
    pub currency_scale: u32,

    /// 物料用量的小數位數
    pub quantity_scale: u32,
}

impl CosteoConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            size_catalog: SizeCatalog::standard(),
            validation_mode: ValidationMode::Lenient,
            submission_policy: SubmissionPolicy::Advisory,
            currency_scale: 0,
            quantity_scale: 2,
        }
    }

    /// 由 JSON 載入配置（缺少的欄位使用預設值）
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置尺碼目錄
    pub fn with_size_catalog(mut self, catalog: SizeCatalog) -> Self {
        self.size_catalog = catalog;
        self
    }

    /// 建構器模式：設置驗證模式
    pub fn with_validation_mode(mut self, mode: ValidationMode) -> Self {
        self.validation_mode = mode;
        self
    }

    /// 建構器模式：設置提交策略
    pub fn with_submission_policy(mut self, policy: SubmissionPolicy) -> Self {
        self.submission_policy = policy;
        self
    }

    /// 建構器模式：設置金額小數位數
    pub fn with_currency_scale(mut self, scale: u32) -> Self {
        self.currency_scale = scale;
        self
    }

    /// 建構器模式：設置用量小數位數
    pub fn with_quantity_scale(mut self, scale: u32) -> Self {
        self.quantity_scale = scale;
        self
    }

    /// 檢查配置是否有效
    pub fn validate(&self) -> Result<()> {
        if self.size_catalog.is_empty() {
            return Err(CosteoError::ConfigError("尺碼目錄不可為空".to_string()));
        }
        // Decimal 最多 28 位小數
        if self.currency_scale > 28 || self.quantity_scale > 28 {
            return Err(CosteoError::ConfigError(format!(
                "小數位數超出範圍：金額 {}，用量 {}",
                self.currency_scale, self.quantity_scale
            )));
        }
        Ok(())
    }

    /// 金額四捨五入（僅供顯示，計算時不使用）
    pub fn round_currency(&self, amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(self.currency_scale, RoundingStrategy::MidpointAwayFromZero)
    }

    /// 用量四捨五入
    pub fn round_quantity(&self, quantity: Decimal) -> Decimal {
        quantity.round_dp_with_strategy(self.quantity_scale, RoundingStrategy::MidpointAwayFromZero)
    }

    /// 是否在提交前強制要求尺碼分配一致
    pub fn requires_balanced_distribution(&self) -> bool {
        self.submission_policy == SubmissionPolicy::RequireBalanced
    }
}

impl Default for CosteoConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// 輸入驗證模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// 不驗證：負數等異常輸入照常計算
    #[default]
    Lenient,

    /// 嚴格：負的單價、用量或工資回傳 `InvalidInput`
    Strict,
}

/// 提交策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPolicy {
    /// 分配不一致只產生警告，仍允許提交
    #[default]
    Advisory,

    /// 分配不一致時拒絕提交
    RequireBalanced,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::SizeLabel;

    #[test]
    fn test_create_config() {
        let config = CosteoConfig::new();

        assert_eq!(config.validation_mode, ValidationMode::Lenient);
        assert_eq!(config.submission_policy, SubmissionPolicy::Advisory);
        assert_eq!(config.currency_scale, 0);
        assert_eq!(config.quantity_scale, 2);
        assert_eq!(config.size_catalog.len(), 10);
        assert!(!config.requires_balanced_distribution());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let catalog = SizeCatalog::from_range(6, 16, 2).unwrap();
        let config = CosteoConfig::new()
            .with_size_catalog(catalog)
            .with_validation_mode(ValidationMode::Strict)
            .with_submission_policy(SubmissionPolicy::RequireBalanced)
            .with_currency_scale(2);

        assert_eq!(config.size_catalog.len(), 6);
        assert_eq!(config.validation_mode, ValidationMode::Strict);
        assert!(config.requires_balanced_distribution());
        assert_eq!(config.currency_scale, 2);
    }

    #[test]
    fn test_round_currency_cop() {
        let config = CosteoConfig::new();

        assert_eq!(config.round_currency(Decimal::new(525005, 1)), Decimal::from(52501));
        assert_eq!(config.round_currency(Decimal::new(525004, 1)), Decimal::from(52500));
    }

    #[test]
    fn test_round_quantity() {
        let config = CosteoConfig::new();
        assert_eq!(config.round_quantity(Decimal::new(12345, 4)), Decimal::new(123, 2));
    }

    #[test]
    fn test_config_from_json_partial() {
        let json = r#"{
            "size_catalog": ["30", "28", "32"],
            "submission_policy": "require_balanced"
        }"#;

        let config = CosteoConfig::from_json(json).unwrap();

        assert_eq!(config.size_catalog.labels()[0], SizeLabel::from("28"));
        assert_eq!(config.size_catalog.len(), 3);
        assert_eq!(config.submission_policy, SubmissionPolicy::RequireBalanced);
        // 未指定的欄位使用預設值
        assert_eq!(config.validation_mode, ValidationMode::Lenient);
        assert_eq!(config.quantity_scale, 2);
    }

    #[test]
    fn test_config_from_json_rejects_invalid() {
        let empty_catalog = r#"{"size_catalog": []}"#;
        assert!(matches!(
            CosteoConfig::from_json(empty_catalog),
            Err(CosteoError::ConfigError(_))
        ));

        let bad_scale = r#"{"currency_scale": 40}"#;
        assert!(CosteoConfig::from_json(bad_scale).is_err());

        assert!(matches!(
            CosteoConfig::from_json("{"),
            Err(CosteoError::Json(_))
        ));
    }
}
