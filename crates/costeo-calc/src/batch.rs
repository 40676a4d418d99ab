//! 批次成本計算（產品列表）

use costeo_core::{LaborProcess, MaterialUsage, ValidationMode};
use rayon::prelude::*;
use rust_decimal::Decimal;

use crate::costing::{CostingEngine, ProductCostBreakdown};

/// 單一產品的成本計算輸入
#[derive(Debug, Clone)]
pub struct ProductCostInput {
    /// 產品參考編號
    pub product_id: String,
    pub materials: Vec<MaterialUsage>,
    pub labor: Vec<LaborProcess>,
}

impl ProductCostInput {
    pub fn new(product_id: String, materials: Vec<MaterialUsage>, labor: Vec<LaborProcess>) -> Self {
        Self {
            product_id,
            materials,
            labor,
        }
    }
}

/// 單一產品的成本計算結果
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCostResult {
    pub product_id: String,
    pub breakdown: ProductCostBreakdown,
}

/// 批次計算結果
#[derive(Debug, Clone)]
pub struct BatchCostingResult {
    /// 與輸入順序相同
    pub results: Vec<ProductCostResult>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl BatchCostingResult {
    /// 創建空的計算結果
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 查詢產品單位成本
    pub fn total_for(&self, product_id: &str) -> Option<Decimal> {
        self.results
            .iter()
            .find(|r| r.product_id == product_id)
            .map(|r| r.breakdown.total)
    }
}

/// 批次成本計算器
pub struct BatchCostingCalculator;

impl BatchCostingCalculator {
    /// 平行計算多個產品的成本（不驗證輸入）
    pub fn compute_many(products: &[ProductCostInput]) -> BatchCostingResult {
        tracing::info!("開始批次成本計算：產品 {} 筆", products.len());
        let start_time = std::time::Instant::now();

        let results: Vec<ProductCostResult> = products
            .par_iter()
            .map(|p| ProductCostResult {
                product_id: p.product_id.clone(),
                breakdown: CostingEngine::compute_cost_breakdown(&p.materials, &p.labor),
            })
            .collect();

        tracing::info!("批次成本計算完成，耗時 {:?}", start_time.elapsed());

        BatchCostingResult {
            results,
            calculation_time_ms: Some(start_time.elapsed().as_millis()),
        }
    }

    /// 依驗證模式平行計算；任一產品輸入無效即失敗
    pub fn compute_many_checked(
        products: &[ProductCostInput],
        mode: ValidationMode,
    ) -> costeo_core::Result<BatchCostingResult> {
        let start_time = std::time::Instant::now();

        let results = products
            .par_iter()
            .map(|p| {
                CostingEngine::compute_checked(&p.materials, &p.labor, mode).map(|breakdown| {
                    ProductCostResult {
                        product_id: p.product_id.clone(),
                        breakdown,
                    }
                })
            })
            .collect::<costeo_core::Result<Vec<_>>>()?;

        Ok(BatchCostingResult {
            results,
            calculation_time_ms: Some(start_time.elapsed().as_millis()),
        })
    }
}
