//! 產品成本計算

use costeo_core::{CosteoError, LaborProcess, MaterialUsage, ValidationMode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 物料成本明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCostLine {
    pub material_id: String,
    pub unit_price: Decimal,
    pub quantity_used: Decimal,
    /// 單價 × 用量
    pub line_cost: Decimal,
}

impl MaterialCostLine {
    fn from_usage(usage: &MaterialUsage) -> Self {
        Self {
            material_id: usage.material_id.clone(),
            unit_price: usage.unit_price,
            quantity_used: usage.quantity_used,
            line_cost: usage.line_cost(),
        }
    }
}

/// 工序成本明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborCostLine {
    pub process_id: String,
    pub price: Decimal,
}

/// 產品單位成本明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCostBreakdown {
    /// 物料小計
    pub materials_subtotal: Decimal,

    /// 工序小計
    pub labor_subtotal: Decimal,

    /// 總成本（物料小計 + 工序小計）
    pub total: Decimal,

    /// 物料明細（保持輸入順序）
    pub material_lines: Vec<MaterialCostLine>,

    /// 工序明細（保持輸入順序）
    pub labor_lines: Vec<LaborCostLine>,
}

impl ProductCostBreakdown {
    /// 全部為零的成本明細
    pub fn zero() -> Self {
        Self {
            materials_subtotal: Decimal::ZERO,
            labor_subtotal: Decimal::ZERO,
            total: Decimal::ZERO,
            material_lines: Vec::new(),
            labor_lines: Vec::new(),
        }
    }

    /// 生產批次總成本（單位成本 × 件數）
    pub fn production_cost(&self, units: u32) -> Decimal {
        self.total * Decimal::from(units)
    }

    pub fn is_zero(&self) -> bool {
        self.total.is_zero()
    }
}

/// 成本計算引擎
///
/// 純函數：只讀取輸入，每次呼叫都從目前的選擇重新計算。
pub struct CostingEngine;

impl CostingEngine {
    /// 計算產品成本明細
    ///
    /// 不驗證輸入：負的單價或用量照常累加。
    pub fn compute_cost_breakdown(
        materials: &[MaterialUsage],
        labor: &[LaborProcess],
    ) -> ProductCostBreakdown {
        let material_lines: Vec<MaterialCostLine> =
            materials.iter().map(MaterialCostLine::from_usage).collect();

        let labor_lines: Vec<LaborCostLine> = labor
            .iter()
            .map(|l| LaborCostLine {
                process_id: l.process_id.clone(),
                price: l.price,
            })
            .collect();

        let materials_subtotal = material_lines
            .iter()
            .map(|l| l.line_cost)
            .sum::<Decimal>();

        let labor_subtotal = labor_lines.iter().map(|l| l.price).sum::<Decimal>();

        tracing::debug!(
            "成本計算：物料 {} 項，工序 {} 項，物料小計 {}，工序小計 {}",
            material_lines.len(),
            labor_lines.len(),
            materials_subtotal,
            labor_subtotal
        );

        ProductCostBreakdown {
            materials_subtotal,
            labor_subtotal,
            total: materials_subtotal + labor_subtotal,
            material_lines,
            labor_lines,
        }
    }

    /// 檢查輸入：單價、用量與工資皆不可為負
    pub fn validate_inputs(
        materials: &[MaterialUsage],
        labor: &[LaborProcess],
    ) -> costeo_core::Result<()> {
        for usage in materials {
            if usage.unit_price < Decimal::ZERO {
                return Err(CosteoError::InvalidInput(format!(
                    "物料 {} 單價為負: {}",
                    usage.material_id, usage.unit_price
                )));
            }
            if usage.quantity_used < Decimal::ZERO {
                return Err(CosteoError::InvalidInput(format!(
                    "物料 {} 用量為負: {}",
                    usage.material_id, usage.quantity_used
                )));
            }
        }

        for process in labor {
            if !process.is_well_formed() {
                return Err(CosteoError::InvalidInput(format!(
                    "工序 {} 工資為負: {}",
                    process.process_id, process.price
                )));
            }
        }

        Ok(())
    }

    /// 依驗證模式計算成本明細
    pub fn compute_checked(
        materials: &[MaterialUsage],
        labor: &[LaborProcess],
        mode: ValidationMode,
    ) -> costeo_core::Result<ProductCostBreakdown> {
        if mode == ValidationMode::Strict {
            Self::validate_inputs(materials, labor)?;
        }
        Ok(Self::compute_cost_breakdown(materials, labor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn denim_and_thread() -> Vec<MaterialUsage> {
        vec![
            MaterialUsage::new(
                "DENIM-01".to_string(),
                Decimal::from(15000),
                Decimal::new(15, 1),
            ),
            MaterialUsage::new("HILO-01".to_string(), Decimal::from(2500), Decimal::from(2)),
        ]
    }

    #[test]
    fn test_compute_cost_breakdown() {
        let labor = vec![LaborProcess::new("COSTURA".to_string(), Decimal::from(25000))];

        let breakdown = CostingEngine::compute_cost_breakdown(&denim_and_thread(), &labor);

        assert_eq!(breakdown.materials_subtotal, Decimal::from(27500));
        assert_eq!(breakdown.labor_subtotal, Decimal::from(25000));
        assert_eq!(breakdown.total, Decimal::from(52500));

        assert_eq!(breakdown.material_lines.len(), 2);
        assert_eq!(breakdown.material_lines[0].line_cost, Decimal::from(22500));
        assert_eq!(breakdown.material_lines[1].line_cost, Decimal::from(5000));
        assert_eq!(breakdown.labor_lines[0].process_id, "COSTURA");
    }

    #[test]
    fn test_empty_inputs_yield_zero() {
        let breakdown = CostingEngine::compute_cost_breakdown(&[], &[]);

        assert_eq!(breakdown, ProductCostBreakdown::zero());
        assert!(breakdown.is_zero());
    }

    #[test]
    fn test_labor_counts_once_per_selection() {
        let labor = vec![
            LaborProcess::new("CORTE".to_string(), Decimal::from(4000)),
            LaborProcess::new("COSTURA".to_string(), Decimal::from(25000)),
            LaborProcess::new("TERMINACION".to_string(), Decimal::from(6000)),
        ];

        let breakdown = CostingEngine::compute_cost_breakdown(&[], &labor);

        assert_eq!(breakdown.materials_subtotal, Decimal::ZERO);
        assert_eq!(breakdown.labor_subtotal, Decimal::from(35000));
        assert_eq!(breakdown.total, Decimal::from(35000));
    }

    #[test]
    fn test_decimal_accumulation_has_no_drift() {
        // 0.1 × 10 次，浮點數會累積誤差
        let materials: Vec<MaterialUsage> = (0..10)
            .map(|i| MaterialUsage::new(format!("M-{}", i), Decimal::new(1, 1), Decimal::ONE))
            .collect();

        let breakdown = CostingEngine::compute_cost_breakdown(&materials, &[]);

        assert_eq!(breakdown.total, Decimal::ONE);
    }

    #[test]
    fn test_production_cost() {
        let labor = vec![LaborProcess::new("COSTURA".to_string(), Decimal::from(25000))];
        let breakdown = CostingEngine::compute_cost_breakdown(&denim_and_thread(), &labor);

        assert_eq!(breakdown.production_cost(50), Decimal::from(2_625_000));
        assert_eq!(breakdown.production_cost(0), Decimal::ZERO);
    }

    #[test]
    fn test_lenient_mode_accepts_negative_values() {
        let materials = vec![MaterialUsage::new(
            "AJUSTE".to_string(),
            Decimal::from(-1000),
            Decimal::ONE,
        )];

        let breakdown =
            CostingEngine::compute_checked(&materials, &[], ValidationMode::Lenient).unwrap();

        assert_eq!(breakdown.total, Decimal::from(-1000));
    }

    #[test]
    fn test_strict_mode_rejects_negative_values() {
        let materials = vec![MaterialUsage::new(
            "DENIM-01".to_string(),
            Decimal::from(15000),
            Decimal::from(-1),
        )];
        let result = CostingEngine::compute_checked(&materials, &[], ValidationMode::Strict);
        assert!(matches!(result, Err(CosteoError::InvalidInput(ref msg)) if msg.contains("DENIM-01")));

        let labor = vec![LaborProcess::new("CORTE".to_string(), Decimal::from(-4000))];
        let result = CostingEngine::compute_checked(&[], &labor, ValidationMode::Strict);
        assert!(matches!(result, Err(CosteoError::InvalidInput(ref msg)) if msg.contains("CORTE")));
    }

    #[test]
    fn test_strict_mode_accepts_valid_inputs() {
        let result =
            CostingEngine::compute_checked(&denim_and_thread(), &[], ValidationMode::Strict);
        assert_eq!(result.unwrap().total, Decimal::from(27500));
    }
}
