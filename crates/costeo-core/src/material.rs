//! 物料（insumo）模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 計量單位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitOfMeasure {
    /// 公尺（布料）
    Metro,
    /// 單位（鈕扣、拉鍊）
    #[default]
    Unidad,
    /// 線軸
    Cono,
    /// 捲
    Rollo,
    /// 公斤
    Kilogramo,
    Otro,
}

/// 物料目錄項目（來自 `GET /insumos`）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// 物料參考編號
    pub referencia: String,

    /// 名稱
    pub nombre: String,

    /// 計量單位
    #[serde(default)]
    pub unidad_medida: UnitOfMeasure,

    /// 每計量單位的價格
    pub precio_unitario: Decimal,
}

impl Material {
    /// 創建新的物料目錄項目
    pub fn new(referencia: String, nombre: String, precio_unitario: Decimal) -> Self {
        Self {
            referencia,
            nombre,
            unidad_medida: UnitOfMeasure::default(),
            precio_unitario,
        }
    }

    /// 建構器模式：設置計量單位
    pub fn with_unidad_medida(mut self, unidad_medida: UnitOfMeasure) -> Self {
        self.unidad_medida = unidad_medida;
        self
    }

    /// 以目錄價格建立產品用量
    pub fn usage(&self, quantity_used: Decimal) -> MaterialUsage {
        MaterialUsage::new(self.referencia.clone(), self.precio_unitario, quantity_used)
    }
}

/// 產品使用的物料（單價 × 每件用量）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialUsage {
    /// 物料ID（目錄參考編號）
    pub material_id: String,

    /// 單價
    pub unit_price: Decimal,

    /// 每件產品的用量，可為小數（例如 1.5 公尺布料）
    pub quantity_used: Decimal,
}

impl MaterialUsage {
    /// 創建新的物料用量
    pub fn new(material_id: String, unit_price: Decimal, quantity_used: Decimal) -> Self {
        Self {
            material_id,
            unit_price,
            quantity_used,
        }
    }

    /// 單行成本
    pub fn line_cost(&self) -> Decimal {
        self.unit_price * self.quantity_used
    }

    /// 單價與用量皆非負
    pub fn is_well_formed(&self) -> bool {
        self.unit_price >= Decimal::ZERO && self.quantity_used >= Decimal::ZERO
    }
}

/// 物料選擇（UI 提交，不含價格）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSelection {
    pub material_id: String,
    pub quantity_used: Decimal,
}

impl MaterialSelection {
    pub fn new(material_id: String, quantity_used: Decimal) -> Self {
        Self {
            material_id,
            quantity_used,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_cost_fractional_quantity() {
        let usage = MaterialUsage::new(
            "DENIM-01".to_string(),
            Decimal::from(15000),
            Decimal::new(15, 1),
        );

        assert_eq!(usage.line_cost(), Decimal::from(22500));
        assert!(usage.is_well_formed());
    }

    #[test]
    fn test_negative_usage_is_not_well_formed() {
        let usage = MaterialUsage::new(
            "BOTON-01".to_string(),
            Decimal::from(-300),
            Decimal::from(4),
        );

        assert!(!usage.is_well_formed());
        // 不驗證，照常計算
        assert_eq!(usage.line_cost(), Decimal::from(-1200));
    }

    #[test]
    fn test_material_usage_from_catalog() {
        let material = Material::new(
            "HILO-01".to_string(),
            "Hilo poliéster".to_string(),
            Decimal::from(2500),
        )
        .with_unidad_medida(UnitOfMeasure::Cono);

        let usage = material.usage(Decimal::from(2));

        assert_eq!(usage.material_id, "HILO-01");
        assert_eq!(usage.unit_price, Decimal::from(2500));
        assert_eq!(usage.line_cost(), Decimal::from(5000));
    }

    #[test]
    fn test_deserialize_catalog_entry() {
        let json = r#"{
            "referencia": "DENIM-01",
            "nombre": "Denim 14 oz",
            "unidad_medida": "metro",
            "precio_unitario": 15000
        }"#;

        let material: Material = serde_json::from_str(json).unwrap();

        assert_eq!(material.unidad_medida, UnitOfMeasure::Metro);
        assert_eq!(material.precio_unitario, Decimal::from(15000));
    }

    #[test]
    fn test_missing_unit_defaults_to_unidad() {
        let json = r#"{"referencia": "BOTON-01", "nombre": "Botón", "precio_unitario": "350"}"#;

        let material: Material = serde_json::from_str(json).unwrap();

        assert_eq!(material.unidad_medida, UnitOfMeasure::Unidad);
        assert_eq!(material.precio_unitario, Decimal::from(350));
    }
}
