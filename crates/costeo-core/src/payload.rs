//! `POST /pantalones` 請求內容

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::labor::LaborProcess;
use crate::material::MaterialUsage;
use crate::size::SizeLabel;
use crate::Result;

/// 產品所需物料（價格由後端查詢）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsumoRequerido {
    pub insumo_referencia: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub cantidad_requerida: Decimal,
}

/// 產品所需工序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManoDeObraRequerida {
    pub mano_de_obra_referencia: String,
}

/// 新增產品（褲子）的請求內容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantalonPayload {
    /// 產品參考編號
    pub referencia: String,

    /// 產品名稱
    pub nombre: String,

    /// 各尺碼分配數量（依尺碼數值排序）
    pub tallas_disponibles: BTreeMap<SizeLabel, u32>,

    /// 物料清單
    pub insumos: Vec<InsumoRequerido>,

    /// 工序清單
    pub manos_de_obra: Vec<ManoDeObraRequerida>,
}

impl PantalonPayload {
    /// 創建新的請求內容
    ///
    /// 物料只保留參考編號與用量，工序只保留參考編號。
    pub fn new(
        referencia: String,
        nombre: String,
        tallas_disponibles: BTreeMap<SizeLabel, u32>,
        materials: &[MaterialUsage],
        labor: &[LaborProcess],
    ) -> Self {
        Self {
            referencia,
            nombre,
            tallas_disponibles,
            insumos: materials
                .iter()
                .map(|m| InsumoRequerido {
                    insumo_referencia: m.material_id.clone(),
                    cantidad_requerida: m.quantity_used,
                })
                .collect(),
            manos_de_obra: labor
                .iter()
                .map(|l| ManoDeObraRequerida {
                    mano_de_obra_referencia: l.process_id.clone(),
                })
                .collect(),
        }
    }

    /// 各尺碼數量總和
    pub fn total_units(&self) -> u64 {
        self.tallas_disponibles.values().map(|&q| u64::from(q)).sum()
    }

    /// 序列化為 JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sample_payload() -> PantalonPayload {
        let mut tallas = BTreeMap::new();
        tallas.insert(SizeLabel::from("36"), 16);
        tallas.insert(SizeLabel::from("32"), 17);
        tallas.insert(SizeLabel::from("34"), 17);

        PantalonPayload::new(
            "PANT-CLASICO".to_string(),
            "Pantalón clásico".to_string(),
            tallas,
            &[MaterialUsage::new(
                "DENIM-01".to_string(),
                Decimal::from(15000),
                Decimal::new(15, 1),
            )],
            &[LaborProcess::new("COSTURA".to_string(), Decimal::from(25000))],
        )
    }

    #[test]
    fn test_payload_drops_prices() {
        let payload = sample_payload();

        assert_eq!(payload.insumos.len(), 1);
        assert_eq!(payload.insumos[0].insumo_referencia, "DENIM-01");
        assert_eq!(payload.insumos[0].cantidad_requerida, Decimal::new(15, 1));
        assert_eq!(payload.manos_de_obra[0].mano_de_obra_referencia, "COSTURA");
        assert_eq!(payload.total_units(), 50);
    }

    #[test]
    fn test_payload_json_shape() {
        let json = sample_payload().to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["tallas_disponibles"]["32"], 17);
        assert_eq!(value["tallas_disponibles"]["36"], 16);
        assert_eq!(value["insumos"][0]["insumo_referencia"], "DENIM-01");
        assert_eq!(value["insumos"][0]["cantidad_requerida"], 1.5);
        assert_eq!(
            value["manos_de_obra"][0]["mano_de_obra_referencia"],
            "COSTURA"
        );
    }

    #[test]
    fn test_tallas_serialize_in_numeric_order() {
        let mut tallas = BTreeMap::new();
        tallas.insert(SizeLabel::from("10"), 1);
        tallas.insert(SizeLabel::from("8"), 2);

        let payload = PantalonPayload::new(
            "P".to_string(),
            "P".to_string(),
            tallas,
            &[],
            &[],
        );
        let json = payload.to_json().unwrap();

        assert!(json.find("\"8\"").unwrap() < json.find("\"10\"").unwrap());
    }
}
