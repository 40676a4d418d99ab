//! 工序（mano de obra）模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 工序目錄項目（來自 `GET /manos-de-obra`）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborOperation {
    /// 工序參考編號
    pub referencia: String,

    /// 名稱（裁剪、縫製、整燙…）
    pub nombre: String,

    /// 每件產品的固定工資
    pub precio: Decimal,
}

impl LaborOperation {
    /// 創建新的工序目錄項目
    pub fn new(referencia: String, nombre: String, precio: Decimal) -> Self {
        Self {
            referencia,
            nombre,
            precio,
        }
    }

    /// 轉換為產品工序
    pub fn process(&self) -> LaborProcess {
        LaborProcess::new(self.referencia.clone(), self.precio)
    }
}

/// 產品選用的工序
///
/// 與物料不同，工序沒有數量乘數：每次選取只計一次價格。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborProcess {
    /// 工序ID
    pub process_id: String,

    /// 固定工資
    pub price: Decimal,
}

impl LaborProcess {
    /// 創建新的產品工序
    pub fn new(process_id: String, price: Decimal) -> Self {
        Self { process_id, price }
    }

    pub fn is_well_formed(&self) -> bool {
        self.price >= Decimal::ZERO
    }
}

/// 工序選擇（UI 提交，不含價格）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborSelection {
    pub process_id: String,
}

impl LaborSelection {
    pub fn new(process_id: String) -> Self {
        Self { process_id }
    }
}
