//! 價格目錄（依租戶區分的物料與工序價格）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::labor::{LaborOperation, LaborProcess, LaborSelection};
use crate::material::{Material, MaterialSelection, MaterialUsage};
use crate::{CosteoError, Result};

/// 租戶（公司）ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 價格目錄
///
/// 每個租戶一份，租戶ID 明確傳入，成本計算本身不依賴租戶。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceCatalog {
    /// 所屬租戶
    pub tenant_id: TenantId,

    /// 物料（依參考編號）
    materials: HashMap<String, Material>,

    /// 工序（依參考編號）
    labor: HashMap<String, LaborOperation>,
}

impl PriceCatalog {
    /// 創建空的價格目錄
    pub fn new(tenant_id: TenantId) -> Self {
        Self {
            tenant_id,
            materials: HashMap::new(),
            labor: HashMap::new(),
        }
    }

    /// 由 `GET /insumos` 與 `GET /manos-de-obra` 的回應內容創建目錄
    pub fn from_json(tenant_id: TenantId, insumos_json: &str, manos_json: &str) -> Result<Self> {
        let materials: Vec<Material> = serde_json::from_str(insumos_json)?;
        let labor: Vec<LaborOperation> = serde_json::from_str(manos_json)?;

        Ok(Self::new(tenant_id)
            .with_materials(materials)
            .with_labor(labor))
    }

    /// 建構器模式：加入物料
    pub fn with_materials(mut self, materials: Vec<Material>) -> Self {
        for material in materials {
            self.add_material(material);
        }
        self
    }

    /// 建構器模式：加入工序
    pub fn with_labor(mut self, operations: Vec<LaborOperation>) -> Self {
        for operation in operations {
            self.add_labor(operation);
        }
        self
    }

    /// 加入或更新物料（相同參考編號會覆蓋）
    pub fn add_material(&mut self, material: Material) {
        self.materials.insert(material.referencia.clone(), material);
    }

    /// 加入或更新工序
    pub fn add_labor(&mut self, operation: LaborOperation) {
        self.labor.insert(operation.referencia.clone(), operation);
    }

    pub fn material(&self, referencia: &str) -> Option<&Material> {
        self.materials.get(referencia)
    }

    pub fn labor_operation(&self, referencia: &str) -> Option<&LaborOperation> {
        self.labor.get(referencia)
    }

    /// 將物料選擇解析為含價格的物料用量
    pub fn resolve_material(&self, selection: &MaterialSelection) -> Result<MaterialUsage> {
        let material = self
            .material(&selection.material_id)
            .ok_or_else(|| CosteoError::MaterialNotFound(selection.material_id.clone()))?;

        Ok(material.usage(selection.quantity_used))
    }

    /// 將工序選擇解析為含價格的產品工序
    pub fn resolve_labor(&self, selection: &LaborSelection) -> Result<LaborProcess> {
        self.labor_operation(&selection.process_id)
            .map(LaborOperation::process)
            .ok_or_else(|| CosteoError::LaborNotFound(selection.process_id.clone()))
    }

    /// 批量解析物料選擇（保持輸入順序，遇到第一個未知物料即失敗）
    pub fn resolve_materials(&self, selections: &[MaterialSelection]) -> Result<Vec<MaterialUsage>> {
        selections.iter().map(|s| self.resolve_material(s)).collect()
    }

    /// 批量解析工序選擇
    pub fn resolve_labor_list(&self, selections: &[LaborSelection]) -> Result<Vec<LaborProcess>> {
        selections.iter().map(|s| self.resolve_labor(s)).collect()
    }

    /// 物料數量
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// 工序數量
    pub fn labor_count(&self) -> usize {
        self.labor.len()
    }
}
