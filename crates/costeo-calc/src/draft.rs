//! 產品草稿（尺碼選擇、數量分配與物料/工序選擇的狀態機）

use chrono::{DateTime, Utc};
use costeo_core::{
    CosteoConfig, CosteoError, LaborProcess, LaborSelection, MaterialSelection, MaterialUsage,
    PantalonPayload, PriceCatalog, Result, SizeLabel,
};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::costing::{CostingEngine, ProductCostBreakdown};
use crate::distribution::{DistributionEvaluation, QuantityBySize, SizeAllocator};
use crate::CosteoWarning;

/// 草稿狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    /// 初始：尚未選取尺碼
    NoSizesSelected,
    /// 已選取尺碼，尚未輸入總數量
    SizesSelectedNoQuantity,
    /// 已分配（可能經過手動修改而不一致）
    Distributed,
}

/// 草稿提交結果
#[derive(Debug, Clone)]
pub struct DraftSubmission {
    pub draft_id: Uuid,

    /// `POST /pantalones` 請求內容
    pub payload: PantalonPayload,

    /// 提交時的單位成本
    pub cost: ProductCostBreakdown,

    /// 提交時的分配檢查（未設定總數量時為 None）
    pub evaluation: Option<DistributionEvaluation>,

    pub warnings: Vec<CosteoWarning>,

    pub submitted_at: DateTime<Utc>,
}

/// 產品草稿
///
/// 變更尺碼集合時一律重新平均分配，先前的手動修改會被捨棄。
#[derive(Debug, Clone)]
pub struct ProductDraft {
    id: Uuid,
    referencia: String,
    nombre: String,
    created_at: DateTime<Utc>,
    config: CosteoConfig,

    materials: Vec<MaterialUsage>,
    labor: Vec<LaborProcess>,

    /// 依尺碼數值排序
    selected_sizes: Vec<SizeLabel>,
    total_quantity: Option<u32>,
    quantity_by_size: QuantityBySize,
}

impl ProductDraft {
    /// 創建新的產品草稿
    pub fn new(referencia: String, nombre: String, config: CosteoConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            referencia,
            nombre,
            created_at: Utc::now(),
            config,
            materials: Vec::new(),
            labor: Vec::new(),
            selected_sizes: Vec::new(),
            total_quantity: None,
            quantity_by_size: QuantityBySize::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn referencia(&self) -> &str {
        &self.referencia
    }

    pub fn nombre(&self) -> &str {
        &self.nombre
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn config(&self) -> &CosteoConfig {
        &self.config
    }

    pub fn materials(&self) -> &[MaterialUsage] {
        &self.materials
    }

    pub fn labor(&self) -> &[LaborProcess] {
        &self.labor
    }

    pub fn selected_sizes(&self) -> &[SizeLabel] {
        &self.selected_sizes
    }

    pub fn total_quantity(&self) -> Option<u32> {
        self.total_quantity
    }

    pub fn quantity_by_size(&self) -> &QuantityBySize {
        &self.quantity_by_size
    }

    /// 目前狀態
    pub fn state(&self) -> DraftState {
        if self.selected_sizes.is_empty() {
            DraftState::NoSizesSelected
        } else if self.total_quantity.is_none() {
            DraftState::SizesSelectedNoQuantity
        } else {
            DraftState::Distributed
        }
    }

    // ---------------------------------------------------------------
    // 尺碼與數量
    // ---------------------------------------------------------------

    /// 選取尺碼（已選取時不變動）
    pub fn select_size(&mut self, size: SizeLabel) -> Result<()> {
        if !self.config.size_catalog.contains(&size) {
            return Err(CosteoError::UnknownSize(size.to_string()));
        }
        if self.selected_sizes.contains(&size) {
            return Ok(());
        }

        self.selected_sizes.push(size);
        self.selected_sizes = SizeAllocator::order_sizes(&self.selected_sizes);
        self.redistribute();
        Ok(())
    }

    /// 取消選取尺碼；取消最後一個時回到初始狀態
    pub fn deselect_size(&mut self, size: &SizeLabel) -> Result<()> {
        let position = self
            .selected_sizes
            .iter()
            .position(|s| s == size)
            .ok_or_else(|| CosteoError::SizeNotSelected(size.to_string()))?;

        self.selected_sizes.remove(position);

        if self.selected_sizes.is_empty() {
            self.clear_sizes();
        } else {
            self.redistribute();
        }
        Ok(())
    }

    /// 清除所有尺碼（總數量一併清除）
    pub fn clear_sizes(&mut self) {
        self.selected_sizes.clear();
        self.total_quantity = None;
        self.quantity_by_size.clear();
    }

    /// 設定總生產數量並平均分配
    pub fn set_total_quantity(&mut self, total_quantity: u32) -> Result<()> {
        if self.selected_sizes.is_empty() {
            return Err(CosteoError::NoSizesSelected);
        }

        self.total_quantity = Some(total_quantity);
        self.redistribute();
        Ok(())
    }

    /// 手動修改單一尺碼的數量
    pub fn edit_size_quantity(&mut self, size: &SizeLabel, new_value: i64) -> Result<()> {
        if !self.selected_sizes.contains(size) {
            return Err(CosteoError::SizeNotSelected(size.to_string()));
        }
        if self.total_quantity.is_none() {
            return Err(CosteoError::MissingTotalQuantity);
        }

        self.quantity_by_size =
            SizeAllocator::update_single_size(&self.quantity_by_size, size, new_value);
        Ok(())
    }

    /// 目前分配的檢查結果（未設定總數量時為 None）
    pub fn evaluation(&self) -> Option<DistributionEvaluation> {
        self.total_quantity
            .map(|total| SizeAllocator::evaluate_distribution(&self.quantity_by_size, total))
    }

    fn redistribute(&mut self) {
        self.quantity_by_size = match self.total_quantity {
            Some(total) => SizeAllocator::distribute_evenly(total, &self.selected_sizes),
            None => QuantityBySize::new(),
        };
    }

    // ---------------------------------------------------------------
    // 物料與工序
    // ---------------------------------------------------------------

    /// 加入物料（相同物料ID 會取代原有用量，用量依配置的小數位數四捨五入）
    pub fn attach_material(&mut self, usage: MaterialUsage) {
        let mut usage = usage;
        usage.quantity_used = self.config.round_quantity(usage.quantity_used);

        match self
            .materials
            .iter_mut()
            .find(|m| m.material_id == usage.material_id)
        {
            Some(existing) => *existing = usage,
            None => self.materials.push(usage),
        }
    }

    /// 由價格目錄解析後加入物料
    pub fn attach_material_from_catalog(
        &mut self,
        catalog: &PriceCatalog,
        selection: &MaterialSelection,
    ) -> Result<()> {
        let usage = catalog.resolve_material(selection)?;
        self.attach_material(usage);
        Ok(())
    }

    /// 修改物料用量
    pub fn edit_material_quantity(&mut self, material_id: &str, quantity_used: Decimal) -> Result<()> {
        let quantity_used = self.config.round_quantity(quantity_used);
        let usage = self
            .materials
            .iter_mut()
            .find(|m| m.material_id == material_id)
            .ok_or_else(|| CosteoError::MaterialNotFound(material_id.to_string()))?;

        usage.quantity_used = quantity_used;
        Ok(())
    }

    /// 移除物料
    pub fn detach_material(&mut self, material_id: &str) -> Result<MaterialUsage> {
        let position = self
            .materials
            .iter()
            .position(|m| m.material_id == material_id)
            .ok_or_else(|| CosteoError::MaterialNotFound(material_id.to_string()))?;

        Ok(self.materials.remove(position))
    }

    /// 加入工序（同一工序只計一次）
    pub fn attach_labor(&mut self, process: LaborProcess) {
        match self
            .labor
            .iter_mut()
            .find(|l| l.process_id == process.process_id)
        {
            Some(existing) => *existing = process,
            None => self.labor.push(process),
        }
    }

    /// 由價格目錄解析後加入工序
    pub fn attach_labor_from_catalog(
        &mut self,
        catalog: &PriceCatalog,
        selection: &LaborSelection,
    ) -> Result<()> {
        let process = catalog.resolve_labor(selection)?;
        self.attach_labor(process);
        Ok(())
    }

    /// 移除工序
    pub fn detach_labor(&mut self, process_id: &str) -> Result<LaborProcess> {
        let position = self
            .labor
            .iter()
            .position(|l| l.process_id == process_id)
            .ok_or_else(|| CosteoError::LaborNotFound(process_id.to_string()))?;

        Ok(self.labor.remove(position))
    }

    /// 依目前的選擇重新計算單位成本
    pub fn cost_breakdown(&self) -> Result<ProductCostBreakdown> {
        CostingEngine::compute_checked(&self.materials, &self.labor, self.config.validation_mode)
    }

    // ---------------------------------------------------------------
    // 終止狀態
    // ---------------------------------------------------------------

    /// 提交草稿，產生 `POST /pantalones` 請求內容
    ///
    /// `Advisory` 策略下分配不一致只記錄警告；`RequireBalanced` 策略下回傳錯誤。
    pub fn submit(self) -> Result<DraftSubmission> {
        let cost = self.cost_breakdown()?;
        let evaluation = self.evaluation();
        let mut warnings = Vec::new();

        match evaluation {
            Some(eval) if !eval.is_valid => {
                if self.config.requires_balanced_distribution() {
                    return Err(CosteoError::InvalidDistribution {
                        distributed: eval.distributed,
                        expected: eval.expected,
                    });
                }
                tracing::warn!(
                    "產品 {} 尺碼分配不一致：已分配 {}，預期 {}",
                    self.referencia,
                    eval.distributed,
                    eval.expected
                );
                warnings.push(CosteoWarning::warning(
                    self.referencia.clone(),
                    format!(
                        "尺碼分配不一致：已分配 {}，預期 {}（差異 {}）",
                        eval.distributed, eval.expected, eval.difference
                    ),
                ));
            }
            None => {
                if self.config.requires_balanced_distribution() {
                    return Err(CosteoError::MissingTotalQuantity);
                }
                warnings.push(CosteoWarning::info(
                    self.referencia.clone(),
                    "未設定總生產數量，尺碼清單為空".to_string(),
                ));
            }
            Some(_) => {}
        }

        let payload = PantalonPayload::new(
            self.referencia.clone(),
            self.nombre.clone(),
            self.quantity_by_size.clone(),
            &self.materials,
            &self.labor,
        );

        tracing::info!(
            "提交產品草稿 {}（{}）：單位成本 {}，尺碼 {} 個，警告 {} 筆",
            self.referencia,
            self.id,
            cost.total,
            payload.tallas_disponibles.len(),
            warnings.len()
        );

        Ok(DraftSubmission {
            draft_id: self.id,
            payload,
            cost,
            evaluation,
            warnings,
            submitted_at: Utc::now(),
        })
    }

    /// 放棄草稿
    pub fn abandon(self) {
        tracing::debug!("放棄產品草稿 {}（{}）", self.referencia, self.id);
    }
}
