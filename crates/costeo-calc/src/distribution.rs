//! 尺碼數量分配

use costeo_core::SizeLabel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 各尺碼分配數量（依尺碼數值排序）
pub type QuantityBySize = BTreeMap<SizeLabel, u32>;

/// 分配狀態（供 UI 顯示多出或不足）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistributionStatus {
    /// 分配總和等於預期
    Balanced,
    /// 多分配了 n 件
    Surplus(u64),
    /// 少分配了 n 件
    Deficit(u64),
}

/// 分配檢查結果（唯讀診斷，不修正分配）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionEvaluation {
    /// 已分配總數
    pub distributed: u64,

    /// 預期總數
    pub expected: u64,

    /// 已分配 - 預期
    pub difference: i64,

    pub is_valid: bool,
}

impl DistributionEvaluation {
    pub fn status(&self) -> DistributionStatus {
        match self.difference {
            0 => DistributionStatus::Balanced,
            d if d > 0 => DistributionStatus::Surplus(d.unsigned_abs()),
            d => DistributionStatus::Deficit(d.unsigned_abs()),
        }
    }
}

/// 尺碼分配器
pub struct SizeAllocator;

impl SizeAllocator {
    /// 依數值遞增排序並去除重複尺碼
    pub fn order_sizes(selected_sizes: &[SizeLabel]) -> Vec<SizeLabel> {
        let mut sizes = selected_sizes.to_vec();
        sizes.sort();
        sizes.dedup();
        sizes
    }

    /// 平均分配總數量到選取的尺碼
    ///
    /// 每個尺碼分得 `total / n`，餘數依尺碼數值由小到大各多分 1 件，
    /// 與呼叫者傳入的順序無關。沒有選取尺碼時回傳空分配。
    pub fn distribute_evenly(total_quantity: u32, selected_sizes: &[SizeLabel]) -> QuantityBySize {
        let sizes = Self::order_sizes(selected_sizes);
        if sizes.is_empty() {
            return QuantityBySize::new();
        }

        let n = u32::try_from(sizes.len()).unwrap_or(u32::MAX);
        let base = total_quantity / n;
        let remainder = (total_quantity % n) as usize;

        tracing::debug!(
            "平均分配：總數 {}，尺碼 {} 個，每碼 {}，餘數 {}",
            total_quantity,
            sizes.len(),
            base,
            remainder
        );

        sizes
            .into_iter()
            .enumerate()
            .map(|(idx, size)| {
                let extra = if idx < remainder { 1 } else { 0 };
                (size, base + extra)
            })
            .collect()
    }

    /// 手動修改單一尺碼的數量（負數視為 0），其他尺碼不變、不重新平衡
    pub fn update_single_size(
        current: &QuantityBySize,
        size_label: &SizeLabel,
        new_value: i64,
    ) -> QuantityBySize {
        let clamped = u32::try_from(new_value.max(0)).unwrap_or(u32::MAX);

        let mut updated = current.clone();
        updated.insert(size_label.clone(), clamped);
        updated
    }

    /// 檢查分配總和是否等於預期總數
    pub fn evaluate_distribution(
        quantity_by_size: &QuantityBySize,
        expected_total: u32,
    ) -> DistributionEvaluation {
        let distributed: u64 = quantity_by_size.values().map(|&q| u64::from(q)).sum();
        let expected = u64::from(expected_total);
        let difference = distributed as i64 - expected as i64;

        DistributionEvaluation {
            distributed,
            expected,
            difference,
            is_valid: difference == 0,
        }
    }
}
