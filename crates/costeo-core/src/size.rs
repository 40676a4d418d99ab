//! 尺碼（talla）模型

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// 尺碼標籤（例如 "32"、"34"）
///
/// 排序依標籤的數值遞增，而非字串順序："8" < "28" < "30"。
/// 非數字標籤排在所有數字標籤之後，彼此依字串排序。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SizeLabel(String);

impl SizeLabel {
    /// 創建新的尺碼標籤（去除前後空白）
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self(label.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 標籤的數值（非數字標籤為 None）
    pub fn numeric_value(&self) -> Option<u32> {
        self.0.parse().ok()
    }
}

impl Ord for SizeLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric_value(), other.numeric_value()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for SizeLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SizeLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for SizeLabel {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

impl From<SizeLabel> for String {
    fn from(label: SizeLabel) -> Self {
        label.0
    }
}

impl From<u32> for SizeLabel {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

/// 尺碼目錄（可供選取的尺碼）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<SizeLabel>", into = "Vec<SizeLabel>")]
pub struct SizeCatalog {
    /// 依數值遞增排序、無重複
    labels: Vec<SizeLabel>,
}

impl SizeCatalog {
    /// 由任意標籤列表創建目錄（自動排序、去重）
    pub fn new(labels: Vec<SizeLabel>) -> Self {
        let mut labels = labels;
        labels.sort();
        labels.dedup();
        Self { labels }
    }

    /// 標準褲裝尺碼：28 到 46，間隔 2
    pub fn standard() -> Self {
        Self::new((28u32..=46).step_by(2).map(SizeLabel::from).collect())
    }

    /// 由數值範圍創建目錄
    pub fn from_range(start: u32, end: u32, step: u32) -> crate::Result<Self> {
        if step == 0 {
            return Err(crate::CosteoError::ConfigError(
                "尺碼間隔必須大於 0".to_string(),
            ));
        }
        if start > end {
            return Err(crate::CosteoError::ConfigError(format!(
                "尺碼範圍無效：{} > {}",
                start, end
            )));
        }

        Ok(Self::new(
            (start..=end)
                .step_by(step as usize)
                .map(SizeLabel::from)
                .collect(),
        ))
    }

    /// 檢查尺碼是否在目錄中
    pub fn contains(&self, label: &SizeLabel) -> bool {
        self.labels.binary_search(label).is_ok()
    }

    pub fn labels(&self) -> &[SizeLabel] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl From<Vec<SizeLabel>> for SizeCatalog {
    fn from(labels: Vec<SizeLabel>) -> Self {
        Self::new(labels)
    }
}

impl From<SizeCatalog> for Vec<SizeLabel> {
    fn from(catalog: SizeCatalog) -> Self {
        catalog.labels
    }
}

impl Default for SizeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
