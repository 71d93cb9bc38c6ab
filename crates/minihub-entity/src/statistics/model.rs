//! Statistics value objects.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use minihub_core::types::FolderId;

use crate::miniature::ProgressStatus;

/// Miniature totals of one folder's subtree, broken down by status.
///
/// Serialized with the status names as keys, matching the frontend's
/// statistics shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusBreakdown {
    /// Total count of unpainted miniatures.
    pub gray: i64,
    /// Total count of assembled, unpainted miniatures.
    pub built: i64,
    /// Total count of finished miniatures.
    pub painted: i64,
}

impl StatusBreakdown {
    /// Add `count` models under `status`.
    pub fn add(&mut self, status: ProgressStatus, count: i64) {
        match status {
            ProgressStatus::Gray => self.gray += count,
            ProgressStatus::Built => self.built += count,
            ProgressStatus::Painted => self.painted += count,
        }
    }

    /// Merge another breakdown into this one.
    pub fn merge(&mut self, other: &StatusBreakdown) {
        self.gray += other.gray;
        self.built += other.built;
        self.painted += other.painted;
    }

    /// Total model count across all statuses.
    pub fn total(&self) -> i64 {
        self.gray + self.built + self.painted
    }

    /// Painted share in percent; 0.0 for an empty subtree.
    pub fn percent_painted(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.painted as f64 / total as f64 * 100.0
    }
}

/// Derived statistics for a folder subtree: one [`StatusBreakdown`] per
/// folder, each holding that folder's full subtree rollup.
///
/// Every folder of the queried subtree is present, including folders with
/// no miniatures anywhere below them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderStatistics(pub HashMap<FolderId, StatusBreakdown>);

impl FolderStatistics {
    /// The breakdown of one folder, if it is part of the queried subtree.
    pub fn get(&self, folder_id: FolderId) -> Option<&StatusBreakdown> {
        self.0.get(&folder_id)
    }

    /// Number of folders covered.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no folders are covered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_painted_zero_total() {
        let breakdown = StatusBreakdown::default();
        assert_eq!(breakdown.percent_painted(), 0.0);
    }

    #[test]
    fn test_percent_painted_all_painted() {
        let breakdown = StatusBreakdown {
            gray: 0,
            built: 0,
            painted: 5,
        };
        assert_eq!(breakdown.percent_painted(), 100.0);
    }

    #[test]
    fn test_percent_painted_partial() {
        let breakdown = StatusBreakdown {
            gray: 3,
            built: 0,
            painted: 1,
        };
        assert_eq!(breakdown.percent_painted(), 25.0);
    }

    #[test]
    fn test_serde_uses_status_names_as_keys() {
        let breakdown = StatusBreakdown {
            gray: 3,
            built: 0,
            painted: 2,
        };
        let json = serde_json::to_value(breakdown).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "Gray": 3, "Built": 0, "Painted": 2 })
        );
    }
}
