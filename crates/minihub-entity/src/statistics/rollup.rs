//! Subtree statistics rollup.
//!
//! Computes, for every folder of a subtree, the miniature totals of that
//! folder's own entire subtree, grouped by status. The traversal is an
//! explicit breadth-first walk over a parent-to-children index, so deeply
//! nested hierarchies cannot overflow the stack.

use std::collections::HashMap;

use minihub_core::types::FolderId;

use crate::miniature::ProgressStatus;

use super::model::{FolderStatistics, StatusBreakdown};

/// One folder of the queried subtree, as fetched by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtreeFolder {
    /// The folder.
    pub id: FolderId,
    /// Its parent, if the parent is also inside the subtree.
    pub parent_id: Option<FolderId>,
}

/// Direct miniature totals of one folder, grouped by status.
///
/// `total_count` sums the miniatures' `count` multipliers, not row counts:
/// a single row with count 5 contributes 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiniatureTally {
    /// The folder directly containing the miniatures.
    pub folder_id: FolderId,
    /// Their status.
    pub status: ProgressStatus,
    /// Summed `count` of all matching miniature rows.
    pub total_count: i64,
}

/// Compute per-folder subtree rollups for the subtree rooted at `root`.
///
/// `folders` is the full subtree folder set including `root` itself;
/// `tallies` are the direct per-folder totals of those folders' miniatures.
/// Every folder id in `folders` appears in the result, zero-filled when its
/// subtree holds no miniatures. Folders unreachable from `root` (which the
/// repository query cannot produce) are ignored.
///
/// Assumes the parent relation is acyclic; the folder mutation operations
/// guarantee this.
pub fn compute_statistics(
    root: FolderId,
    folders: &[SubtreeFolder],
    tallies: &[MiniatureTally],
) -> FolderStatistics {
    let mut breakdowns: HashMap<FolderId, StatusBreakdown> = folders
        .iter()
        .map(|f| (f.id, StatusBreakdown::default()))
        .collect();
    breakdowns.entry(root).or_default();

    for tally in tallies {
        if let Some(breakdown) = breakdowns.get_mut(&tally.folder_id) {
            breakdown.add(tally.status, tally.total_count);
        }
    }

    let mut children: HashMap<FolderId, Vec<FolderId>> = HashMap::new();
    let mut parent_of: HashMap<FolderId, FolderId> = HashMap::new();
    for folder in folders {
        if folder.id == root {
            continue;
        }
        if let Some(parent_id) = folder.parent_id {
            children.entry(parent_id).or_default().push(folder.id);
            parent_of.insert(folder.id, parent_id);
        }
    }

    // Breadth-first order from the root; walking it in reverse visits every
    // child before its parent.
    let mut bfs_order = Vec::with_capacity(breakdowns.len());
    let mut queue = std::collections::VecDeque::from([root]);
    while let Some(id) = queue.pop_front() {
        bfs_order.push(id);
        if let Some(child_ids) = children.get(&id) {
            queue.extend(child_ids.iter().copied());
        }
    }

    for &id in bfs_order.iter().rev() {
        let Some(&parent_id) = parent_of.get(&id) else {
            continue;
        };
        let subtotal = breakdowns[&id];
        if let Some(parent_breakdown) = breakdowns.get_mut(&parent_id) {
            parent_breakdown.merge(&subtotal);
        }
    }

    // Folders never reached from the root keep only their direct counts;
    // the repository's subtree query cannot yield such rows, so restrict
    // the result to what the walk visited.
    let covered = bfs_order
        .into_iter()
        .filter_map(|id| breakdowns.remove(&id).map(|b| (id, b)))
        .collect();

    FolderStatistics(covered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(id: FolderId, parent_id: Option<FolderId>) -> SubtreeFolder {
        SubtreeFolder { id, parent_id }
    }

    fn tally(folder_id: FolderId, status: ProgressStatus, total_count: i64) -> MiniatureTally {
        MiniatureTally {
            folder_id,
            status,
            total_count,
        }
    }

    #[test]
    fn test_zero_fill_covers_every_folder() {
        let root = FolderId::new();
        let a = FolderId::new();
        let b = FolderId::new();
        let folders = [
            folder(root, None),
            folder(a, Some(root)),
            folder(b, Some(a)),
        ];

        let stats = compute_statistics(root, &folders, &[]);

        assert_eq!(stats.len(), 3);
        for id in [root, a, b] {
            assert_eq!(stats.get(id), Some(&StatusBreakdown::default()));
        }
    }

    #[test]
    fn test_rollup_root_a_b_chain() {
        // root -> A -> B; A holds Gray x3 directly, B holds Painted x2.
        let root = FolderId::new();
        let a = FolderId::new();
        let b = FolderId::new();
        let folders = [
            folder(root, None),
            folder(a, Some(root)),
            folder(b, Some(a)),
        ];
        let tallies = [
            tally(a, ProgressStatus::Gray, 3),
            tally(b, ProgressStatus::Painted, 2),
        ];

        let stats = compute_statistics(root, &folders, &tallies);

        assert_eq!(
            stats.get(root),
            Some(&StatusBreakdown {
                gray: 3,
                built: 0,
                painted: 2
            })
        );
        assert_eq!(
            stats.get(a),
            Some(&StatusBreakdown {
                gray: 3,
                built: 0,
                painted: 2
            })
        );
        assert_eq!(
            stats.get(b),
            Some(&StatusBreakdown {
                gray: 0,
                built: 0,
                painted: 2
            })
        );
    }

    #[test]
    fn test_count_is_a_multiplier_not_a_row_count() {
        let root = FolderId::new();
        let folders = [folder(root, None)];
        let tallies = [tally(root, ProgressStatus::Built, 5)];

        let stats = compute_statistics(root, &folders, &tallies);
        assert_eq!(stats.get(root).expect("root present").built, 5);
    }

    #[test]
    fn test_siblings_do_not_leak_into_each_other() {
        let root = FolderId::new();
        let left = FolderId::new();
        let right = FolderId::new();
        let folders = [
            folder(root, None),
            folder(left, Some(root)),
            folder(right, Some(root)),
        ];
        let tallies = [
            tally(left, ProgressStatus::Gray, 4),
            tally(right, ProgressStatus::Painted, 1),
        ];

        let stats = compute_statistics(root, &folders, &tallies);

        assert_eq!(stats.get(left).expect("left").painted, 0);
        assert_eq!(stats.get(right).expect("right").gray, 0);
        let root_breakdown = stats.get(root).expect("root");
        assert_eq!(root_breakdown.gray, 4);
        assert_eq!(root_breakdown.painted, 1);
    }

    #[test]
    fn test_single_folder_subtree() {
        let root = FolderId::new();
        let stats = compute_statistics(root, &[folder(root, None)], &[]);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats.get(root), Some(&StatusBreakdown::default()));
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        // A 500-level chain with one miniature at the bottom: every level
        // sees it in its rollup.
        let mut folders = Vec::new();
        let root = FolderId::new();
        folders.push(folder(root, None));
        let mut parent = root;
        let mut leaf = root;
        for _ in 0..500 {
            let id = FolderId::new();
            folders.push(folder(id, Some(parent)));
            parent = id;
            leaf = id;
        }
        let tallies = [tally(leaf, ProgressStatus::Painted, 1)];

        let stats = compute_statistics(root, &folders, &tallies);

        assert_eq!(stats.len(), 501);
        assert_eq!(stats.get(root).expect("root").painted, 1);
        assert_eq!(stats.get(leaf).expect("leaf").painted, 1);
    }
}
