//! Sibling ordering within one folder's child group.
//!
//! Every folder keeps a dense, zero-based `sort_order` among its siblings.
//! The operations here are pure: they work on an in-memory snapshot of one
//! sibling group and return the rows whose `sort_order` changed, so the
//! caller can persist all writes in a single transaction.
//!
//! Creation appends at `max + 1` without reusing freed slots; a deletion
//! leaves a gap that [`SiblingGroup::normalize`] closes. [`SiblingGroup::reorder`]
//! therefore expects a dense group.

use minihub_core::types::FolderId;

/// One sibling's identity and current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiblingEntry {
    /// The folder.
    pub id: FolderId,
    /// Its position within the group.
    pub sort_order: i32,
}

/// Snapshot of one sibling group (all folders sharing a parent).
#[derive(Debug, Clone)]
pub struct SiblingGroup {
    entries: Vec<SiblingEntry>,
}

impl SiblingGroup {
    /// Build a group from a sibling snapshot, in any order.
    pub fn new(mut entries: Vec<SiblingEntry>) -> Self {
        entries.sort_by_key(|e| e.sort_order);
        Self { entries }
    }

    /// Number of siblings in the group.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the group has no siblings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current entries, ascending by `sort_order`.
    pub fn entries(&self) -> &[SiblingEntry] {
        &self.entries
    }

    /// The current position of a sibling, if present.
    pub fn sort_order_of(&self, id: FolderId) -> Option<i32> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.sort_order)
    }

    /// The `sort_order` to assign to a newly created child: one past the
    /// current maximum, or 0 for an empty group. Freed slots are never
    /// reused; density is restored lazily by [`Self::normalize`].
    pub fn next_sort_order(&self) -> i32 {
        self.entries
            .iter()
            .map(|e| e.sort_order)
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Move `child` to `new_sort_order`, shifting exactly the affected
    /// siblings by one to keep the sequence dense.
    ///
    /// The target position is clamped into `[0, len - 1]` so an
    /// out-of-range drag target cannot break the density invariant.
    /// Returns the entries whose `sort_order` changed; empty when the move
    /// is a no-op or `child` is not in the group.
    pub fn reorder(&mut self, child: FolderId, new_sort_order: i32) -> Vec<SiblingEntry> {
        let Some(old_sort_order) = self.sort_order_of(child) else {
            return Vec::new();
        };

        let new_sort_order = new_sort_order.clamp(0, self.entries.len() as i32 - 1);
        if new_sort_order == old_sort_order {
            return Vec::new();
        }

        let mut changed = Vec::new();
        for entry in &mut self.entries {
            if entry.id == child {
                entry.sort_order = new_sort_order;
                changed.push(*entry);
                continue;
            }
            let order = entry.sort_order;
            if new_sort_order > old_sort_order {
                // Moving forward: siblings in (old, new] shift back by one.
                if order > old_sort_order && order <= new_sort_order {
                    entry.sort_order = order - 1;
                    changed.push(*entry);
                }
            } else {
                // Moving backward: siblings in [new, old) shift up by one.
                if order >= new_sort_order && order < old_sort_order {
                    entry.sort_order = order + 1;
                    changed.push(*entry);
                }
            }
        }

        self.entries.sort_by_key(|e| e.sort_order);
        changed
    }

    /// Re-sequence the group to `0..n-1`, preserving relative order.
    ///
    /// Invoked after a child is deleted to close the gap left behind.
    /// Idempotent: an already-dense group yields no changes.
    pub fn normalize(&mut self) -> Vec<SiblingEntry> {
        self.entries.sort_by_key(|e| e.sort_order);

        let mut changed = Vec::new();
        for (index, entry) in self.entries.iter_mut().enumerate() {
            let target = index as i32;
            if entry.sort_order != target {
                entry.sort_order = target;
                changed.push(*entry);
            }
        }
        changed
    }

    /// Whether the group's sort orders form exactly `{0, 1, .., n-1}`.
    pub fn is_dense(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(index, e)| e.sort_order == index as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(orders: &[i32]) -> (SiblingGroup, Vec<FolderId>) {
        let ids: Vec<FolderId> = orders.iter().map(|_| FolderId::new()).collect();
        let entries = ids
            .iter()
            .zip(orders)
            .map(|(&id, &sort_order)| SiblingEntry { id, sort_order })
            .collect();
        (SiblingGroup::new(entries), ids)
    }

    fn ids_in_order(group: &SiblingGroup) -> Vec<FolderId> {
        group.entries().iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_next_sort_order_empty_group() {
        let (group, _) = group(&[]);
        assert_eq!(group.next_sort_order(), 0);
    }

    #[test]
    fn test_next_sort_order_appends_after_max() {
        let (group, _) = group(&[0, 1, 2]);
        assert_eq!(group.next_sort_order(), 3);
    }

    #[test]
    fn test_next_sort_order_does_not_reuse_freed_slot() {
        // Gap at 1 after a deletion: creation still appends at max + 1.
        let (group, _) = group(&[0, 2, 3]);
        assert_eq!(group.next_sort_order(), 4);
    }

    #[test]
    fn test_sequential_appends_claim_distinct_positions() {
        // Two creates under one parent serialize on the parent lock; each
        // re-reads the group, so the second sees the first's append.
        let (mut group, _) = group(&[0, 1, 2]);

        let first = group.next_sort_order();
        group.entries.push(SiblingEntry {
            id: FolderId::new(),
            sort_order: first,
        });
        let second = group.next_sort_order();

        assert_eq!(first, 3);
        assert_eq!(second, 4);
    }

    #[test]
    fn test_reorder_same_position_is_noop() {
        let (mut group, ids) = group(&[0, 1, 2]);
        let before: Vec<_> = group.entries().to_vec();
        let changed = group.reorder(ids[1], 1);
        assert!(changed.is_empty());
        assert_eq!(group.entries(), &before[..]);
    }

    #[test]
    fn test_reorder_forward_shifts_range_back() {
        let (mut group, ids) = group(&[0, 1, 2, 3]);
        let changed = group.reorder(ids[0], 2);

        assert_eq!(group.sort_order_of(ids[0]), Some(2));
        assert_eq!(group.sort_order_of(ids[1]), Some(0));
        assert_eq!(group.sort_order_of(ids[2]), Some(1));
        assert_eq!(group.sort_order_of(ids[3]), Some(3));
        // Moved child plus the two shifted siblings.
        assert_eq!(changed.len(), 3);
        assert!(group.is_dense());
    }

    #[test]
    fn test_reorder_backward_shifts_range_up() {
        let (mut group, ids) = group(&[0, 1, 2, 3]);
        let changed = group.reorder(ids[3], 1);

        assert_eq!(group.sort_order_of(ids[3]), Some(1));
        assert_eq!(group.sort_order_of(ids[0]), Some(0));
        assert_eq!(group.sort_order_of(ids[1]), Some(2));
        assert_eq!(group.sort_order_of(ids[2]), Some(3));
        assert_eq!(changed.len(), 3);
        assert!(group.is_dense());
    }

    #[test]
    fn test_reorder_round_trip_restores_order() {
        let (mut group, ids) = group(&[0, 1, 2, 3]);
        let original = ids_in_order(&group);

        group.reorder(ids[2], 0);
        group.reorder(ids[2], 2);

        assert_eq!(ids_in_order(&group), original);
        assert!(group.is_dense());
    }

    #[test]
    fn test_reorder_clamps_target_above_group_size() {
        let (mut group, ids) = group(&[0, 1, 2]);
        group.reorder(ids[0], 99);

        assert_eq!(group.sort_order_of(ids[0]), Some(2));
        assert!(group.is_dense());
    }

    #[test]
    fn test_reorder_clamps_negative_target() {
        let (mut group, ids) = group(&[0, 1, 2]);
        group.reorder(ids[2], -5);

        assert_eq!(group.sort_order_of(ids[2]), Some(0));
        assert!(group.is_dense());
    }

    #[test]
    fn test_reorder_unknown_child_changes_nothing() {
        let (mut group, _) = group(&[0, 1, 2]);
        let changed = group.reorder(FolderId::new(), 1);
        assert!(changed.is_empty());
        assert!(group.is_dense());
    }

    #[test]
    fn test_normalize_closes_gap_after_deletion() {
        let (mut group, ids) = group(&[0, 1, 3, 4]);
        let changed = group.normalize();

        assert!(group.is_dense());
        assert_eq!(ids_in_order(&group), ids);
        // Only the two entries past the gap were rewritten.
        assert_eq!(changed.len(), 2);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let (mut group, _) = group(&[0, 1, 3, 7]);
        group.normalize();
        let second = group.normalize();
        assert!(second.is_empty());
        assert!(group.is_dense());
    }

    #[test]
    fn test_density_after_mixed_operation_sequence() {
        let (mut group, ids) = group(&[0, 1, 2, 3, 4]);

        group.reorder(ids[4], 0);
        group.reorder(ids[1], 3);
        group.reorder(ids[0], 4);
        group.normalize();
        group.reorder(ids[2], 2);

        let mut orders: Vec<i32> = group.entries().iter().map(|e| e.sort_order).collect();
        orders.sort_unstable();
        assert_eq!(orders, vec![0, 1, 2, 3, 4]);
        assert!(group.is_dense());
    }
}
