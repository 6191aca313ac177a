//! Stage 4 — total-order the groups with pending work for admission attempts.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::model::PodGroup;

/// Groups with at least one pending pod, ordered by
/// `(-maxPriority, -numPending, groupName)`: highest priority first, larger
/// pending groups first within a priority tier, then lexicographic by name.
///
/// `Reverse` is used instead of negating `max_priority`/`num_pending` so the
/// ordering cannot overflow at `i32::MIN`.
pub fn order_groups(groups: &HashMap<String, PodGroup>) -> Vec<&PodGroup> {
    let mut ordered: Vec<&PodGroup> = groups.values().filter(|g| !g.pending_pods.is_empty()).collect();
    ordered.sort_by_key(|g| (Reverse(g.max_priority), Reverse(g.num_pending()), g.key.clone()));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::group_pods;
    use crate::model::Pod;

    #[test]
    fn orders_by_priority_then_size_then_name() {
        let pods = vec![
            Pod::new("low-a", "s").with_priority(1),
            Pod::new("low-b", "s").with_priority(1),
            Pod::new("high", "s").with_priority(9),
        ];
        let groups = group_pods(&pods);
        let ordered = order_groups(&groups);
        let keys: Vec<_> = ordered.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["high", "low-a", "low-b"]);
    }

    #[test]
    fn groups_with_no_pending_pods_are_excluded() {
        let pods = vec![Pod::new("done", "s").with_priority(1).running_on("node-a")];
        let groups = group_pods(&pods);
        assert!(order_groups(&groups).is_empty());
    }
}
