//! Stage 2 — fold filtered pods into [`PodGroup`]s.

use std::collections::HashMap;

use crate::annotations::{group_key, min_available};
use crate::model::{Pod, PodGroup};

/// Partition `pods` into groups keyed by [`crate::annotations::group_key`].
///
/// Only `Pending` pods and `Running`-with-a-node pods contribute to a group;
/// a pod in any other phase is dropped here rather than creating a group
/// whose `running_pods`/`pending_pods` are both empty (see SPEC_FULL.md §3).
/// Partitioning is total and disjoint over the pods that do contribute.
pub fn group_pods(pods: &[Pod]) -> HashMap<String, PodGroup> {
    let mut running: HashMap<String, Vec<Pod>> = HashMap::new();
    let mut pending: HashMap<String, Vec<Pod>> = HashMap::new();

    for pod in pods {
        if pod.is_pending() {
            pending
                .entry(group_key(pod).to_string())
                .or_default()
                .push(pod.clone());
        } else if pod.is_running_bound() {
            running
                .entry(group_key(pod).to_string())
                .or_default()
                .push(pod.clone());
        }
    }

    let mut keys: Vec<String> = running.keys().chain(pending.keys()).cloned().collect();
    keys.sort();
    keys.dedup();

    let mut groups = HashMap::with_capacity(keys.len());
    for key in keys {
        let running_pods = running.remove(&key).unwrap_or_default();
        let pending_pods = pending.remove(&key).unwrap_or_default();

        let max_priority = running_pods
            .iter()
            .chain(pending_pods.iter())
            .map(|p| p.priority)
            .max()
            .expect("a group is only created when it has at least one member pod");

        let min_avail = if pending_pods.is_empty() {
            1
        } else {
            pending_pods.iter().map(min_available).max().unwrap()
        };

        groups.insert(
            key.clone(),
            PodGroup {
                key,
                running_pods,
                pending_pods,
                max_priority,
                min_available: min_avail,
            },
        );
    }

    log::trace!("grouping: folded {} pods into {} groups", pods.len(), groups.len());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::{GROUP_NAME_ANNOTATION, MIN_AVAILABLE_ANNOTATION};
    use crate::model::Pod;

    #[test]
    fn ungrouped_pending_pod_is_its_own_singleton_group() {
        let pods = vec![Pod::new("pod1", "s")];
        let groups = group_pods(&pods);
        assert_eq!(groups.len(), 1);
        let g = &groups["pod1"];
        assert_eq!(g.pending_pods.len(), 1);
        assert_eq!(g.min_available, 1);
    }

    #[test]
    fn grouped_pods_aggregate_priority_and_min_available() {
        let pods = vec![
            Pod::new("p1", "s")
                .with_priority(5)
                .with_annotation(GROUP_NAME_ANNOTATION, "g")
                .with_annotation(MIN_AVAILABLE_ANNOTATION, "2"),
            Pod::new("p2", "s")
                .with_priority(9)
                .with_annotation(GROUP_NAME_ANNOTATION, "g")
                .with_annotation(MIN_AVAILABLE_ANNOTATION, "4"),
        ];
        let groups = group_pods(&pods);
        let g = &groups["g"];
        assert_eq!(g.pending_pods.len(), 2);
        assert_eq!(g.max_priority, 9);
        assert_eq!(g.min_available, 4);
    }

    #[test]
    fn other_phase_pod_joins_no_group() {
        let mut other = Pod::new("stale", "s");
        other.phase = crate::model::Phase::Other;
        let groups = group_pods(&[other]);
        assert!(groups.is_empty());
    }

    #[test]
    fn running_without_node_name_is_ignored() {
        let mut ghost = Pod::new("ghost", "s");
        ghost.phase = crate::model::Phase::Running;
        let groups = group_pods(&[ghost]);
        assert!(groups.is_empty());
    }

    #[test]
    fn group_with_no_pending_pods_defaults_min_available_to_one() {
        let pods = vec![Pod::new("p1", "s").with_priority(3).running_on("node-a")];
        let groups = group_pods(&pods);
        let g = &groups["p1"];
        assert_eq!(g.min_available, 1);
        assert!(g.pending_pods.is_empty());
    }
}
