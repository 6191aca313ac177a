//! Stage 3 — attach each node the priority of its current occupant.

use std::collections::HashMap;

use crate::model::{Node, NodeSlot, PodGroup, SlotPriority};

/// Build the ordered candidate slot list: ascending by `(occupant_priority,
/// node_name)`. Nodes running pods of *other* schedulers still appear with
/// `Free` priority — their occupancy is outside this scheduler's authority
/// (faithful to the source scheduler this spec distills; see `spec.md` §9
/// Open Question 1).
pub fn node_slots(nodes: &[Node], groups: &HashMap<String, PodGroup>) -> Vec<NodeSlot> {
    let mut node_priority: HashMap<&str, SlotPriority> = HashMap::new();
    for group in groups.values() {
        for pod in &group.running_pods {
            if let Some(node_name) = &pod.node_name {
                node_priority.insert(node_name.as_str(), SlotPriority::Occupied(group.max_priority));
            }
        }
    }

    let mut slots: Vec<NodeSlot> = nodes
        .iter()
        .map(|node| NodeSlot {
            node: node.clone(),
            occupant_priority: node_priority
                .get(node.name.as_str())
                .copied()
                .unwrap_or(SlotPriority::Free),
        })
        .collect();

    slots.sort_by(|a, b| {
        a.occupant_priority
            .cmp(&b.occupant_priority)
            .then_with(|| a.node.name.cmp(&b.node.name))
    });

    log::trace!(
        "node_priority: {} slots, {} occupied",
        slots.len(),
        slots
            .iter()
            .filter(|s| s.occupant_priority != SlotPriority::Free)
            .count()
    );
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::group_pods;
    use crate::model::{Node, Pod};

    #[test]
    fn free_nodes_sort_before_occupied_and_ties_break_on_name() {
        let nodes = vec![Node::new("node-z"), Node::new("node-a"), Node::new("node-b")];
        let pods = vec![Pod::new("occ", "s").with_priority(5).running_on("node-b")];
        let groups = group_pods(&pods);
        let slots = node_slots(&nodes, &groups);
        let names: Vec<_> = slots.iter().map(|s| s.node.name.as_str()).collect();
        assert_eq!(names, vec!["node-a", "node-z", "node-b"]);
        assert_eq!(slots[2].occupant_priority, SlotPriority::Occupied(5));
    }

    #[test]
    fn occupied_slots_sort_ascending_by_priority() {
        let nodes = vec![Node::new("high"), Node::new("low")];
        let pods = vec![
            Pod::new("a", "s").with_priority(100).running_on("high"),
            Pod::new("b", "s").with_priority(1).running_on("low"),
        ];
        let groups = group_pods(&pods);
        let slots = node_slots(&nodes, &groups);
        let names: Vec<_> = slots.iter().map(|s| s.node.name.as_str()).collect();
        assert_eq!(names, vec!["low", "high"]);
    }
}
