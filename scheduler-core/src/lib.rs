//! Priority-aware gang scheduling decision engine.
//!
//! [`decide`] is the one operation this crate exposes: a pure, synchronous
//! transformation from a snapshot of cluster state to a set of placement and
//! eviction actions. It holds no state across calls and performs no I/O;
//! everything it needs is in its arguments, and everything it produces is in
//! its return value.

pub mod admission;
pub mod annotations;
pub mod filter;
pub mod group_order;
pub mod grouping;
pub mod model;
pub mod node_priority;

use std::collections::HashMap;

pub use model::{Actions, Binding, Node, NodeSlot, Phase, Pod, PodGroup, Priority, Snapshot, SlotPriority};

/// Decide which pending pods to bind, and which running pods to evict to
/// make room for them, for the pods owned by `scheduler_name` in `snapshot`.
///
/// Reentrant and side-effect free: two calls on the same `snapshot` produce
/// identical `Actions`, and two concurrent calls on disjoint snapshots never
/// interfere with each other.
pub fn decide(scheduler_name: &str, snapshot: &Snapshot, preempt_enabled: bool) -> Actions {
    let claimed = filter::filter_pods(scheduler_name, &snapshot.pods);

    let node_to_running_pod: HashMap<String, String> = claimed
        .iter()
        .filter(|pod| pod.is_running_bound())
        .map(|pod| (pod.node_name.clone().unwrap(), pod.name.clone()))
        .collect();

    let groups = grouping::group_pods(&claimed);
    let slots = node_priority::node_slots(&snapshot.nodes, &groups);
    let ordered_groups = group_order::order_groups(&groups);

    let actions = admission::admit_and_place(&ordered_groups, &slots, &node_to_running_pod, preempt_enabled);

    log::debug!(
        "decide: scheduler={:?} namespace={:?} preempt={} -> {} binding(s), {} eviction(s)",
        scheduler_name,
        snapshot.namespace,
        preempt_enabled,
        actions.bindings.len(),
        actions.evictions.len(),
    );

    actions
}
