//! Stage 5 — the core algorithm: walk ordered groups against ordered slots,
//! admitting a group (possibly by preemption) or skipping it entirely.

use std::collections::HashMap;

use crate::model::{Actions, Binding, NodeSlot, PodGroup, SlotPriority};

/// Whether `priority` can take a slot occupied at `occupant`, given whether
/// preemption is enabled for this cycle.
fn affordable(occupant: SlotPriority, priority: i32, preempt_enabled: bool) -> bool {
    match occupant {
        SlotPriority::Free => true,
        SlotPriority::Occupied(existing) => preempt_enabled && priority > existing,
    }
}

/// Run admission and placement for `ordered_groups` against `slots`.
///
/// `node_to_running_pod` maps a node name to the name of the scheduler's own
/// `Running` pod occupying it, used only to pick an eviction target when a
/// slot is taken; it is fixed for the whole cycle, computed once from the
/// filtered pod set before any eviction in this cycle is decided.
pub fn admit_and_place(
    ordered_groups: &[&PodGroup],
    slots: &[NodeSlot],
    node_to_running_pod: &HashMap<String, String>,
    preempt_enabled: bool,
) -> Actions {
    let mut next = 0usize;
    let mut bindings = Vec::new();
    let mut evictions = Vec::new();

    for group in ordered_groups {
        let need = (group.min_available - group.running_pods.len() as i64).max(0) as usize;
        if need == 0 {
            log::trace!("admission: group {:?} already satisfied, skipping", group.key);
            continue;
        }

        if next + need > slots.len() {
            log::trace!(
                "admission: group {:?} needs {} slots but only {} remain",
                group.key,
                need,
                slots.len() - next.min(slots.len())
            );
            continue;
        }

        let last = &slots[next + need - 1];
        if !affordable(last.occupant_priority, group.max_priority, preempt_enabled) {
            log::trace!(
                "admission: group {:?} cannot afford its {}-th required slot",
                group.key,
                need
            );
            continue;
        }

        let attemptable = group.pending_pods.len().min(slots.len() - next);
        let mut placed = 0usize;
        for pending_pod in group.pending_pods.iter().take(attemptable) {
            let slot = &slots[next + placed];
            if !affordable(slot.occupant_priority, group.max_priority, preempt_enabled) {
                break;
            }

            bindings.push(Binding {
                pod_name: pending_pod.name.clone(),
                node_name: slot.node.name.clone(),
            });

            if slot.occupant_priority != SlotPriority::Free {
                if let Some(victim) = node_to_running_pod.get(&slot.node.name) {
                    evictions.push(victim.clone());
                }
            }

            placed += 1;
        }

        log::trace!("admission: group {:?} placed {} pod(s)", group.key, placed);
        next += placed;
    }

    Actions { evictions, bindings }
}
