//! Data model for the scheduling decision engine.
//!
//! These types are plain records derived fresh from a `Snapshot` on every
//! call to [`crate::decide`]; nothing here is mutated in place or retained
//! between invocations.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Priority is a 32-bit signed integer, default 0 when unspecified.
pub type Priority = i32;

/// A worker machine. Nodes carry no attributes relevant to the core beyond
/// their name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Phase of a pod. Only `Pending` and `Running` (with a bound node) are
/// meaningful to the core; `Other` contributes no occupancy and joins no
/// group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Pending,
    Running,
    Other,
}

/// A pending or running workload unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pod {
    pub name: String,
    #[serde(default)]
    pub scheduler_name: String,
    #[serde(default)]
    pub node_name: Option<String>,
    pub phase: Phase,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

impl Pod {
    /// A pending pod owned by `scheduler_name`, otherwise defaulted.
    pub fn new(name: impl Into<String>, scheduler_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scheduler_name: scheduler_name.into(),
            node_name: None,
            phase: Phase::Pending,
            priority: 0,
            annotations: HashMap::new(),
        }
    }

    pub fn running_on(mut self, node_name: impl Into<String>) -> Self {
        self.node_name = Some(node_name.into());
        self.phase = Phase::Running;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }

    /// Running with a bound node name — the only form of occupancy the core
    /// recognizes. A `Running` pod with no `node_name` is a semantic
    /// inconsistency and is treated as occupying nothing.
    pub fn is_running_bound(&self) -> bool {
        self.phase == Phase::Running && self.node_name.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Pending
    }
}

/// An immutable record of the cluster's relevant state at one instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub nodes: Vec<Node>,
    pub pods: Vec<Pod>,
    pub namespace: String,
    pub timestamp: DateTime<Utc>,
}

/// A set of pods sharing a group key, with aggregates derived at
/// construction time (never recomputed afterward).
#[derive(Debug, Clone)]
pub struct PodGroup {
    pub key: String,
    pub running_pods: Vec<Pod>,
    pub pending_pods: Vec<Pod>,
    pub max_priority: Priority,
    pub min_available: i64,
}

impl PodGroup {
    pub fn num_pending(&self) -> usize {
        self.pending_pods.len()
    }
}

/// Priority of whatever currently occupies a node slot. `Free` sorts below
/// every `Occupied` priority because it is declared first — the derived
/// `Ord` compares variants before payloads, so there is no sentinel value to
/// get wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SlotPriority {
    Free,
    Occupied(Priority),
}

/// A node considered as a placement candidate, annotated with the priority
/// of its current occupant (or [`SlotPriority::Free`]).
#[derive(Debug, Clone)]
pub struct NodeSlot {
    pub node: Node,
    pub occupant_priority: SlotPriority,
}

/// One pending pod assigned to one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub pod_name: String,
    pub node_name: String,
}

/// The result of a scheduling decision: evictions strictly precede bindings
/// in any side-effecting order a caller imposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actions {
    pub evictions: Vec<String>,
    pub bindings: Vec<Binding>,
}
