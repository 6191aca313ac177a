//! Compatibility-critical annotation keys and their parsing rules.
//!
//! Parse failures here are never surfaced as errors — they recover locally
//! to the documented defaults, per `spec.md` §7.

use crate::model::Pod;

/// Opaque group identifier.
pub const GROUP_NAME_ANNOTATION: &str = "custom-scheduling.k8s.io/group-name";

/// Signed decimal integer; parse failure defaults to 1.
pub const MIN_AVAILABLE_ANNOTATION: &str = "custom-scheduling.k8s.io/min-available";

/// The pod's group key: the group-name annotation if present and
/// non-empty, otherwise the pod's own name (an ungrouped pod is its own
/// singleton group).
pub fn group_key(pod: &Pod) -> &str {
    match pod.annotations.get(GROUP_NAME_ANNOTATION) {
        Some(name) if !name.is_empty() => name.as_str(),
        _ => pod.name.as_str(),
    }
}

/// `min-available` contribution of a single pending pod: the parsed
/// annotation value, or 1 on absence or malformed input. Negative and zero
/// values are permitted — they contribute to a group being considered
/// already satisfied.
pub fn min_available(pod: &Pod) -> i64 {
    pod.annotations
        .get(MIN_AVAILABLE_ANNOTATION)
        .and_then(|raw| raw.parse::<i64>().ok())
        .unwrap_or(1)
}
