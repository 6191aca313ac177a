//! Stage 1 — select the pods this scheduler instance is responsible for.

use crate::model::Pod;

/// The subset of `pods` claimed by `scheduler_name`. No error conditions;
/// missing fields are treated as absent. No side effects.
pub fn filter_pods(scheduler_name: &str, pods: &[Pod]) -> Vec<Pod> {
    let claimed: Vec<Pod> = pods
        .iter()
        .filter(|pod| pod.scheduler_name == scheduler_name)
        .cloned()
        .collect();
    log::trace!(
        "filter: {} of {} pods claimed by scheduler {:?}",
        claimed.len(),
        pods.len(),
        scheduler_name
    );
    claimed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Pod;

    #[test]
    fn keeps_only_pods_owned_by_this_scheduler() {
        let pods = vec![
            Pod::new("a", "ours"),
            Pod::new("b", "theirs"),
            Pod::new("c", ""),
            Pod::new("d", "ours"),
        ];
        let kept = filter_pods("ours", &pods);
        let names: Vec<_> = kept.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "d"]);
    }

    #[test]
    fn empty_scheduler_name_matches_pods_with_empty_scheduler_name() {
        let pods = vec![Pod::new("a", ""), Pod::new("b", "x")];
        let kept = filter_pods("", &pods);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "a");
    }
}
