//! The cycle loop: acquire a snapshot, call the decision engine, apply its
//! actions, sleep. `spec.md` §5 requires evictions to be submitted strictly
//! before any binding in the same cycle, and cycles never overlap.

use std::sync::Arc;

use gang_scheduler_core::decide;
use log::{debug, error, warn};

use crate::collaborators::{CommandSink, StateSource};
use crate::config::DriverConfig;

/// Run one scheduling cycle: fetch a snapshot, decide, and apply the result.
///
/// A `get_snapshot` failure aborts just this cycle (`spec.md` §7); the next
/// cycle observes the cluster's real post-state and retries. `bind`/`evict`
/// failures are logged and do not stop the remaining actions from being
/// attempted — the same reconciliation-over-retry policy.
pub async fn run_cycle(
    config: &DriverConfig,
    source: &dyn StateSource,
    sink: &dyn CommandSink,
) -> usize {
    let snapshot = match source.get_snapshot(&config.namespace).await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            error!("cycle: failed to fetch snapshot: {err:?}");
            return 0;
        }
    };

    let actions = decide(&config.scheduler_name, &snapshot, config.preempt_enabled);
    debug!(
        "cycle: {} eviction(s), {} binding(s)",
        actions.evictions.len(),
        actions.bindings.len()
    );

    for pod in &actions.evictions {
        if let Err(err) = sink.evict(&config.namespace, pod).await {
            warn!("cycle: evict {pod} failed: {err:?}");
        }
    }

    for binding in &actions.bindings {
        if let Err(err) = sink
            .bind(&config.namespace, &binding.pod_name, &binding.node_name)
            .await
        {
            warn!(
                "cycle: bind {} -> {} failed: {err:?}",
                binding.pod_name, binding.node_name
            );
        }
    }

    actions.evictions.len() + actions.bindings.len()
}

/// Run cycles on a fixed interval until `SIGINT`, or once if `once` is set.
///
/// Cycles are strictly serial: the loop awaits one cycle's completion before
/// sleeping and starting the next, so there is never cluster-state overlap
/// between invocations of [`decide`].
pub async fn run_loop(
    config: DriverConfig,
    source: Arc<dyn StateSource>,
    sink: Arc<dyn CommandSink>,
    once: bool,
) {
    debug!(
        "{} launching in namespace {}...",
        config.scheduler_name, config.namespace
    );

    if once {
        run_cycle(&config, source.as_ref(), sink.as_ref()).await;
        return;
    }

    let mut ticker = tokio::time::interval(config.cycle_interval);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                run_cycle(&config, source.as_ref(), sink.as_ref()).await;
            }
            _ = tokio::signal::ctrl_c() => {
                debug!(
                    "{} shutting down in {}...",
                    config.scheduler_name, config.namespace
                );
                break;
            }
        }
    }
}
