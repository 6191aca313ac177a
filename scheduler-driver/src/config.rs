//! Environment-derived configuration for the cycle loop.
//!
//! `rks` loads its config from a YAML file (see `protocol::config` in the
//! reference scheduler driver); this driver has no cluster-wide config file
//! to share, so its few knobs are read straight from the environment instead,
//! the way the distilled Python driver this crate replaces does.

use std::env;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub scheduler_name: String,
    pub namespace: String,
    pub cycle_interval: Duration,
    pub preempt_enabled: bool,
}

impl DriverConfig {
    /// Reads `SCHEDULER_NAME`, `POD_NAMESPACE`, `SCHEDULER_CYCLE_SECONDS`, and
    /// `SCHEDULER_PREEMPT` from the process environment, falling back to
    /// their documented defaults on absence or malformed values.
    pub fn from_env() -> Self {
        let scheduler_name = env::var("SCHEDULER_NAME").unwrap_or_else(|_| "unknown".to_string());
        let namespace = env::var("POD_NAMESPACE").unwrap_or_else(|_| "unknown".to_string());
        let cycle_seconds = env::var("SCHEDULER_CYCLE_SECONDS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(5);
        let preempt_enabled = env::var("SCHEDULER_PREEMPT")
            .ok()
            .and_then(|raw| raw.parse::<bool>().ok())
            .unwrap_or(true);

        Self {
            scheduler_name,
            namespace,
            cycle_interval: Duration::from_secs(cycle_seconds),
            preempt_enabled,
        }
    }
}
