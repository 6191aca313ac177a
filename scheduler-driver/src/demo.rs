//! A JSON-file-backed [`StateSource`]/[`CommandSink`] pair.
//!
//! This stands in for a real cluster-API client the same way `with_xline`
//! stands in for the reference scheduler's etcd-backed cluster state, minus
//! the real transport: talking to an actual cluster is explicitly out of
//! scope for this repository (`spec.md` §1). It reads a [`Snapshot`] written
//! to a file as JSON and logs the binds/evictions it is asked to perform
//! rather than sending them anywhere.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use gang_scheduler_core::Snapshot;
use log::info;

use crate::collaborators::{CommandSink, StateSource};

/// Reads a [`Snapshot`] from a fixed path on every cycle and reports
/// commands by logging them.
pub struct JsonFileCollaborator {
    path: PathBuf,
}

impl JsonFileCollaborator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_snapshot(path: &Path) -> Result<Snapshot> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading snapshot file {}", path.display()))?;
        let snapshot: Snapshot = serde_json::from_str(&raw)
            .with_context(|| format!("parsing snapshot JSON from {}", path.display()))?;
        Ok(snapshot)
    }
}

#[async_trait]
impl StateSource for JsonFileCollaborator {
    async fn get_snapshot(&self, namespace: &str) -> Result<Snapshot> {
        let snapshot = Self::read_snapshot(&self.path)?;
        if snapshot.namespace != namespace {
            info!(
                "demo state source: snapshot namespace {:?} does not match requested {:?}; using it anyway",
                snapshot.namespace, namespace
            );
        }
        Ok(snapshot)
    }
}

#[async_trait]
impl CommandSink for JsonFileCollaborator {
    async fn bind(&self, namespace: &str, pod: &str, node: &str) -> Result<()> {
        info!("demo command sink: bind namespace={namespace} pod={pod} node={node}");
        Ok(())
    }

    async fn evict(&self, namespace: &str, pod: &str) -> Result<()> {
        info!("demo command sink: evict namespace={namespace} pod={pod}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use gang_scheduler_core::model::{Node, Pod};
    use std::io::Write;

    #[tokio::test]
    async fn reads_snapshot_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let snapshot = Snapshot {
            nodes: vec![Node::new("node-a")],
            pods: vec![Pod::new("pod-1", "demo-scheduler")],
            namespace: "demo".to_string(),
            timestamp: Utc::now(),
        };
        write!(file, "{}", serde_json::to_string(&snapshot).unwrap()).unwrap();

        let source = JsonFileCollaborator::new(file.path());
        let loaded = source.get_snapshot("demo").await.unwrap();
        assert_eq!(loaded.nodes.len(), 1);
        assert_eq!(loaded.pods.len(), 1);
    }

    #[tokio::test]
    async fn bind_and_evict_never_fail() {
        let sink = JsonFileCollaborator::new("/nonexistent/path/does-not-matter.json");
        sink.bind("demo", "pod-1", "node-a").await.unwrap();
        sink.evict("demo", "pod-1").await.unwrap();
    }
}
