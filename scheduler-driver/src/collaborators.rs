//! Collaborator traits the cycle loop drives: a source of cluster state and a
//! sink for the resulting binds and evictions. Real implementations talk to a
//! cluster API; [`crate::demo`] provides a JSON-file-backed stand-in, and
//! tests provide in-memory fakes.

use anyhow::Result;
use async_trait::async_trait;
use gang_scheduler_core::Snapshot;

#[async_trait]
pub trait StateSource: Send + Sync {
    async fn get_snapshot(&self, namespace: &str) -> Result<Snapshot>;
}

#[async_trait]
pub trait CommandSink: Send + Sync {
    async fn bind(&self, namespace: &str, pod: &str, node: &str) -> Result<()>;
    async fn evict(&self, namespace: &str, pod: &str) -> Result<()>;
}
