// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The bounded, write-time-expiring node cache.
//!
//! Implemented with `moka::future::Cache`, which already gives the "bounded, write-time-
//! expiring, approximately-LRU, concurrent" contract directly.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::node::UaNode;
use crate::types::NodeId;

/// Construction-time cache bounds. There is no setter API: bounds are fixed for the resolver's
/// lifetime, matching `moka`'s own build-once cache configuration.
#[derive(Debug, Clone, Copy)]
pub struct CacheOptions {
    /// How long an entry survives after being written, before it's treated as a miss.
    pub time_to_live: Duration,
    /// The maximum number of entries held at once.
    pub maximum_size: u64,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            time_to_live: Duration::from_secs(120),
            maximum_size: 1024,
        }
    }
}

/// A bounded, time-expiring mapping from node identifier to resolved node.
#[derive(Clone)]
pub struct NodeCache {
    inner: MokaCache<NodeId, Arc<UaNode>>,
}

impl NodeCache {
    /// Build a new cache with the given bounds.
    pub fn new(options: CacheOptions) -> Self {
        Self {
            inner: MokaCache::builder()
                .time_to_live(options.time_to_live)
                .max_capacity(options.maximum_size)
                .build(),
        }
    }

    /// Look up a cached record by id.
    pub async fn get(&self, id: &NodeId) -> Option<Arc<UaNode>> {
        self.inner.get(id).await
    }

    /// Publish a record under its own id. Concurrent publications of the same id are not
    /// serialized against each other; the later write wins, which is acceptable since
    /// records are immutable and value-equal for the same server state.
    pub async fn put(&self, id: NodeId, node: Arc<UaNode>) {
        self.inner.insert(id, node).await;
    }

    /// The number of entries currently tracked. Approximate: `moka` batches internal
    /// housekeeping, so this may lag slightly behind the true live count.
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}

impl Default for NodeCache {
    fn default() -> Self {
        Self::new(CacheOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{BaseAttributes, ObjectNode};
    use crate::types::{LocalizedText, QualifiedName};

    fn sample(id: NodeId) -> Arc<UaNode> {
        Arc::new(UaNode::Object(Box::new(ObjectNode::new(
            BaseAttributes {
                node_id: id,
                browse_name: QualifiedName::new(0, "Test"),
                display_name: LocalizedText::from("Test"),
                description: LocalizedText::default(),
                write_mask: 0,
                user_write_mask: 0,
            },
            0,
        ))))
    }

    #[tokio::test]
    async fn miss_then_hit() {
        let cache = NodeCache::default();
        let id = NodeId::new(0, 85u32);
        assert!(cache.get(&id).await.is_none());
        cache.put(id.clone(), sample(id.clone())).await;
        assert!(cache.get(&id).await.is_some());
    }

    #[tokio::test]
    async fn expires_after_ttl() {
        let cache = NodeCache::new(CacheOptions {
            time_to_live: Duration::from_millis(50),
            maximum_size: 1024,
        });
        let id = NodeId::new(0, 85u32);
        cache.put(id.clone(), sample(id.clone())).await;
        assert!(cache.get(&id).await.is_some());
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(cache.get(&id).await.is_none());
    }
}
