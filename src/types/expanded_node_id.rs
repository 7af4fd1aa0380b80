// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! `ExpandedNodeId`, grounded on `opcua_types::expanded_node_id::ExpandedNodeId::try_resolve`.

use super::{NamespaceTable, NodeId};

/// A `NodeId` that allows the namespace to be specified by uri, or that references a node on a
/// foreign server entirely.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExpandedNodeId {
    /// The local node id. Its `namespace` field is meaningless if `namespace_uri` is set.
    pub node_id: NodeId,
    /// The full namespace uri, if this id was not expressed with a local index.
    pub namespace_uri: Option<String>,
    /// The server this id is hosted on. 0 means the current server.
    pub server_index: u32,
}

impl ExpandedNodeId {
    /// Build an expanded id for a node on the current server, addressed by namespace index.
    pub fn local(node_id: NodeId) -> Self {
        Self {
            node_id,
            namespace_uri: None,
            server_index: 0,
        }
    }

    /// Build an expanded id for a node on the current server, addressed by namespace uri.
    pub fn with_uri(identifier: super::Identifier, namespace_uri: impl Into<String>) -> Self {
        Self {
            node_id: NodeId::new(0, identifier),
            namespace_uri: Some(namespace_uri.into()),
            server_index: 0,
        }
    }

    /// Whether this id addresses the current server.
    pub fn is_local_server(&self) -> bool {
        self.server_index == 0
    }

    /// Resolve this id to a local `NodeId` against the given namespace table, without mutating
    /// it. Returns `None` if the id is hosted on a foreign server, or its namespace uri isn't yet
    /// known locally.
    pub fn local(&self, namespaces: &NamespaceTable) -> Option<NodeId> {
        if !self.is_local_server() {
            return None;
        }
        match &self.namespace_uri {
            Some(uri) => {
                let index = namespaces.index(uri)?;
                Some(NodeId::new(index, self.node_id.identifier.clone()))
            }
            None => Some(self.node_id.clone()),
        }
    }
}

impl From<NodeId> for ExpandedNodeId {
    fn from(node_id: NodeId) -> Self {
        Self::local(node_id)
    }
}
