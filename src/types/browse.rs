// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Wire-shaped request/result types for the `Browse` service, grounded on the request shape
//! built by `async_opcua_client::session::services::view::Browse` — the request fields it
//! populates (`nodes_to_browse`, each a `BrowseDescription`) — but narrowed to a single
//! description per call, since the core never needs to batch browses of unrelated starting
//! nodes in one request.

use super::{ExpandedNodeId, LocalizedText, NodeClass, NodeId, QualifiedName};

/// Which direction along a reference to browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseDirection {
    /// Follow only forward references.
    Forward,
    /// Follow only inverse references.
    Inverse,
    /// Follow both.
    Both,
}

/// What a `Read` targets: a node and one of its attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadValueId {
    /// The node to read from.
    pub node_id: NodeId,
    /// The attribute to read.
    pub attribute_id: u32,
}

impl ReadValueId {
    /// Build a read target for the given node and attribute.
    pub fn new(node_id: NodeId, attribute_id: impl Into<u32>) -> Self {
        Self {
            node_id,
            attribute_id: attribute_id.into(),
        }
    }
}

/// Which timestamps a `Read` should return alongside each value.
///
/// The resolver always requests `Neither`: it never stores source/server timestamps, so
/// asking the server to compute them would be wasted work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampsToReturn {
    /// No timestamps.
    Neither,
    /// Source timestamp only.
    Source,
    /// Server timestamp only.
    Server,
    /// Both.
    Both,
}

/// A single `Browse` request description: where to start, and how to filter the references
/// returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseDescription {
    /// The node to browse from.
    pub node_id: NodeId,
    /// Which direction to follow.
    pub browse_direction: BrowseDirection,
    /// Restrict to references of this type (and, if `include_subtypes`, its subtypes).
    pub reference_type_id: NodeId,
    /// Whether subtypes of `reference_type_id` also match.
    pub include_subtypes: bool,
    /// Bitmask of `NodeClass` values the target must belong to.
    pub node_class_mask: u32,
}

/// A single row of a `Browse` result: one reference from the browsed node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDescription {
    /// The type of reference followed to reach this node.
    pub reference_type_id: NodeId,
    /// Whether the reference was followed in the forward direction.
    pub is_forward: bool,
    /// The node at the other end of the reference.
    pub node_id: ExpandedNodeId,
    /// The target's browse name.
    pub browse_name: QualifiedName,
    /// The target's display name.
    pub display_name: LocalizedText,
    /// The target's node class.
    pub node_class: NodeClass,
    /// The target's type definition, if it has one (Object/Variable only; `NULL` otherwise).
    pub type_definition: ExpandedNodeId,
}
