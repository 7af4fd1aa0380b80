// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The eight node-class variant records, and the `NodeBase` trait shared by all of them.
//!
//! Grounded on `opcua_nodes::node::{NodeType, NodeBase, Node}`: kept the sum-type-over-variants
//! shape and the `NodeBase` accessor trait, dropped the mutable setters and
//! `get_attribute`/`set_attribute` dispatch a server-side address space needs (these records are
//! read-only snapshots published once to the cache, never mutated in place).

mod data_type;
mod method;
mod object;
mod object_type;
mod reference_type;
mod variable;
mod variable_type;
mod view;

pub use data_type::DataTypeNode;
pub use method::MethodNode;
pub use object::ObjectNode;
pub use object_type::ObjectTypeNode;
pub use reference_type::ReferenceTypeNode;
pub use variable::VariableNode;
pub use variable_type::VariableTypeNode;
pub use view::ViewNode;

use crate::types::{LocalizedText, NodeClass, NodeId, QualifiedName};

/// The attributes every node class carries, regardless of kind.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseAttributes {
    /// The node's own identifier.
    pub node_id: NodeId,
    /// The node's browse name.
    pub browse_name: QualifiedName,
    /// The node's display name.
    pub display_name: LocalizedText,
    /// A human-readable description.
    pub description: LocalizedText,
    /// Bitmask of attributes writable by an administrative client.
    pub write_mask: u32,
    /// Bitmask of attributes writable by the current user.
    pub user_write_mask: u32,
}

/// Accessors shared by every node class.
pub trait NodeBase {
    /// This node's class. Must match the class implied by the concrete type.
    fn node_class(&self) -> NodeClass;

    /// The base attributes common to every class.
    fn base(&self) -> &BaseAttributes;

    /// The node's own identifier.
    fn node_id(&self) -> &NodeId {
        &self.base().node_id
    }

    /// The node's browse name.
    fn browse_name(&self) -> &QualifiedName {
        &self.base().browse_name
    }

    /// The node's display name.
    fn display_name(&self) -> &LocalizedText {
        &self.base().display_name
    }
}

/// A fully resolved node, tagged by its class.
#[derive(Debug, Clone)]
pub enum UaNode {
    /// An object instance.
    Object(Box<ObjectNode>),
    /// A variable instance.
    Variable(Box<VariableNode>),
    /// A method.
    Method(Box<MethodNode>),
    /// A view.
    View(Box<ViewNode>),
    /// An object type definition.
    ObjectType(Box<ObjectTypeNode>),
    /// A variable type definition.
    VariableType(Box<VariableTypeNode>),
    /// A data type definition.
    DataType(Box<DataTypeNode>),
    /// A reference type definition.
    ReferenceType(Box<ReferenceTypeNode>),
}

impl UaNode {
    /// Borrow the node as a `&dyn NodeBase`, regardless of variant.
    pub fn as_base(&self) -> &dyn NodeBase {
        match self {
            UaNode::Object(n) => n.as_ref(),
            UaNode::Variable(n) => n.as_ref(),
            UaNode::Method(n) => n.as_ref(),
            UaNode::View(n) => n.as_ref(),
            UaNode::ObjectType(n) => n.as_ref(),
            UaNode::VariableType(n) => n.as_ref(),
            UaNode::DataType(n) => n.as_ref(),
            UaNode::ReferenceType(n) => n.as_ref(),
        }
    }

    /// This node's class.
    pub fn node_class(&self) -> NodeClass {
        self.as_base().node_class()
    }

    /// This node's own identifier.
    pub fn node_id(&self) -> &NodeId {
        self.as_base().node_id()
    }

    /// Borrow the node as an `Object`, if it is one.
    pub fn as_object(&self) -> Option<&ObjectNode> {
        match self {
            UaNode::Object(n) => Some(n),
            _ => None,
        }
    }

    /// Borrow the node as a `Variable`, if it is one.
    pub fn as_variable(&self) -> Option<&VariableNode> {
        match self {
            UaNode::Variable(n) => Some(n),
            _ => None,
        }
    }
}

impl From<&UaNode> for NodeId {
    fn from(node: &UaNode) -> Self {
        node.node_id().clone()
    }
}
