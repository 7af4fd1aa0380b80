// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! `ObjectType` node records, grounded on `opcua_nodes::object_type::ObjectType`'s
//! `IsAbstract` flag.

use super::{BaseAttributes, NodeBase};
use crate::types::NodeClass;

/// A resolved ObjectType node.
#[derive(Debug, Clone)]
pub struct ObjectTypeNode {
    pub(crate) base: BaseAttributes,
    /// Whether instances of this type may not be created directly.
    pub is_abstract: bool,
}

impl ObjectTypeNode {
    /// Build a new object type record.
    pub fn new(base: BaseAttributes, is_abstract: bool) -> Self {
        Self { base, is_abstract }
    }
}

impl NodeBase for ObjectTypeNode {
    fn node_class(&self) -> NodeClass {
        NodeClass::ObjectType
    }

    fn base(&self) -> &BaseAttributes {
        &self.base
    }
}
