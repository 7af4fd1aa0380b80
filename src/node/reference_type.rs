// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! `ReferenceType` node records, grounded on
//! `opcua_nodes::reference_type::ReferenceType`'s `IsAbstract`/`Symmetric`/`InverseName` set.

use super::{BaseAttributes, NodeBase};
use crate::types::{LocalizedText, NodeClass};

/// A resolved ReferenceType node.
#[derive(Debug, Clone)]
pub struct ReferenceTypeNode {
    pub(crate) base: BaseAttributes,
    /// Whether this reference type may not be used directly.
    pub is_abstract: bool,
    /// Whether the forward and inverse names of this reference type are the same.
    pub symmetric: bool,
    /// The name of the reference when traversed in the inverse direction.
    pub inverse_name: LocalizedText,
}

impl ReferenceTypeNode {
    /// Build a new reference type record.
    pub fn new(
        base: BaseAttributes,
        is_abstract: bool,
        symmetric: bool,
        inverse_name: LocalizedText,
    ) -> Self {
        Self {
            base,
            is_abstract,
            symmetric,
            inverse_name,
        }
    }
}

impl NodeBase for ReferenceTypeNode {
    fn node_class(&self) -> NodeClass {
        NodeClass::ReferenceType
    }

    fn base(&self) -> &BaseAttributes {
        &self.base
    }
}
