// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! `VariableType` node records, grounded on `opcua_nodes::variable_type::VariableType`: the
//! `IsAbstract` flag plus the same value/data-type/value-rank/array-dimensions block a
//! `Variable` carries, since a variable type constrains exactly those fields on its instances.

use super::{BaseAttributes, NodeBase};
use crate::types::{DataValue, NodeClass, NodeId};

/// A resolved VariableType node.
#[derive(Debug, Clone)]
pub struct VariableTypeNode {
    pub(crate) base: BaseAttributes,
    /// Whether instances of this type may not be created directly.
    pub is_abstract: bool,
    /// The default value for instances of this type.
    pub value: DataValue,
    /// The node id of the data type instances of this type must use.
    pub data_type: NodeId,
    /// The value rank instances of this type must use.
    pub value_rank: i32,
    /// The array dimensions instances of this type must use, if constrained.
    pub array_dimensions: Option<Vec<u32>>,
}

impl VariableTypeNode {
    /// Build a new variable type record.
    pub fn new(
        base: BaseAttributes,
        is_abstract: bool,
        value: DataValue,
        data_type: NodeId,
        value_rank: i32,
        array_dimensions: Option<Vec<u32>>,
    ) -> Self {
        Self {
            base,
            is_abstract,
            value,
            data_type,
            value_rank,
            array_dimensions,
        }
    }
}

impl NodeBase for VariableTypeNode {
    fn node_class(&self) -> NodeClass {
        NodeClass::VariableType
    }

    fn base(&self) -> &BaseAttributes {
        &self.base
    }
}
