// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! `Variable` node records, grounded on `opcua_nodes::variable::Variable`'s attribute set
//! (value, data type, value rank, array dimensions, access levels, historizing), dropped down
//! to a plain read-only struct since this crate never evaluates a value getter server-side.

use super::{BaseAttributes, NodeBase};
use crate::types::{DataValue, NodeClass, NodeId};

/// A resolved Variable node.
#[derive(Debug, Clone)]
pub struct VariableNode {
    pub(crate) base: BaseAttributes,
    /// The variable's current value.
    pub value: DataValue,
    /// The node id of this variable's data type.
    pub data_type: NodeId,
    /// The variable's value rank (scalar, one-dimensional array, etc).
    pub value_rank: i32,
    /// The variable's array dimensions, if it is an array.
    pub array_dimensions: Option<Vec<u32>>,
    /// Bitmask describing how the value can be accessed.
    pub access_level: u8,
    /// Bitmask describing how the current user may access the value.
    pub user_access_level: u8,
    /// The minimum interval, in milliseconds, between reported value changes.
    pub minimum_sampling_interval: Option<f64>,
    /// Whether history is being collected for this variable.
    pub historizing: bool,
}

#[allow(clippy::too_many_arguments)]
impl VariableNode {
    /// Build a new variable record.
    pub fn new(
        base: BaseAttributes,
        value: DataValue,
        data_type: NodeId,
        value_rank: i32,
        array_dimensions: Option<Vec<u32>>,
        access_level: u8,
        user_access_level: u8,
        minimum_sampling_interval: Option<f64>,
        historizing: bool,
    ) -> Self {
        Self {
            base,
            value,
            data_type,
            value_rank,
            array_dimensions,
            access_level,
            user_access_level,
            minimum_sampling_interval,
            historizing,
        }
    }
}

impl NodeBase for VariableNode {
    fn node_class(&self) -> NodeClass {
        NodeClass::Variable
    }

    fn base(&self) -> &BaseAttributes {
        &self.base
    }
}
