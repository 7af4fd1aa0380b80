// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! `DataType` node records, grounded on `opcua_nodes::data_type::DataType`'s `IsAbstract` flag.

use super::{BaseAttributes, NodeBase};
use crate::types::NodeClass;

/// A resolved DataType node.
#[derive(Debug, Clone)]
pub struct DataTypeNode {
    pub(crate) base: BaseAttributes,
    /// Whether this data type may not be used directly as a value's type.
    pub is_abstract: bool,
}

impl DataTypeNode {
    /// Build a new data type record.
    pub fn new(base: BaseAttributes, is_abstract: bool) -> Self {
        Self { base, is_abstract }
    }
}

impl NodeBase for DataTypeNode {
    fn node_class(&self) -> NodeClass {
        NodeClass::DataType
    }

    fn base(&self) -> &BaseAttributes {
        &self.base
    }
}
