// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The class-indexed attribute catalog.
//!
//! Generalizes `opcua_types::attribute::AttributeId`'s numeric assignments (used as-is) into a
//! per-`NodeClass` ordered list. A server-side address space has no such table directly —
//! attribute selection there is driven by a `match` inside each node's `Node::get_attribute` impl,
//! since the server already holds the node and just needs to pick fields off it. A client reading
//! a node it doesn't have yet needs the inverse: the list of attribute ids to ask for, per class,
//! before it has the node at all.

use crate::types::{AttributeId, NodeClass};

/// Attributes present on every node class, in read order.
pub const BASE_ATTRIBUTES: &[AttributeId] = &[
    AttributeId::NodeId,
    AttributeId::NodeClass,
    AttributeId::BrowseName,
    AttributeId::DisplayName,
    AttributeId::Description,
    AttributeId::WriteMask,
    AttributeId::UserWriteMask,
];

const OBJECT_EXTRA: &[AttributeId] = &[AttributeId::EventNotifier];

const VARIABLE_EXTRA: &[AttributeId] = &[
    AttributeId::Value,
    AttributeId::DataType,
    AttributeId::ValueRank,
    AttributeId::ArrayDimensions,
    AttributeId::AccessLevel,
    AttributeId::UserAccessLevel,
    AttributeId::MinimumSamplingInterval,
    AttributeId::Historizing,
];

const METHOD_EXTRA: &[AttributeId] = &[AttributeId::Executable, AttributeId::UserExecutable];

const VIEW_EXTRA: &[AttributeId] = &[AttributeId::ContainsNoLoops, AttributeId::EventNotifier];

const OBJECT_TYPE_EXTRA: &[AttributeId] = &[AttributeId::IsAbstract];

const VARIABLE_TYPE_EXTRA: &[AttributeId] = &[
    AttributeId::IsAbstract,
    AttributeId::Value,
    AttributeId::DataType,
    AttributeId::ValueRank,
    AttributeId::ArrayDimensions,
];

const DATA_TYPE_EXTRA: &[AttributeId] = &[AttributeId::IsAbstract];

const REFERENCE_TYPE_EXTRA: &[AttributeId] = &[
    AttributeId::IsAbstract,
    AttributeId::Symmetric,
    AttributeId::InverseName,
];

/// The attributes specific to `class`, beyond the base set, in read order.
pub fn extra_attributes(class: NodeClass) -> &'static [AttributeId] {
    match class {
        NodeClass::Object => OBJECT_EXTRA,
        NodeClass::Variable => VARIABLE_EXTRA,
        NodeClass::Method => METHOD_EXTRA,
        NodeClass::View => VIEW_EXTRA,
        NodeClass::ObjectType => OBJECT_TYPE_EXTRA,
        NodeClass::VariableType => VARIABLE_TYPE_EXTRA,
        NodeClass::DataType => DATA_TYPE_EXTRA,
        NodeClass::ReferenceType => REFERENCE_TYPE_EXTRA,
    }
}

/// The full, ordered attribute list for `class`: `BASE_ATTRIBUTES` followed by
/// [`extra_attributes`].
pub fn full_attributes(class: NodeClass) -> Vec<AttributeId> {
    BASE_ATTRIBUTES
        .iter()
        .chain(extra_attributes(class))
        .copied()
        .collect()
}
