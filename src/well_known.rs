// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The handful of standard numeric ids this crate names directly.
//!
//! Grounded on `async_opcua_types::node_ids`'s generated `ObjectId`/`ReferenceTypeId` enums
//! (e.g. `ObjectId::Server`, `ReferenceTypeId::HasTypeDefinition`) — those are produced by a
//! codegen crate from the full standard nodeset; this crate only ever names a few of them, so
//! they're hand-curated constants rather than a generated enum.

use crate::types::NodeId;

/// `i=85`, the `Server` object.
pub fn server() -> NodeId {
    NodeId::new(0, 85u32)
}

/// `i=40`, the `HasTypeDefinition` reference type.
pub fn has_type_definition() -> NodeId {
    NodeId::new(0, 40u32)
}

/// `i=33`, the `HierarchicalReferences` reference type.
pub fn hierarchical_references() -> NodeId {
    NodeId::new(0, 33u32)
}

/// `i=35`, the `Organizes` reference type.
pub fn organizes() -> NodeId {
    NodeId::new(0, 35u32)
}

/// `i=47`, the `HasComponent` reference type.
pub fn has_component() -> NodeId {
    NodeId::new(0, 47u32)
}

/// `i=46`, the `HasProperty` reference type.
pub fn has_property() -> NodeId {
    NodeId::new(0, 46u32)
}

/// `i=61`, the `FolderType` object type.
pub fn folder_type() -> NodeId {
    NodeId::new(0, 61u32)
}

/// `i=58`, the `BaseObjectType` object type.
pub fn base_object_type() -> NodeId {
    NodeId::new(0, 58u32)
}

/// `i=63`, the `BaseDataVariableType` variable type.
pub fn base_data_variable_type() -> NodeId {
    NodeId::new(0, 63u32)
}

/// `i=2255`, the `NamespaceArray` property on the `Server` object — used to read the server's
/// namespace array during localization.
pub fn namespace_array() -> NodeId {
    NodeId::new(0, 2255u32)
}
