// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Minimal value types the resolver moves around: identifiers, names, attribute values, and the
//! request/result shapes of the two services it calls (`Read`, `Browse`).
//!
//! These are deliberately not wire types — no binary/JSON/XML codec traits, no
//! `BinaryEncodable`/`BinaryDecodable` impls — since nothing here is ever put on the wire
//! directly; that's the `Client`'s concern, one layer below this crate.

mod attribute;
mod browse;
mod expanded_node_id;
mod localized_text;
mod namespace_table;
mod node_class;
mod node_id;
mod qualified_name;
mod variant;

pub use attribute::AttributeId;
pub use browse::{
    BrowseDescription, BrowseDirection, ReadValueId, ReferenceDescription,
    TimestampsToReturn,
};
pub use expanded_node_id::ExpandedNodeId;
pub use localized_text::LocalizedText;
pub use namespace_table::NamespaceTable;
pub use node_class::NodeClass;
pub use node_id::{Identifier, NodeId};
pub use qualified_name::QualifiedName;
pub use variant::{DataValue, Variant};
