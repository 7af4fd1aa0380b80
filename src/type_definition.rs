// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Type-definition discovery: a single fixed-shape `Browse` specialized to
//! `HasTypeDefinition`.
//!
//! Grounded on the request shape built by
//! `async_opcua_client::session::services::view::Browse`, generalized from "the session's
//! general-purpose Browse call" to "a single fixed-shape Browse used internally by the
//! resolver" — this never varies its filter, so it isn't exposed as a builder.

use log::warn;

use crate::client::Client;
use crate::localize;
use crate::types::{BrowseDescription, BrowseDirection, NodeClass, NodeId};
use crate::well_known;

/// Discover the type definition of `id` by browsing its `HasTypeDefinition` forward references.
///
/// Returns the `NULL` node id if the browse fails, or if no `HasTypeDefinition` reference is
/// present — in both cases the caller degrades to the default constructor.
pub async fn read_type_definition(client: &dyn Client, id: &NodeId) -> NodeId {
    let description = BrowseDescription {
        node_id: id.clone(),
        browse_direction: BrowseDirection::Forward,
        reference_type_id: well_known::has_type_definition(),
        include_subtypes: false,
        node_class_mask: NodeClass::ObjectType.bit() | NodeClass::VariableType.bit(),
    };

    let refs = match client.browse(description).await {
        Ok(refs) => refs,
        Err(err) => {
            warn!("type definition lookup for {id} degraded to NULL: {err}");
            return NodeId::null();
        }
    };

    let Some(reference) = refs
        .iter()
        .find(|r| r.reference_type_id == well_known::has_type_definition())
    else {
        return NodeId::null();
    };

    localize::localize(client, &reference.node_id)
        .await
        .unwrap_or_else(|err| {
            warn!("type definition target for {id} could not be localized: {err}");
            NodeId::null()
        })
}
