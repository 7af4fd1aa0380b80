// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The browse engine: builds a `BrowseDescription` from a starting node and the caller's
//! options, and executes it as a single `Browse` call.
//!
//! Grounded on the request shape in
//! `async_opcua_client::session::services::view::Browse` — deliberately *not* grounded on
//! `async_opcua_client::browser::Browser`, whose recursive, continuation-point-aware traversal
//! belongs one layer below this crate, in the `Client` it consumes. This engine calls `Browse`
//! exactly once per invocation; the `Client` is expected to already have resolved any
//! continuation points into the full result.

use crate::browse_options::BrowseOptions;
use crate::client::Client;
use crate::error::ResolveError;
use crate::types::{BrowseDescription, NodeId, ReferenceDescription};

/// Run a single `Browse` from `start`, with `options` as the filter.
pub async fn browse(
    client: &dyn Client,
    start: &NodeId,
    options: &BrowseOptions,
) -> Result<Vec<ReferenceDescription>, ResolveError> {
    let description = BrowseDescription {
        node_id: start.clone(),
        browse_direction: options.browse_direction(),
        reference_type_id: options.reference_type_id().clone(),
        include_subtypes: options.include_subtypes(),
        node_class_mask: options.node_class_mask(),
    };
    Ok(client.browse(description).await?)
}
