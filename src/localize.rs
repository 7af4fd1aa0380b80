// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Namespace localization: turn an `ExpandedNodeId` into a local `NodeId`, refreshing the
//! server's namespace array on miss and retrying once.
//!
//! Grounded on `opcua_types::namespaces::NamespaceMap::resolve_node_id` /
//! `ExpandedNodeId::try_resolve`, generalized to (a) use the ordered index→uri
//! [`crate::types::NamespaceTable`] instead of a uri→index hash map and (b) retry once after a
//! refresh (see DESIGN.md for the reasoning).

use log::{debug, trace, warn};

use crate::client::Client;
use crate::error::ResolveError;
use crate::types::{AttributeId, ExpandedNodeId, NodeId, ReadValueId, TimestampsToReturn, Variant};
use crate::well_known;

/// Resolve `expanded` to a local `NodeId`, refreshing the namespace table and retrying once if
/// the uri isn't yet known locally. Returns `NULL` if `expanded` addresses a foreign server, or
/// if the uri remains unknown after a refresh.
pub async fn localize(client: &dyn Client, expanded: &ExpandedNodeId) -> Result<NodeId, ResolveError> {
    if !expanded.is_local_server() {
        return Ok(NodeId::null());
    }

    {
        let table = client.namespace_table().read();
        if let Some(id) = expanded.local(&table) {
            trace!("localized {expanded:?} without a refresh");
            return Ok(id);
        }
    }

    warn!("namespace miss for {expanded:?}, refreshing namespace table");
    refresh_namespace_table(client).await?;

    let table = client.namespace_table().read();
    Ok(expanded.local(&table).unwrap_or_else(|| {
        warn!("namespace for {expanded:?} still unknown after refresh");
        NodeId::null()
    }))
}

/// Read the server's `NamespaceArray` property and rebuild the shared namespace table from it.
///
/// `NamespaceArray` (`i=2255`) is a property of the well-known `Server` object (`i=85`), itself
/// always present in namespace 0 — so this read never itself needs localization.
async fn refresh_namespace_table(client: &dyn Client) -> Result<(), ResolveError> {
    let values = client
        .read(
            0.0,
            TimestampsToReturn::Neither,
            vec![ReadValueId::new(
                well_known::namespace_array(),
                AttributeId::Value,
            )],
        )
        .await?;

    let array = values
        .first()
        .and_then(|dv| dv.value())
        .and_then(Variant::as_string_array)
        .map(|a| a.to_vec())
        .unwrap_or_default();

    debug!("rebuilding namespace table from {} entries", array.len());
    let mut table = client.namespace_table().write();
    table.rebuild_from_array(&array);
    Ok(())
}
