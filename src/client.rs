// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The `Client` trait: the resolver's sole external dependency.
//!
//! Grounded on the service-call shape of `async_opcua_client::Session` (`read`/`browse` methods
//! returning a service result) generalized to a minimal trait so the resolver can be driven by
//! a mock in tests without a real secure channel.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::ServiceError;
use crate::registry::{ObjectTypeManager, VariableTypeManager};
use crate::types::{BrowseDescription, DataValue, NamespaceTable, ReadValueId, ReferenceDescription, TimestampsToReturn};

/// The capability the resolver consumes from an OPC UA session: attribute reads, reference
/// browsing, the shared namespace table, and the two type-constructor registries.
#[async_trait]
pub trait Client: Send + Sync {
    /// Read the given attributes, in the same order as `ids`.
    async fn read(
        &self,
        max_age: f64,
        timestamps: TimestampsToReturn,
        ids: Vec<ReadValueId>,
    ) -> Result<Vec<DataValue>, ServiceError>;

    /// Browse references from a single starting node.
    async fn browse(
        &self,
        description: BrowseDescription,
    ) -> Result<Vec<ReferenceDescription>, ServiceError>;

    /// The shared namespace table. Updates to it must go through its exclusive-access API so
    /// concurrent localization refreshes serialize against each other.
    fn namespace_table(&self) -> &RwLock<NamespaceTable>;

    /// The registry of specialized Object constructors.
    fn object_type_manager(&self) -> &dyn ObjectTypeManager;

    /// The registry of specialized Variable constructors.
    fn variable_type_manager(&self) -> &dyn VariableTypeManager;
}
