// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The node resolver: the public façade coordinating the attribute catalog, cache,
//! type-definition discovery, localization and browse engine.

use std::sync::Arc;

use futures::future::try_join_all;
use log::{debug, trace};
use parking_lot::RwLock;

use crate::attributes::{self, BASE_ATTRIBUTES};
use crate::browse_engine;
use crate::browse_options::{BrowseOptions, BrowseOptionsBuilder};
use crate::cache::{CacheOptions, NodeCache};
use crate::client::Client;
use crate::error::ResolveError;
use crate::localize;
use crate::node::{
    BaseAttributes, DataTypeNode, MethodNode, ObjectNode, ObjectTypeNode, ReferenceTypeNode,
    UaNode, VariableNode, VariableTypeNode, ViewNode,
};
use crate::registry::{ObjectTypeManager, VariableTypeManager};
use crate::type_definition;
use crate::types::{
    AttributeId, DataValue, ExpandedNodeId, NodeClass, NodeId, ReadValueId, ReferenceDescription,
    TimestampsToReturn, Variant,
};

/// A live, caching, typed view over a server's address space.
pub struct NodeResolver {
    client: Arc<dyn Client>,
    cache: NodeCache,
    browse_options: RwLock<BrowseOptions>,
}

impl NodeResolver {
    /// Build a resolver with the default cache bounds (120s TTL, 1024 entries).
    pub fn new(client: Arc<dyn Client>) -> Self {
        Self::with_cache_options(client, CacheOptions::default())
    }

    /// Build a resolver with explicit cache bounds.
    pub fn with_cache_options(client: Arc<dyn Client>, cache_options: CacheOptions) -> Self {
        Self {
            client,
            cache: NodeCache::new(cache_options),
            browse_options: RwLock::new(BrowseOptions::default()),
        }
    }

    /// Resolve `id` to its node, regardless of class. Returns the cached record if present.
    pub async fn get(&self, id: &NodeId) -> Result<Arc<UaNode>, ResolveError> {
        if let Some(cached) = self.cache.get(id).await {
            trace!("cache hit for {id}");
            return Ok(cached);
        }
        debug!("cache miss for {id}, reading base attributes");
        let base_values = self.read_attributes(id, BASE_ATTRIBUTES).await?;
        let class = node_class_of(&base_values)?;

        let node = match class {
            NodeClass::Object => {
                let (extra, tdef) = tokio::join!(
                    self.read_attributes(id, attributes::extra_attributes(class)),
                    type_definition::read_type_definition(&*self.client, id),
                );
                let values: Vec<DataValue> = base_values.into_iter().chain(extra?).collect();
                construct_object(id, &values, &tdef, self.client.object_type_manager())?
            }
            NodeClass::Variable => {
                let (extra, tdef) = tokio::join!(
                    self.read_attributes(id, attributes::extra_attributes(class)),
                    type_definition::read_type_definition(&*self.client, id),
                );
                let values: Vec<DataValue> = base_values.into_iter().chain(extra?).collect();
                construct_variable(id, &values, &tdef, self.client.variable_type_manager())?
            }
            _ => {
                let extra = self.read_attributes(id, attributes::extra_attributes(class)).await?;
                let values: Vec<DataValue> = base_values.into_iter().chain(extra).collect();
                construct_default(class, id, &values)?
            }
        };

        let arc = Arc::new(node);
        self.cache.put(id.clone(), arc.clone()).await;
        Ok(arc)
    }

    /// Resolve `id` as an Object, using the cache only if the cached variant is Object.
    pub async fn get_object(&self, id: &NodeId) -> Result<Arc<UaNode>, ResolveError> {
        if let Some(cached) = self.cache.get(id).await {
            if cached.as_object().is_some() {
                trace!("cache hit for object {id}");
                return Ok(cached);
            }
        }
        let tdef = type_definition::read_type_definition(&*self.client, id).await;
        self.get_object_with_type_definition(id, &tdef).await
    }

    /// Resolve `id` as an Object with an already-known type definition, skipping the
    /// cache-miss `HasTypeDefinition` lookup (used by browse fan-out, where the server already
    /// supplied the type definition).
    pub async fn get_object_with_type_definition(
        &self,
        id: &NodeId,
        tdef: &NodeId,
    ) -> Result<Arc<UaNode>, ResolveError> {
        if let Some(cached) = self.cache.get(id).await {
            if cached.as_object().is_some() {
                return Ok(cached);
            }
        }
        let values = self
            .read_attributes(id, &attributes::full_attributes(NodeClass::Object))
            .await?;
        let node = construct_object(id, &values, tdef, self.client.object_type_manager())?;
        let arc = Arc::new(node);
        self.cache.put(id.clone(), arc.clone()).await;
        Ok(arc)
    }

    /// Resolve `id` as a Variable, using the cache only if the cached variant is Variable.
    pub async fn get_variable(&self, id: &NodeId) -> Result<Arc<UaNode>, ResolveError> {
        if let Some(cached) = self.cache.get(id).await {
            if cached.as_variable().is_some() {
                trace!("cache hit for variable {id}");
                return Ok(cached);
            }
        }
        let tdef = type_definition::read_type_definition(&*self.client, id).await;
        self.get_variable_with_type_definition(id, &tdef).await
    }

    /// Resolve `id` as a Variable with an already-known type definition.
    pub async fn get_variable_with_type_definition(
        &self,
        id: &NodeId,
        tdef: &NodeId,
    ) -> Result<Arc<UaNode>, ResolveError> {
        if let Some(cached) = self.cache.get(id).await {
            if cached.as_variable().is_some() {
                return Ok(cached);
            }
        }
        let values = self
            .read_attributes(id, &attributes::full_attributes(NodeClass::Variable))
            .await?;
        let node = construct_variable(id, &values, tdef, self.client.variable_type_manager())?;
        let arc = Arc::new(node);
        self.cache.put(id.clone(), arc.clone()).await;
        Ok(arc)
    }

    /// Browse from `start` using the resolver's current options, resolving every returned
    /// reference in parallel. `start` accepts either a `&NodeId` or a `&UaNode`.
    pub async fn browse(&self, start: impl Into<NodeId>) -> Result<Vec<Arc<UaNode>>, ResolveError> {
        let options = self.browse_options();
        self.browse_with_options(start, &options).await
    }

    /// Browse from `start` using `options`, resolving every returned reference in parallel,
    /// preserving the server's return order. `start` accepts either a `&NodeId` or a `&UaNode`.
    pub async fn browse_with_options(
        &self,
        start: impl Into<NodeId>,
        options: &BrowseOptions,
    ) -> Result<Vec<Arc<UaNode>>, ResolveError> {
        let start = start.into();
        let refs = browse_engine::browse(&*self.client, &start, options).await?;
        try_join_all(refs.into_iter().map(|r| self.resolve_reference(r))).await
    }

    async fn resolve_reference(&self, reference: ReferenceDescription) -> Result<Arc<UaNode>, ResolveError> {
        match reference.node_class {
            NodeClass::Object => {
                let (id, tdef) = tokio::join!(
                    self.localize(&reference.node_id),
                    self.localize(&reference.type_definition),
                );
                self.get_object_with_type_definition(&id?, &tdef?).await
            }
            NodeClass::Variable => {
                let (id, tdef) = tokio::join!(
                    self.localize(&reference.node_id),
                    self.localize(&reference.type_definition),
                );
                self.get_variable_with_type_definition(&id?, &tdef?).await
            }
            _ => {
                let id = self.localize(&reference.node_id).await?;
                self.get(&id).await
            }
        }
    }

    /// Resolve an expanded node id to a local one, refreshing the namespace table on miss.
    pub async fn localize(&self, expanded: &ExpandedNodeId) -> Result<NodeId, ResolveError> {
        localize::localize(&*self.client, expanded).await
    }

    /// A snapshot of the resolver's current browse options.
    pub fn browse_options(&self) -> BrowseOptions {
        self.browse_options.read().clone()
    }

    /// Replace the resolver's browse options outright.
    pub fn set_browse_options(&self, options: BrowseOptions) {
        *self.browse_options.write() = options;
    }

    /// Mutate the resolver's browse options in place: seed a builder from the current value
    /// (including its browse direction), apply `mutator`, and install the result.
    pub fn modify_browse_options(&self, mutator: impl FnOnce(BrowseOptionsBuilder) -> BrowseOptionsBuilder) {
        let mut guard = self.browse_options.write();
        let seeded = BrowseOptionsBuilder::from_options(&guard);
        *guard = mutator(seeded).build();
    }

    async fn read_attributes(
        &self,
        id: &NodeId,
        attribute_ids: &[AttributeId],
    ) -> Result<Vec<DataValue>, ResolveError> {
        let ids = attribute_ids
            .iter()
            .map(|a| ReadValueId::new(id.clone(), *a))
            .collect();
        Ok(self.client.read(0.0, TimestampsToReturn::Neither, ids).await?)
    }
}

fn node_class_of(values: &[DataValue]) -> Result<NodeClass, ResolveError> {
    values
        .get(1)
        .and_then(|dv| dv.value())
        .and_then(Variant::as_i32)
        .and_then(NodeClass::from_i32)
        .ok_or(ResolveError::BadNodeClassInvalid)
}

fn build_base(id: NodeId, values: &[DataValue]) -> Result<BaseAttributes, ResolveError> {
    let browse_name = values
        .get(2)
        .and_then(|dv| dv.value())
        .and_then(Variant::as_qualified_name)
        .cloned()
        .ok_or_else(|| ResolveError::unexpected(format!("node {id} missing BrowseName")))?;
    let display_name = values
        .get(3)
        .and_then(|dv| dv.value())
        .and_then(Variant::as_localized_text)
        .cloned()
        .ok_or_else(|| ResolveError::unexpected(format!("node {id} missing DisplayName")))?;
    let description = values
        .get(4)
        .and_then(|dv| dv.value())
        .and_then(Variant::as_localized_text)
        .cloned()
        .unwrap_or_default();
    let write_mask = values.get(5).and_then(|dv| dv.value()).and_then(Variant::as_u32).unwrap_or(0);
    let user_write_mask = values.get(6).and_then(|dv| dv.value()).and_then(Variant::as_u32).unwrap_or(0);
    Ok(BaseAttributes {
        node_id: id,
        browse_name,
        display_name,
        description,
        write_mask,
        user_write_mask,
    })
}

fn expect_class(values: &[DataValue], expected: NodeClass, id: &NodeId) -> Result<(), ResolveError> {
    let found = node_class_of(values)?;
    debug_assert_eq!(found, expected, "constructor invoked against a mismatched NodeClass");
    if found != expected {
        return Err(ResolveError::unexpected(format!(
            "expected {expected:?} for {id}, found {found:?}"
        )));
    }
    Ok(())
}

fn construct_object(
    id: &NodeId,
    values: &[DataValue],
    tdef: &NodeId,
    registry: &dyn ObjectTypeManager,
) -> Result<UaNode, ResolveError> {
    expect_class(values, NodeClass::Object, id)?;
    let base = build_base(id.clone(), values)?;
    let event_notifier = values.get(7).and_then(|dv| dv.value()).and_then(Variant::as_byte).unwrap_or(0);

    let constructor = (!tdef.is_null()).then(|| registry.get_constructor(tdef)).flatten();
    let node = match constructor {
        Some(ctor) => {
            debug!("using specialized object constructor for type definition {tdef}");
            (*ctor)(base, event_notifier)
        }
        None => ObjectNode::new(base, event_notifier),
    };
    Ok(UaNode::Object(Box::new(node)))
}

fn construct_variable(
    id: &NodeId,
    values: &[DataValue],
    tdef: &NodeId,
    registry: &dyn VariableTypeManager,
) -> Result<UaNode, ResolveError> {
    expect_class(values, NodeClass::Variable, id)?;
    let base = build_base(id.clone(), values)?;
    let value = values.get(7).cloned().unwrap_or_else(|| DataValue::bad(crate::error::StatusCode::BadAttributeIdInvalid));
    let data_type = values
        .get(8)
        .and_then(|dv| dv.value())
        .and_then(Variant::as_node_id)
        .cloned()
        .unwrap_or_default();
    let value_rank = values.get(9).and_then(|dv| dv.value()).and_then(Variant::as_i32).unwrap_or(-1);
    let array_dimensions = values
        .get(10)
        .and_then(|dv| dv.value())
        .and_then(Variant::as_u32_array)
        .map(|a| a.to_vec());
    let access_level = values.get(11).and_then(|dv| dv.value()).and_then(Variant::as_byte).unwrap_or(0);
    let user_access_level = values.get(12).and_then(|dv| dv.value()).and_then(Variant::as_byte).unwrap_or(0);
    let minimum_sampling_interval = values.get(13).and_then(|dv| dv.value()).and_then(Variant::as_f64);
    let historizing = values.get(14).and_then(|dv| dv.value()).and_then(Variant::as_bool).unwrap_or(false);

    let constructor = (!tdef.is_null()).then(|| registry.get_constructor(tdef)).flatten();
    let node = match constructor {
        Some(ctor) => {
            debug!("using specialized variable constructor for type definition {tdef}");
            (*ctor)(
                base,
                value,
                data_type,
                value_rank,
                array_dimensions,
                access_level,
                user_access_level,
                minimum_sampling_interval,
                historizing,
            )
        }
        None => VariableNode::new(
            base,
            value,
            data_type,
            value_rank,
            array_dimensions,
            access_level,
            user_access_level,
            minimum_sampling_interval,
            historizing,
        ),
    };
    Ok(UaNode::Variable(Box::new(node)))
}

fn construct_default(class: NodeClass, id: &NodeId, values: &[DataValue]) -> Result<UaNode, ResolveError> {
    expect_class(values, class, id)?;
    let base = build_base(id.clone(), values)?;

    let byte_at = |i: usize| values.get(i).and_then(|dv| dv.value()).and_then(Variant::as_byte).unwrap_or(0);
    let bool_at = |i: usize| values.get(i).and_then(|dv| dv.value()).and_then(Variant::as_bool).unwrap_or(false);
    let text_at = |i: usize| {
        values
            .get(i)
            .and_then(|dv| dv.value())
            .and_then(Variant::as_localized_text)
            .cloned()
            .unwrap_or_default()
    };

    Ok(match class {
        NodeClass::Method => UaNode::Method(Box::new(MethodNode::new(base, bool_at(7), bool_at(8)))),
        NodeClass::View => UaNode::View(Box::new(ViewNode::new(base, bool_at(7), byte_at(8)))),
        NodeClass::ObjectType => UaNode::ObjectType(Box::new(ObjectTypeNode::new(base, bool_at(7)))),
        NodeClass::VariableType => {
            let is_abstract = bool_at(7);
            let value = values.get(8).cloned().unwrap_or_else(|| DataValue::bad(crate::error::StatusCode::BadAttributeIdInvalid));
            let data_type = values
                .get(9)
                .and_then(|dv| dv.value())
                .and_then(Variant::as_node_id)
                .cloned()
                .unwrap_or_default();
            let value_rank = values.get(10).and_then(|dv| dv.value()).and_then(Variant::as_i32).unwrap_or(-1);
            let array_dimensions = values
                .get(11)
                .and_then(|dv| dv.value())
                .and_then(Variant::as_u32_array)
                .map(|a| a.to_vec());
            UaNode::VariableType(Box::new(VariableTypeNode::new(
                base,
                is_abstract,
                value,
                data_type,
                value_rank,
                array_dimensions,
            )))
        }
        NodeClass::DataType => UaNode::DataType(Box::new(DataTypeNode::new(base, bool_at(7)))),
        NodeClass::ReferenceType => {
            UaNode::ReferenceType(Box::new(ReferenceTypeNode::new(base, bool_at(7), bool_at(8), text_at(9))))
        }
        NodeClass::Object | NodeClass::Variable => {
            return Err(ResolveError::unexpected("construct_default invoked for Object/Variable"))
        }
    })
}
