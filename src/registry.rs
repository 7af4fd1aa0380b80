// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The extension registries the `Client` exposes: `ObjectTypeManager` and `VariableTypeManager`,
//! plus simple in-memory default implementations.
//!
//! Grounded on `async_opcua_types::type_loader::TypeLoaderInstance`'s `HashMap<u32, LoadFun>`
//! pattern, generalized from "decode function keyed by encoding id" to "node constructor keyed
//! by type-definition id".

use std::collections::HashMap;
use std::sync::Arc;

use crate::node::{BaseAttributes, ObjectNode, VariableNode};
use crate::types::NodeId;

/// A constructor invoked in place of the default `Object` constructor when its type definition
/// has a registered entry.
pub type ObjectConstructor = Arc<dyn Fn(BaseAttributes, u8) -> ObjectNode + Send + Sync>;

/// A constructor invoked in place of the default `Variable` constructor when its type
/// definition has a registered entry.
#[allow(clippy::type_complexity)]
pub type VariableConstructor = Arc<
    dyn Fn(
            BaseAttributes,
            crate::types::DataValue,
            NodeId,
            i32,
            Option<Vec<u32>>,
            u8,
            u8,
            Option<f64>,
            bool,
        ) -> VariableNode
        + Send
        + Sync,
>;

/// A registry mapping an object type definition id to a specialized constructor.
pub trait ObjectTypeManager: Send + Sync {
    /// The constructor registered for `type_definition`, if any.
    fn get_constructor(&self, type_definition: &NodeId) -> Option<ObjectConstructor>;
}

/// A registry mapping a variable type definition id to a specialized constructor.
pub trait VariableTypeManager: Send + Sync {
    /// The constructor registered for `type_definition`, if any.
    fn get_constructor(&self, type_definition: &NodeId) -> Option<VariableConstructor>;
}

/// A simple in-memory `ObjectTypeManager`, sufficient for standalone use and for tests that
/// don't need a caller-supplied registry.
#[derive(Default, Clone)]
pub struct InMemoryObjectTypeManager {
    constructors: HashMap<NodeId, ObjectConstructor>,
}

impl InMemoryObjectTypeManager {
    /// An empty registry: every object resolves through the default constructor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor for `type_definition`, replacing any existing entry.
    pub fn register(&mut self, type_definition: NodeId, constructor: ObjectConstructor) {
        self.constructors.insert(type_definition, constructor);
    }
}

impl ObjectTypeManager for InMemoryObjectTypeManager {
    fn get_constructor(&self, type_definition: &NodeId) -> Option<ObjectConstructor> {
        self.constructors.get(type_definition).cloned()
    }
}

/// A simple in-memory `VariableTypeManager`, sufficient for standalone use and for tests that
/// don't need a caller-supplied registry.
#[derive(Default, Clone)]
pub struct InMemoryVariableTypeManager {
    constructors: HashMap<NodeId, VariableConstructor>,
}

impl InMemoryVariableTypeManager {
    /// An empty registry: every variable resolves through the default constructor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor for `type_definition`, replacing any existing entry.
    pub fn register(&mut self, type_definition: NodeId, constructor: VariableConstructor) {
        self.constructors.insert(type_definition, constructor);
    }
}

impl VariableTypeManager for InMemoryVariableTypeManager {
    fn get_constructor(&self, type_definition: &NodeId) -> Option<VariableConstructor> {
        self.constructors.get(type_definition).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregistered_type_definition_has_no_constructor() {
        let registry = InMemoryObjectTypeManager::new();
        assert!(registry
            .get_constructor(&NodeId::new(0, 61u32))
            .is_none());
    }

    #[test]
    fn registered_type_definition_is_found() {
        let mut registry = InMemoryObjectTypeManager::new();
        let tdef = NodeId::new(0, 61u32);
        registry.register(tdef.clone(), Arc::new(|base, en| ObjectNode::new(base, en)));
        assert!(registry.get_constructor(&tdef).is_some());
    }
}
