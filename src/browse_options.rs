// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! `BrowseOptions`: an immutable configuration value with a builder and a copy-mutator.
//!
//! Grounded on `async_opcua_client::browser::BrowseFilter`, generalized from "always browse
//! recursively with a `BrowserPolicy`" to "browse exactly one level, the caller composes
//! recursion via `browse` + `get`" — recursive, continuation-point-aware traversal stays one
//! layer below, in the `Client` implementation.

use crate::types::{BrowseDirection, NodeClass, NodeId};
use crate::well_known;

/// The filter a `browse` call applies: direction, reference type, subtype inclusion, and node
/// class mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseOptions {
    pub(crate) browse_direction: BrowseDirection,
    pub(crate) reference_type_id: NodeId,
    pub(crate) include_subtypes: bool,
    pub(crate) node_class_mask: u32,
}

impl Default for BrowseOptions {
    fn default() -> Self {
        Self {
            browse_direction: BrowseDirection::Forward,
            reference_type_id: well_known::hierarchical_references(),
            include_subtypes: true,
            node_class_mask: NodeClass::ALL_MASK,
        }
    }
}

impl BrowseOptions {
    /// The default options: forward, `HierarchicalReferences`, subtypes included, all classes.
    pub fn new() -> Self {
        Self::default()
    }

    /// The configured browse direction.
    pub fn browse_direction(&self) -> BrowseDirection {
        self.browse_direction
    }

    /// The configured reference type filter.
    pub fn reference_type_id(&self) -> &NodeId {
        &self.reference_type_id
    }

    /// Whether subtypes of the reference type filter also match.
    pub fn include_subtypes(&self) -> bool {
        self.include_subtypes
    }

    /// The configured node class mask.
    pub fn node_class_mask(&self) -> u32 {
        self.node_class_mask
    }

    /// Build a new value seeded from `self`, with `mutator` applied to a builder.
    ///
    /// This is the standalone copy form: it does not touch a resolver's stored options.
    pub fn copy(&self, mutator: impl FnOnce(BrowseOptionsBuilder) -> BrowseOptionsBuilder) -> Self {
        mutator(BrowseOptionsBuilder::from_options(self)).build()
    }
}

/// A builder seeded from an existing [`BrowseOptions`] (or the defaults), all four fields
/// mutable.
#[derive(Debug, Clone)]
pub struct BrowseOptionsBuilder {
    options: BrowseOptions,
}

impl BrowseOptionsBuilder {
    /// Start from the default options.
    pub fn new() -> Self {
        Self {
            options: BrowseOptions::default(),
        }
    }

    /// Start from an existing options value, copying all four fields — including the browse
    /// direction, so a caller tweaking one field doesn't silently reset the rest.
    pub fn from_options(options: &BrowseOptions) -> Self {
        Self {
            options: options.clone(),
        }
    }

    /// Set the browse direction.
    pub fn browse_direction(mut self, direction: BrowseDirection) -> Self {
        self.options.browse_direction = direction;
        self
    }

    /// Set the reference type filter.
    pub fn reference_type_id(mut self, reference_type_id: NodeId) -> Self {
        self.options.reference_type_id = reference_type_id;
        self
    }

    /// Set whether subtypes of the reference type filter also match.
    pub fn include_subtypes(mut self, include_subtypes: bool) -> Self {
        self.options.include_subtypes = include_subtypes;
        self
    }

    /// Set the node class mask.
    pub fn node_class_mask(mut self, node_class_mask: u32) -> Self {
        self.options.node_class_mask = node_class_mask;
        self
    }

    /// Finish building.
    pub fn build(self) -> BrowseOptions {
        self.options
    }
}

impl Default for BrowseOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_preserves_direction_when_unset() {
        let base = BrowseOptions::default().copy(|b| b.node_class_mask(NodeClass::Object.bit()));
        assert_eq!(base.browse_direction(), BrowseDirection::Forward);
        assert_eq!(base.node_class_mask(), NodeClass::Object.bit());
    }

    #[test]
    fn copy_can_override_all_fields() {
        let custom = BrowseOptions::default().copy(|b| {
            b.browse_direction(BrowseDirection::Inverse)
                .reference_type_id(NodeId::new(0, 47u32))
                .include_subtypes(false)
                .node_class_mask(NodeClass::Variable.bit())
        });
        assert_eq!(custom.browse_direction(), BrowseDirection::Inverse);
        assert_eq!(custom.reference_type_id(), &NodeId::new(0, 47u32));
        assert!(!custom.include_subtypes());
        assert_eq!(custom.node_class_mask(), NodeClass::Variable.bit());
    }
}
