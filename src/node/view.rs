// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! `View` node records, grounded on `opcua_nodes::view::View`'s `ContainsNoLoops`/
//! `EventNotifier` pair.

use super::{BaseAttributes, NodeBase};
use crate::types::NodeClass;

/// A resolved View node.
#[derive(Debug, Clone)]
pub struct ViewNode {
    pub(crate) base: BaseAttributes,
    /// Whether following references within this view is guaranteed not to loop.
    pub contains_no_loops: bool,
    /// Whether this view can be used to subscribe to events.
    pub event_notifier: u8,
}

impl ViewNode {
    /// Build a new view record.
    pub fn new(base: BaseAttributes, contains_no_loops: bool, event_notifier: u8) -> Self {
        Self {
            base,
            contains_no_loops,
            event_notifier,
        }
    }
}

impl NodeBase for ViewNode {
    fn node_class(&self) -> NodeClass {
        NodeClass::View
    }

    fn base(&self) -> &BaseAttributes {
        &self.base
    }
}
