// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! `QualifiedName`, grounded on `opcua_types::qualified_name::QualifiedName`.

use std::fmt;

/// A name qualified by a namespace, e.g. `0:Objects`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QualifiedName {
    /// The namespace index the name is scoped to.
    pub namespace_index: u16,
    /// The name itself.
    pub name: String,
}

impl QualifiedName {
    /// Build a qualified name in the given namespace.
    pub fn new(namespace_index: u16, name: impl Into<String>) -> Self {
        Self {
            namespace_index,
            name: name.into(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace_index, self.name)
    }
}

impl From<&str> for QualifiedName {
    fn from(value: &str) -> Self {
        Self::new(0, value)
    }
}
