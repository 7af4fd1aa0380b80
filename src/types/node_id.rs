// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! A minimal, value-typed `NodeId`.
//!
//! The core never puts a `NodeId` on the wire itself — that's the `Client`'s job — so this
//! is just the identifier shape, without the binary/JSON/XML codec machinery a full OPC UA
//! stack carries alongside it.

use std::fmt;

use uuid::Uuid;

/// The four identifier kinds an OPC UA `NodeId` can carry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// `i=123`
    Numeric(u32),
    /// `s=...`
    String(String),
    /// `g=...`
    Guid(Uuid),
    /// `b=...`, base64 in display form
    Opaque(Vec<u8>),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(v) => write!(f, "i={v}"),
            Identifier::String(v) => write!(f, "s={v}"),
            Identifier::Guid(v) => write!(f, "g={v}"),
            Identifier::Opaque(v) => write!(f, "b={}", hex_encode(v)),
        }
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// A value-typed OPC UA node identifier: `(namespaceIndex, identifier)`.
///
/// Equality and hashing are value-based, matching the server's notion of node identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId {
    /// The namespace index this id is scoped to.
    pub namespace: u16,
    /// The identifier within that namespace.
    pub identifier: Identifier,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace == 0 {
            write!(f, "{}", self.identifier)
        } else {
            write!(f, "ns={};{}", self.namespace, self.identifier)
        }
    }
}

impl NodeId {
    /// Construct a numeric node id in the given namespace.
    pub fn new(namespace: u16, identifier: impl Into<Identifier>) -> Self {
        Self {
            namespace,
            identifier: identifier.into(),
        }
    }

    /// The well-known `NULL` node id: numeric zero in namespace zero.
    pub fn null() -> Self {
        Self {
            namespace: 0,
            identifier: Identifier::Numeric(0),
        }
    }

    /// Whether this is the `NULL` node id.
    pub fn is_null(&self) -> bool {
        matches!(self.identifier, Identifier::Numeric(0)) && self.namespace == 0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::null()
    }
}

impl From<&NodeId> for NodeId {
    fn from(id: &NodeId) -> Self {
        id.clone()
    }
}

impl From<u32> for Identifier {
    fn from(v: u32) -> Self {
        Identifier::Numeric(v)
    }
}

impl From<&str> for Identifier {
    fn from(v: &str) -> Self {
        Identifier::String(v.to_owned())
    }
}

impl From<String> for Identifier {
    fn from(v: String) -> Self {
        Identifier::String(v)
    }
}

impl From<Uuid> for Identifier {
    fn from(v: Uuid) -> Self {
        Identifier::Guid(v)
    }
}
