// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! `Variant` and `DataValue`, grounded on `opcua_types::variant::Variant`, trimmed to the
//! scalar/array kinds node attributes actually carry.

use super::{LocalizedText, NodeId, QualifiedName};

/// A dynamically-typed attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    /// No value. Equivalent to a Null value (OPC UA Part 6 §5.1.6).
    Empty,
    /// Boolean.
    Boolean(bool),
    /// Byte (u8).
    Byte(u8),
    /// 32-bit signed integer — used for the `NodeClass` attribute.
    Int32(i32),
    /// 32-bit unsigned integer — used for write masks.
    UInt32(u32),
    /// 64-bit float.
    Double(f64),
    /// UTF-8 string.
    String(String),
    /// Node id.
    NodeId(Box<NodeId>),
    /// Qualified name.
    QualifiedName(Box<QualifiedName>),
    /// Localized text.
    LocalizedText(Box<LocalizedText>),
    /// Array of optional strings — used for `NamespaceArray`, where a null entry is legal.
    StringArray(Vec<Option<String>>),
    /// Array of u32 — used for `ArrayDimensions`.
    UInt32Array(Vec<u32>),
}

impl Variant {
    /// Extract an `i32`, if this variant holds one.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Variant::Int32(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract a `u32`, if this variant holds one.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Variant::UInt32(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract a `u8`, if this variant holds one.
    pub fn as_byte(&self) -> Option<u8> {
        match self {
            Variant::Byte(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract a `bool`, if this variant holds one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Variant::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract an `f64`, if this variant holds one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Variant::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract a `NodeId` by reference, if this variant holds one.
    pub fn as_node_id(&self) -> Option<&NodeId> {
        match self {
            Variant::NodeId(v) => Some(v),
            _ => None,
        }
    }

    /// Extract a `QualifiedName` by reference, if this variant holds one.
    pub fn as_qualified_name(&self) -> Option<&QualifiedName> {
        match self {
            Variant::QualifiedName(v) => Some(v),
            _ => None,
        }
    }

    /// Extract a `LocalizedText` by reference, if this variant holds one.
    pub fn as_localized_text(&self) -> Option<&LocalizedText> {
        match self {
            Variant::LocalizedText(v) => Some(v),
            _ => None,
        }
    }

    /// Extract a string array, if this variant holds one (the shape `NamespaceArray` comes back
    /// as).
    pub fn as_string_array(&self) -> Option<&[Option<String>]> {
        match self {
            Variant::StringArray(v) => Some(v),
            _ => None,
        }
    }

    /// Extract a u32 array, if this variant holds one.
    pub fn as_u32_array(&self) -> Option<&[u32]> {
        match self {
            Variant::UInt32Array(v) => Some(v),
            _ => None,
        }
    }
}

impl From<bool> for Variant {
    fn from(v: bool) -> Self {
        Variant::Boolean(v)
    }
}
impl From<u8> for Variant {
    fn from(v: u8) -> Self {
        Variant::Byte(v)
    }
}
impl From<i32> for Variant {
    fn from(v: i32) -> Self {
        Variant::Int32(v)
    }
}
impl From<u32> for Variant {
    fn from(v: u32) -> Self {
        Variant::UInt32(v)
    }
}
impl From<f64> for Variant {
    fn from(v: f64) -> Self {
        Variant::Double(v)
    }
}
impl From<NodeId> for Variant {
    fn from(v: NodeId) -> Self {
        Variant::NodeId(Box::new(v))
    }
}
impl From<QualifiedName> for Variant {
    fn from(v: QualifiedName) -> Self {
        Variant::QualifiedName(Box::new(v))
    }
}
impl From<LocalizedText> for Variant {
    fn from(v: LocalizedText) -> Self {
        Variant::LocalizedText(Box::new(v))
    }
}

use crate::error::StatusCode;

/// A value with a service-level status, as returned from a `Read`.
///
/// Timestamps are deliberately absent: the resolver always reads with
/// `TimestampsToReturn::Neither`, so there's nothing useful to carry here.
#[derive(Debug, Clone)]
pub struct DataValue {
    /// The value itself. `None` if the status was bad.
    pub value: Option<Variant>,
    /// The status of this individual read.
    pub status: StatusCode,
}

impl DataValue {
    /// Build a good data value.
    pub fn good(value: Variant) -> Self {
        Self {
            value: Some(value),
            status: StatusCode::good(),
        }
    }

    /// Build a data value carrying a bad status and no value.
    pub fn bad(status: StatusCode) -> Self {
        Self {
            value: None,
            status,
        }
    }

    /// The value, if the status was good.
    pub fn value(&self) -> Option<&Variant> {
        if self.status.is_good() {
            self.value.as_ref()
        } else {
            None
        }
    }
}
