// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The error taxonomy: a minimal `StatusCode`/`ServiceError` pair standing in for the wire
//! stack's codegen-generated status table, and the `ResolveError` the façade actually surfaces.
//! Grounded on `async_opcua_types::errors::OpcUaError`'s shape — a `thiserror` enum with a
//! `StatusCodeError`-style variant and a `From` conversion into it.

use std::fmt;

use thiserror::Error;

/// A service-level outcome status.
///
/// `async_opcua_types::status_codes::StatusCode` is generated from the full OPC UA status
/// table (several hundred values); this crate only ever names a handful, so it's a small closed
/// enum with a `Good` value rather than a generated wrapper around a raw `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// The operation succeeded.
    Good,
    /// The server does not support the requested service.
    BadServiceUnsupported,
    /// The requested node does not exist.
    BadNodeIdUnknown,
    /// The requested node class is not valid for this operation.
    BadNodeClassInvalid,
    /// The requested attribute is not supported by this node.
    BadAttributeIdInvalid,
    /// The operation timed out.
    BadTimeout,
}

impl StatusCode {
    /// The `Good` status.
    pub const fn good() -> Self {
        StatusCode::Good
    }

    /// Whether this status indicates success.
    pub fn is_good(self) -> bool {
        matches!(self, StatusCode::Good)
    }

    /// Whether this status indicates failure.
    pub fn is_bad(self) -> bool {
        !self.is_good()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// An error returned by the `Client`'s Read or Browse service.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("service call returned {0}")]
pub struct ServiceError(pub StatusCode);

impl ServiceError {
    /// Build a service error from a bad status. Panics in debug builds if given `Good`, since a
    /// `ServiceError` asserts failure by construction.
    pub fn new(status: StatusCode) -> Self {
        debug_assert!(status.is_bad(), "ServiceError constructed from a good status");
        Self(status)
    }

    /// The underlying status code.
    pub fn status(&self) -> StatusCode {
        self.0
    }
}

/// Errors surfaced by the resolver's public operations.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// A base-attribute read returned a null or unrecognized node class.
    #[error("node has no valid NodeClass attribute")]
    BadNodeClassInvalid,
    /// Any other failure that doesn't fit a more specific variant, including a constructor
    /// invoked against a `NodeClass`/variant mismatch.
    #[error("unexpected error: {0}")]
    BadUnexpectedError(String),
    /// A Read or Browse returned a bad status, propagated verbatim from the `Client`.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ResolveError {
    /// Build an unexpected-error variant from a message, wrapping an ad hoc diagnostic string
    /// rather than inventing a variant per call site.
    pub fn unexpected(message: impl Into<String>) -> Self {
        ResolveError::BadUnexpectedError(message.into())
    }
}
