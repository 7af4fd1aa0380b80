// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! `LocalizedText`, grounded on `opcua_types::localized_text::LocalizedText`.

/// Human readable text with an optional locale identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocalizedText {
    /// The locale this text is in, e.g. `"en-US"`. `None` if unspecified.
    pub locale: Option<String>,
    /// The text itself.
    pub text: Option<String>,
}

impl From<&str> for LocalizedText {
    fn from(value: &str) -> Self {
        Self {
            locale: None,
            text: Some(value.to_owned()),
        }
    }
}

impl From<String> for LocalizedText {
    fn from(value: String) -> Self {
        Self {
            locale: None,
            text: Some(value),
        }
    }
}
