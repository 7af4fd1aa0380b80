// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The server's namespace array, as an ordered index → uri mapping.
//!
//! A uri-keyed hash map (indexing uri → index, built for node-set import where every namespace
//! is assigned once and never revisited) is the wrong shape here. Localization needs the
//! opposite direction — rebuild the table *from* the `NamespaceArray` attribute, in index order —
//! so this keeps an ordered `Vec` instead.

/// Index ↔ uri mapping used to compress node identifiers on the wire.
///
/// Index 0 is reserved for `http://opcfoundation.org/UA/` and is always present.
#[derive(Debug, Clone)]
pub struct NamespaceTable {
    uris: Vec<Option<String>>,
}

const OPC_UA_NAMESPACE: &str = "http://opcfoundation.org/UA/";

impl Default for NamespaceTable {
    fn default() -> Self {
        Self::new()
    }
}

impl NamespaceTable {
    /// Create a table containing only the reserved index-0 namespace.
    pub fn new() -> Self {
        Self {
            uris: vec![Some(OPC_UA_NAMESPACE.to_owned())],
        }
    }

    /// Look up the uri for the given namespace index.
    pub fn uri(&self, index: u16) -> Option<&str> {
        self.uris.get(index as usize)?.as_deref()
    }

    /// Look up the namespace index for the given uri.
    pub fn index(&self, uri: &str) -> Option<u16> {
        self.uris
            .iter()
            .position(|u| u.as_deref() == Some(uri))
            .map(|i| i as u16)
    }

    /// Rebuild the table from a server-returned `NamespaceArray`, in index order.
    ///
    /// Clear, then for each index `i < u16::MAX` with a non-null, not-already-present
    /// uri at that position, insert `(i, uri)`.
    pub fn rebuild_from_array(&mut self, array: &[Option<String>]) {
        self.uris.clear();
        for (i, uri) in array.iter().enumerate() {
            if i >= u16::MAX as usize {
                break;
            }
            match uri {
                Some(u) if !self.uris.iter().any(|existing| existing.as_deref() == Some(u.as_str())) => {
                    if self.uris.len() <= i {
                        self.uris.resize(i + 1, None);
                    }
                    self.uris[i] = Some(u.clone());
                }
                _ => {
                    if self.uris.len() <= i {
                        self.uris.resize(i + 1, None);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_reserved_namespace() {
        let table = NamespaceTable::new();
        assert_eq!(table.uri(0), Some(OPC_UA_NAMESPACE));
        assert_eq!(table.index(OPC_UA_NAMESPACE), Some(0));
    }

    #[test]
    fn rebuild_preserves_index_order() {
        let mut table = NamespaceTable::new();
        table.rebuild_from_array(&[
            Some(OPC_UA_NAMESPACE.to_owned()),
            Some("urn:x".to_owned()),
        ]);
        assert_eq!(table.index("urn:x"), Some(1));
        assert_eq!(table.uri(1), Some("urn:x"));
    }

    #[test]
    fn rebuild_skips_duplicate_uris() {
        let mut table = NamespaceTable::new();
        table.rebuild_from_array(&[
            Some(OPC_UA_NAMESPACE.to_owned()),
            Some(OPC_UA_NAMESPACE.to_owned()),
            Some("urn:y".to_owned()),
        ]);
        // the duplicate at index 1 is dropped, but index 2 still holds its own uri
        assert_eq!(table.uri(1), None);
        assert_eq!(table.index("urn:y"), Some(2));
    }
}
