//! Typed errors for document-store access.

use thiserror::Error;

/// Errors raised by [`crate::DocumentStore`] implementations.
///
/// Listing errors abort an assembly run; read errors are caught per object
/// by the assembler and degrade to inline markers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store itself could not be listed (missing root, bad permissions).
    #[error("failed to list store `{store}`: {source}")]
    List {
        /// Store identifier (directory path for the fs backend).
        store: String,
        #[source]
        source: std::io::Error,
    },

    /// A single object could not be read or decoded as UTF-8 text.
    #[error("failed to read object `{key}`: {source}")]
    Read {
        /// Object key within the store.
        key: String,
        #[source]
        source: std::io::Error,
    },
}
