//! Store interface: paginated listing plus per-object reads.

use std::{future::Future, pin::Pin};

use crate::errors::StoreError;

/// Boxed future used by the async trait methods below.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One page of a store listing.
#[derive(Debug, Clone)]
pub struct ListPage {
    /// Object keys on this page, in listing order.
    pub keys: Vec<String>,
    /// Continuation token for the next page; `None` on the last page.
    pub next_token: Option<String>,
}

/// Read-only object store holding parsed policy documents.
///
/// Implement this trait to plug in a remote backend (e.g., an S3-compatible
/// bucket). Listing is paginated and filtered to plain-text objects; the
/// order is whatever the backend yields, but it must be stable within one
/// walk of the pages. The store is never written through this interface.
pub trait DocumentStore: Send + Sync {
    /// Fetch one listing page. `token` of `None` starts a fresh listing;
    /// otherwise it must be a `next_token` from the previous page.
    fn list_page<'a>(
        &'a self,
        token: Option<&'a str>,
    ) -> BoxFuture<'a, Result<ListPage, StoreError>>;

    /// Read the full text content of one object.
    fn read<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<String, StoreError>>;
}
