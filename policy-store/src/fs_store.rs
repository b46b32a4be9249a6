//! Filesystem-backed document store.

use std::path::PathBuf;

use tracing::trace;

use crate::{
    errors::StoreError,
    store::{BoxFuture, DocumentStore, ListPage},
};

/// Document store rooted at a local directory of parsed `.txt` files.
///
/// Listing returns fixed-size pages of top-level file names with the
/// configured suffix, in lexicographic order; the continuation token is the
/// last key of the previous page. Subdirectories and other suffixes are
/// ignored.
#[derive(Debug, Clone)]
pub struct FsDocumentStore {
    root: PathBuf,
    suffix: String,
    page_size: usize,
}

impl FsDocumentStore {
    /// Default number of keys per listing page.
    pub const DEFAULT_PAGE_SIZE: usize = 1000;

    /// Store over `root`, listing `.txt` objects.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            suffix: ".txt".to_string(),
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the listing page size (mainly for tests).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Full sorted key listing; pagination slices into this.
    async fn list_keys(&self) -> Result<Vec<String>, StoreError> {
        let as_list_err = |source| StoreError::List {
            store: self.root.display().to_string(),
            source,
        };

        let mut dir = tokio::fs::read_dir(&self.root).await.map_err(as_list_err)?;
        let mut keys = Vec::new();
        while let Some(entry) = dir.next_entry().await.map_err(as_list_err)? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.ends_with(&self.suffix) {
                continue;
            }
            let is_file = entry.file_type().await.map(|t| t.is_file()).unwrap_or(false);
            if is_file {
                keys.push(name);
            }
        }
        keys.sort();
        trace!(store = %self.root.display(), total = keys.len(), "listed store keys");
        Ok(keys)
    }
}

impl DocumentStore for FsDocumentStore {
    fn list_page<'a>(
        &'a self,
        token: Option<&'a str>,
    ) -> BoxFuture<'a, Result<ListPage, StoreError>> {
        Box::pin(async move {
            let keys = self.list_keys().await?;
            // Resume strictly after the token so a key removed between
            // pages does not derail the walk.
            let start = match token {
                None => 0,
                Some(t) => keys.iter().position(|k| k.as_str() > t).unwrap_or(keys.len()),
            };
            let end = (start + self.page_size).min(keys.len());
            let page: Vec<String> = keys[start..end].to_vec();
            let next_token = if end < keys.len() {
                page.last().cloned()
            } else {
                None
            };
            Ok(ListPage {
                keys: page,
                next_token,
            })
        })
    }

    fn read<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<String, StoreError>> {
        Box::pin(async move {
            let path = self.root.join(key);
            tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| StoreError::Read {
                    key: key.to_string(),
                    source,
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store(names: &[(&str, &str)]) -> (tempfile::TempDir, FsDocumentStore) {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in names {
            std::fs::write(dir.path().join(name), content).unwrap();
        }
        let store = FsDocumentStore::new(dir.path());
        (dir, store)
    }

    #[tokio::test]
    async fn lists_only_txt_files_sorted() {
        let (_dir, store) = seeded_store(&[
            ("b.txt", "bee"),
            ("a.txt", "ay"),
            ("notes.md", "ignored"),
        ]);
        let page = store.list_page(None).await.unwrap();
        assert_eq!(page.keys, vec!["a.txt", "b.txt"]);
        assert!(page.next_token.is_none());
    }

    #[tokio::test]
    async fn paginates_with_continuation_tokens() {
        let (_dir, store) = seeded_store(&[
            ("a.txt", "1"),
            ("b.txt", "2"),
            ("c.txt", "3"),
        ]);
        let store = store.with_page_size(2);

        let first = store.list_page(None).await.unwrap();
        assert_eq!(first.keys, vec!["a.txt", "b.txt"]);
        let token = first.next_token.expect("more pages expected");

        let second = store.list_page(Some(&token)).await.unwrap();
        assert_eq!(second.keys, vec!["c.txt"]);
        assert!(second.next_token.is_none());
    }

    #[tokio::test]
    async fn empty_store_yields_empty_page() {
        let (_dir, store) = seeded_store(&[]);
        let page = store.list_page(None).await.unwrap();
        assert!(page.keys.is_empty());
        assert!(page.next_token.is_none());
    }

    #[tokio::test]
    async fn read_returns_content_and_missing_key_errors() {
        let (_dir, store) = seeded_store(&[("policy.txt", "Claims must be filed within 30 days.")]);
        let text = store.read("policy.txt").await.unwrap();
        assert_eq!(text, "Claims must be filed within 30 days.");

        let err = store.read("gone.txt").await.unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }

    #[tokio::test]
    async fn missing_root_is_a_list_error() {
        let store = FsDocumentStore::new("/nonexistent/policy-store-root");
        let err = store.list_page(None).await.unwrap_err();
        assert!(matches!(err, StoreError::List { .. }));
    }
}
