//! Context assembly: every text object concatenated into one prompt blob.

use tracing::{debug, warn};

use crate::{errors::StoreError, store::DocumentStore};

/// Build the context blob fed to the prompt builder.
///
/// Walks every listing page and appends each object as a delimited block:
///
/// ```text
/// \n\n--- {key} ---\n\n{content}
/// ```
///
/// A failing read degrades to an inline error marker naming the key and the
/// error, and assembly continues with the remaining objects. A store with
/// zero text objects yields an empty blob. Listing failures abort the run.
pub async fn assemble_context<S>(store: &S) -> Result<String, StoreError>
where
    S: DocumentStore + ?Sized,
{
    let mut blob = String::new();
    let mut token: Option<String> = None;
    let mut objects = 0usize;
    let mut failed = 0usize;

    loop {
        let page = store.list_page(token.as_deref()).await?;
        for key in &page.keys {
            objects += 1;
            match store.read(key).await {
                Ok(text) => {
                    blob.push_str(&format!("\n\n--- {key} ---\n\n"));
                    blob.push_str(&text);
                }
                Err(err) => {
                    failed += 1;
                    warn!(%key, error = %err, "object read failed; inlining error marker");
                    blob.push_str(&format!("\n\n--- Error reading {key}: {err} ---\n\n"));
                }
            }
        }
        match page.next_token {
            Some(next) => token = Some(next),
            None => break,
        }
    }

    debug!(objects, failed, context_len = blob.len(), "context assembled");
    Ok(blob)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs_store::FsDocumentStore;
    use crate::store::{BoxFuture, ListPage};

    #[tokio::test]
    async fn concatenates_documents_with_delimiters() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "Section A.").unwrap();
        std::fs::write(dir.path().join("b.txt"), "Section B.").unwrap();
        let store = FsDocumentStore::new(dir.path());

        let blob = assemble_context(&store).await.unwrap();
        assert_eq!(
            blob,
            "\n\n--- a.txt ---\n\nSection A.\n\n--- b.txt ---\n\nSection B."
        );
    }

    #[tokio::test]
    async fn empty_store_yields_empty_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsDocumentStore::new(dir.path());
        let blob = assemble_context(&store).await.unwrap();
        assert!(blob.is_empty());
    }

    #[tokio::test]
    async fn walks_all_pages() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.txt", "b.txt", "c.txt"] {
            std::fs::write(dir.path().join(name), name).unwrap();
        }
        let store = FsDocumentStore::new(dir.path()).with_page_size(1);

        let blob = assemble_context(&store).await.unwrap();
        for name in ["a.txt", "b.txt", "c.txt"] {
            assert!(blob.contains(&format!("--- {name} ---")));
        }
    }

    /// Store whose reads always fail, to exercise the inline marker path.
    struct FailingReads(FsDocumentStore);

    impl DocumentStore for FailingReads {
        fn list_page<'a>(
            &'a self,
            token: Option<&'a str>,
        ) -> BoxFuture<'a, Result<ListPage, StoreError>> {
            self.0.list_page(token)
        }

        fn read<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<String, StoreError>> {
            Box::pin(async move {
                Err(StoreError::Read {
                    key: key.to_string(),
                    source: std::io::Error::other("disk on fire"),
                })
            })
        }
    }

    #[tokio::test]
    async fn failed_read_becomes_inline_marker_and_assembly_continues() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.txt"), "unreachable").unwrap();
        std::fs::write(dir.path().join("worse.txt"), "unreachable").unwrap();
        let store = FailingReads(FsDocumentStore::new(dir.path()));

        let blob = assemble_context(&store).await.unwrap();
        assert!(blob.contains("--- Error reading bad.txt:"));
        assert!(blob.contains("--- Error reading worse.txt:"));
        assert!(blob.contains("disk on fire"));
    }
}
