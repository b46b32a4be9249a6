//! Read-only document store access and context assembly.
//!
//! The store holds the plain-text output of the upstream document parser,
//! one object per source document. This crate exposes the store behind the
//! [`DocumentStore`] trait (paginated listing plus per-object reads), ships
//! a filesystem-backed implementation, and builds the single context blob
//! that is fed to the prompt builder.

mod assemble;
mod errors;
mod fs_store;
mod store;

pub use assemble::assemble_context;
pub use errors::StoreError;
pub use fs_store::FsDocumentStore;
pub use store::{BoxFuture, DocumentStore, ListPage};
