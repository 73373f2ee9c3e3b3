//! Markdown API documentation for rpcgen schemas.
//!
//! Two layouts are supported: one page per type and method, or a single
//! `types.md` and `methods.md` pair with front matter and in-page anchors.

mod docs;
mod page;

pub use docs::{Layout, MarkdownDocs};
