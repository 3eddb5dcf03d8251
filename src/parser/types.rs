//! Common types for parsed documents.

use super::frontmatter::Frontmatter;
use super::span::{Span, Spanned};

/// A document before its body is interpreted.
///
/// Every definition file has the same shape:
/// - YAML frontmatter with at least `name:`
/// - An optional body inside a ```` ```px ```` fence
#[derive(Debug)]
pub struct RawDocument {
    /// The document name (required, from frontmatter)
    pub name: Spanned<String>,

    /// All frontmatter key-value pairs
    pub frontmatter: Frontmatter,

    /// Body content, if present
    pub body: Option<Spanned<String>>,

    /// Span covering the entire document
    pub span: Span,
}
