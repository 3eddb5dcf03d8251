//! Parser modules for sandbrush definition files.
//!
//! This module parses markdown-style texture files. Each file can contain
//! one or more document definitions.
//!
//! # Document Structure
//!
//! Each document has:
//! - YAML frontmatter between `---` markers (must include `name:`, may set
//!   a preview `width:` and `height:`)
//! - A brush expression inside a px code fence
//!
//! # Usage
//!
//! ```ignore
//! use sandbrush::parser::parse_texture_file;
//!
//! let source = std::fs::read_to_string("textures/walls.texture.md")?;
//! for texture in parse_texture_file(&source)? {
//!     println!("Found: {}", texture.name);
//! }
//! ```

mod body;
mod document;
mod frontmatter;
pub mod span;
pub mod texture;
mod types;

pub use document::parse_documents;
pub use span::{Location, Span, Spanned};
pub use texture::{parse_brush_expr, parse_texture_file, Texture};
pub use types::RawDocument;
