//! Rendering module for sandbrush.
//!
//! A `Canvas` is the sink brushes are filled into; it can then be written
//! out as a PNG with a JSON summary alongside.

mod canvas;
mod meta;
mod png;

pub use canvas::Canvas;
pub use meta::{write_meta_json, TextureMeta};
pub use png::{to_image, write_png};
