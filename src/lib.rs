//! sandbrush - Procedural material brushes for falling-sand grids
//!
//! Brushes map grid cells to a colour and material tag. They are composed
//! from constant colours, seeded noise layers and painter's-order joins,
//! then filled into a [`Canvas`] or any other sink that calls
//! [`Brush::evaluate`] per cell.
//!
//! ```
//! use sandbrush::{Brushes, Canvas, MaterialTag, NoiseLayerConfig};
//!
//! let wall = Brushes::color_noise(
//!     NoiseLayerConfig::new(40, 60.0, 0.4, 0.8),
//!     Brushes::color(79, 69, 63, MaterialTag::Wall)?,
//! )?;
//!
//! let mut canvas = Canvas::new(32, 32);
//! assert_eq!(canvas.fill(&wall), 32 * 32);
//! # Ok::<(), sandbrush::SandbrushError>(())
//! ```

pub mod cli;
pub mod discovery;
pub mod error;
pub mod parser;
pub mod render;
pub mod types;

pub use error::{Result, SandbrushError};
pub use parser::{parse_brush_expr, parse_texture_file, Texture};
pub use render::{write_png, Canvas, TextureMeta};
pub use types::{
    Brush, Brushes, Colour, MaterialTag, NoiseBase, NoiseField, NoiseLayer, NoiseLayerConfig,
    NoiseLayers, Paint,
};
