//! Core domain types for sandbrush.
//!
//! This module contains the fundamental types of the brush pipeline:
//! - `Colour` - RGB colour values
//! - `MaterialTag` - Opaque material identifiers for the host simulation
//! - `NoiseField` / `NoiseLayer` - Seeded noise and the perturbation rule
//! - `Brush` - The position-to-paint sum type
//! - `Brushes` - Validated constructors and builtin textures

mod brush;
mod brushes;
mod colour;
pub mod field;
mod layer;
mod material;

pub use brush::{Brush, Paint};
pub use brushes::{Brushes, NoiseBase, NoiseLayers};
pub use colour::Colour;
pub use field::NoiseField;
pub use layer::{NoiseLayer, NoiseLayerConfig};
pub use material::MaterialTag;
