//! Brush type for procedural material textures.
//!
//! A brush maps a grid cell to the colour and material tag to paint there.
//! Brushes are immutable trees: constant colours at the leaves, wrapped by
//! noise perturbation, speckle gates and painter's-order joins.
//!
//! Build brushes through [`Brushes`](crate::types::Brushes), which validates
//! every parameter before a brush exists.

use serde::Serialize;

use crate::types::{Colour, MaterialTag, NoiseLayer};

/// What a brush paints into one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Paint {
    pub colour: Colour,
    pub tag: MaterialTag,
}

impl Paint {
    pub const fn new(colour: Colour, tag: MaterialTag) -> Self {
        Self { colour, tag }
    }
}

/// A position-to-paint function.
#[derive(Debug, Clone, PartialEq)]
pub enum Brush {
    /// Fixed colour and tag; ignores position.
    Colour { colour: Colour, tag: MaterialTag },

    /// Base brush perturbed by noise layers applied in order.
    Noise {
        base: Box<Brush>,
        layers: Vec<NoiseLayer>,
    },

    /// Brushes painted in order; the last one that contributes wins.
    Join(Vec<Brush>),

    /// Inner brush painted only where the layer's gate passes.
    Speckle {
        layer: NoiseLayer,
        brush: Box<Brush>,
    },
}

impl Brush {
    /// Evaluate the brush at a cell.
    ///
    /// Returns `None` when nothing contributes at this cell; the sink must
    /// leave such cells unchanged.
    pub fn evaluate(&self, x: i64, y: i64) -> Option<Paint> {
        match self {
            Brush::Colour { colour, tag } => Some(Paint::new(*colour, *tag)),
            Brush::Noise { base, layers } => {
                let paint = base.evaluate(x, y)?;
                let colour = layers
                    .iter()
                    .fold(paint.colour, |colour, layer| layer.perturb(colour, layer.sample(x, y)));
                Some(Paint::new(colour, paint.tag))
            }
            Brush::Join(brushes) => brushes
                .iter()
                .fold(None, |painted, brush| brush.evaluate(x, y).or(painted)),
            Brush::Speckle { layer, brush } => {
                if layer.is_active(layer.sample(x, y)) {
                    brush.evaluate(x, y)
                } else {
                    None
                }
            }
        }
    }

    /// Short variant name.
    pub fn kind(&self) -> &'static str {
        match self {
            Brush::Colour { .. } => "color",
            Brush::Noise { .. } => "noise",
            Brush::Join(_) => "join",
            Brush::Speckle { .. } => "speckle",
        }
    }

    /// Total number of noise layers in the tree.
    pub fn layer_count(&self) -> usize {
        match self {
            Brush::Colour { .. } => 0,
            Brush::Noise { base, layers } => layers.len() + base.layer_count(),
            Brush::Join(brushes) => brushes.iter().map(Brush::layer_count).sum(),
            Brush::Speckle { brush, .. } => 1 + brush.layer_count(),
        }
    }

    /// Material tags that can appear in this brush's output.
    pub fn tags(&self) -> Vec<MaterialTag> {
        let mut tags = Vec::new();
        self.collect_tags(&mut tags);
        tags.sort();
        tags.dedup();
        tags
    }

    fn collect_tags(&self, out: &mut Vec<MaterialTag>) {
        match self {
            Brush::Colour { tag, .. } => out.push(*tag),
            Brush::Noise { base, .. } => base.collect_tags(out),
            Brush::Join(brushes) => brushes.iter().for_each(|b| b.collect_tags(out)),
            Brush::Speckle { brush, .. } => brush.collect_tags(out),
        }
    }
}
