//! Seeded 2D noise field.
//!
//! A `NoiseField` wraps a Perlin gradient-noise generator whose permutation
//! table is built once from the seed. Sampling is a pure function of
//! `(seed, factor, x, y)`, so textures are reproducible from their config alone.

use std::fmt;

use ::noise::{NoiseFn, Perlin};

use crate::error::{Result, SandbrushError};

/// Logistic spread applied to raw Perlin output.
///
/// Perlin values pile up around zero; squashing them through a logistic curve
/// of this width spreads them to a near-uniform distribution over `(0, 1)`, so
/// a threshold `t` gates roughly `1 - t` of all cells.
const SPREAD: f64 = 0.27;

/// Deterministic scalar field over the grid, with values in `(0, 1)`.
///
/// The endpoints are never reached: a threshold of 1 gates out every cell.
#[derive(Clone)]
pub struct NoiseField {
    seed: u32,
    factor: f64,
    perlin: Perlin,
}

impl NoiseField {
    /// Create a field for `seed`, stretched by `factor` cells per noise period.
    ///
    /// Larger factors give smoother, larger-scale noise. `factor` must be a
    /// finite, strictly positive number.
    pub fn new(seed: u32, factor: f64) -> Result<Self> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(SandbrushError::Config {
                message: format!("Noise factor must be positive, got {}", factor),
                help: Some("factor is the noise wavelength in cells, e.g. 10".to_string()),
            });
        }

        Ok(Self {
            seed,
            factor,
            perlin: Perlin::new(seed),
        })
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Sample the field at a grid cell.
    ///
    /// Cells are sampled at their centres; integer lattice points of Perlin
    /// noise are always zero, which would flatten a `factor` of 1.
    pub fn sample(&self, x: i64, y: i64) -> f64 {
        self.sample_at(x as f64 + 0.5, y as f64 + 0.5)
    }

    /// Sample the field at an arbitrary real position (in cell units).
    pub fn sample_at(&self, x: f64, y: f64) -> f64 {
        let raw = self.perlin.get([x / self.factor, y / self.factor]);
        equalise(raw)
    }
}

/// Strictly monotone map from raw Perlin output in `[-1, 1]` into `(0, 1)`.
fn equalise(raw: f64) -> f64 {
    1.0 / (1.0 + (-raw / SPREAD).exp())
}

impl fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseField")
            .field("seed", &self.seed)
            .field("factor", &self.factor)
            .finish_non_exhaustive()
    }
}

/// One-off sample of the field for `(seed, factor)` at a grid cell.
///
/// Prefer building a `NoiseField` once when sampling many cells.
pub fn sample(seed: u32, factor: f64, x: i64, y: i64) -> Result<f64> {
    Ok(NoiseField::new(seed, factor)?.sample(x, y))
}
