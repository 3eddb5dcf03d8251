//! Noise layer configuration and the per-cell perturbation rule.
//!
//! A layer is one octave of perturbation: a seeded field, a threshold that
//! gates where it is active, and a force that says how far an active cell
//! is pulled toward the layer's target colour.

use crate::error::{Result, SandbrushError};
use crate::types::{Colour, NoiseField};

/// Declarative layer parameters, as written by callers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseLayerConfig {
    pub seed: u32,
    /// Noise wavelength in cells; must be strictly positive.
    pub factor: f64,
    /// Minimum noise value for the layer to be active, in `[0, 1]`.
    pub threshold: f64,
    /// Pull strength toward the target, in `[0, 1]`.
    pub force: f64,
    /// Colour an active layer pulls toward. Black when unset.
    pub target: Option<Colour>,
}

impl NoiseLayerConfig {
    pub fn new(seed: u32, factor: f64, threshold: f64, force: f64) -> Self {
        Self {
            seed,
            factor,
            threshold,
            force,
            target: None,
        }
    }

    /// Set the colour active cells are pulled toward.
    pub fn with_target(mut self, target: impl Into<Colour>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Check every invariant, returning the config unchanged when valid.
    pub fn validate(self) -> Result<Self> {
        if !(self.factor.is_finite() && self.factor > 0.0) {
            return Err(SandbrushError::Config {
                message: format!("Layer factor must be positive, got {}", self.factor),
                help: Some("factor is the noise wavelength in cells".to_string()),
            });
        }
        check_unit("threshold", self.threshold)?;
        check_unit("force", self.force)?;
        Ok(self)
    }
}

/// A validated layer with its noise field built once.
///
/// Shared read-only by every evaluation of the brush that owns it.
#[derive(Debug, Clone)]
pub struct NoiseLayer {
    config: NoiseLayerConfig,
    field: NoiseField,
}

impl NoiseLayer {
    /// Validate `config` and build its noise field.
    pub fn new(config: NoiseLayerConfig) -> Result<Self> {
        let config = config.validate()?;
        let field = NoiseField::new(config.seed, config.factor)?;
        Ok(Self { config, field })
    }

    pub fn config(&self) -> &NoiseLayerConfig {
        &self.config
    }

    pub fn target(&self) -> Colour {
        self.config.target.unwrap_or(Colour::BLACK)
    }

    /// Noise value of this layer's field at a cell.
    pub fn sample(&self, x: i64, y: i64) -> f64 {
        self.field.sample(x, y)
    }

    /// Whether the layer is active for noise value `n`.
    pub fn is_active(&self, n: f64) -> bool {
        n >= self.config.threshold
    }

    /// Blend strength for noise value `n`, or `None` when the gate fails.
    ///
    /// Ramps linearly from 0 at the threshold up to `force` at `n = 1`.
    pub fn strength(&self, n: f64) -> Option<f64> {
        if !self.is_active(n) {
            return None;
        }
        let threshold = self.config.threshold;
        let ramp = if threshold >= 1.0 {
            1.0
        } else {
            ((n - threshold) / (1.0 - threshold)).clamp(0.0, 1.0)
        };
        Some(self.config.force * ramp)
    }

    /// Perturb `colour` for noise value `n`. Inactive layers are no-ops.
    pub fn perturb(&self, colour: Colour, n: f64) -> Colour {
        match self.strength(n) {
            Some(strength) => colour.mix(self.target(), strength),
            None => colour,
        }
    }
}

impl PartialEq for NoiseLayer {
    // The field is derived from the config.
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

fn check_unit(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SandbrushError::Config {
            message: format!("Layer {} must be within [0, 1], got {}", name, value),
            help: None,
        })
    }
}
