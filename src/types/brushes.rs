//! Validated brush composition API.
//!
//! `Brushes` is the only way definition files and the CLI construct brushes:
//! every channel, layer and sequence is checked here, so a malformed texture
//! fails before any grid is touched.

use log::debug;

use crate::error::{Result, SandbrushError};
use crate::types::{Brush, Colour, MaterialTag, NoiseLayer, NoiseLayerConfig};

/// One noise layer or an ordered sequence of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoiseLayers(pub Vec<NoiseLayerConfig>);

impl From<NoiseLayerConfig> for NoiseLayers {
    fn from(layer: NoiseLayerConfig) -> Self {
        Self(vec![layer])
    }
}

impl From<Vec<NoiseLayerConfig>> for NoiseLayers {
    fn from(layers: Vec<NoiseLayerConfig>) -> Self {
        Self(layers)
    }
}

impl From<&[NoiseLayerConfig]> for NoiseLayers {
    fn from(layers: &[NoiseLayerConfig]) -> Self {
        Self(layers.to_vec())
    }
}

impl<const N: usize> From<[NoiseLayerConfig; N]> for NoiseLayers {
    fn from(layers: [NoiseLayerConfig; N]) -> Self {
        Self(layers.to_vec())
    }
}

/// What a noise brush perturbs: an existing brush or a literal colour.
#[derive(Debug, Clone, PartialEq)]
pub enum NoiseBase {
    Brush(Brush),
    Colour(Colour, MaterialTag),
}

impl NoiseBase {
    fn into_brush(self) -> Brush {
        match self {
            NoiseBase::Brush(brush) => brush,
            NoiseBase::Colour(colour, tag) => Brush::Colour { colour, tag },
        }
    }
}

impl From<Brush> for NoiseBase {
    fn from(brush: Brush) -> Self {
        NoiseBase::Brush(brush)
    }
}

/// Literal colours default to the wall tag.
impl From<Colour> for NoiseBase {
    fn from(colour: Colour) -> Self {
        NoiseBase::Colour(colour, MaterialTag::Wall)
    }
}

impl From<(u8, u8, u8)> for NoiseBase {
    fn from(rgb: (u8, u8, u8)) -> Self {
        Colour::from(rgb).into()
    }
}

impl From<[u8; 3]> for NoiseBase {
    fn from(rgb: [u8; 3]) -> Self {
        Colour::from(rgb).into()
    }
}

/// Brush constructors.
pub struct Brushes;

impl Brushes {
    /// Constant colour brush.
    ///
    /// Channels outside `[0, 255]` are a range error.
    pub fn color(r: i64, g: i64, b: i64, tag: MaterialTag) -> Result<Brush> {
        let colour = Colour::checked(r, g, b)?;
        Ok(Brush::Colour { colour, tag })
    }

    /// Perturb `base` with one or more noise layers.
    ///
    /// All layers are validated up front. With no layers the base brush is
    /// returned as-is.
    pub fn color_noise(layers: impl Into<NoiseLayers>, base: impl Into<NoiseBase>) -> Result<Brush> {
        let NoiseLayers(configs) = layers.into();
        let base = base.into().into_brush();

        if configs.is_empty() {
            return Ok(base);
        }

        let layers = configs
            .into_iter()
            .map(NoiseLayer::new)
            .collect::<Result<Vec<_>>>()?;
        debug!("noise brush over {} with {} layer(s)", base.kind(), layers.len());

        Ok(Brush::Noise {
            base: Box::new(base),
            layers,
        })
    }

    /// Like [`Brushes::color_noise`] with a literal base colour and explicit tag.
    pub fn color_noise_tagged(
        layers: impl Into<NoiseLayers>,
        colour: impl Into<Colour>,
        tag: MaterialTag,
    ) -> Result<Brush> {
        Self::color_noise(layers, NoiseBase::Colour(colour.into(), tag))
    }

    /// Paint `brushes` in order; later contributors win.
    ///
    /// An empty sequence is a config error.
    pub fn join(brushes: impl IntoIterator<Item = Brush>) -> Result<Brush> {
        let brushes: Vec<Brush> = brushes.into_iter().collect();
        if brushes.is_empty() {
            return Err(SandbrushError::Config {
                message: "join needs at least one brush".to_string(),
                help: Some("List the layers to stack, base first".to_string()),
            });
        }
        debug!("join of {} brush(es)", brushes.len());
        Ok(Brush::Join(brushes))
    }

    /// Paint `brush` only where `layer`'s gate passes.
    ///
    /// The layer's force and target are unused; only seed, factor and
    /// threshold shape the mask.
    pub fn speckle(layer: NoiseLayerConfig, brush: Brush) -> Result<Brush> {
        Ok(Brush::Speckle {
            layer: NoiseLayer::new(layer)?,
            brush: Box::new(brush),
        })
    }

    /// Names of the builtin material textures.
    pub fn names() -> &'static [&'static str] {
        &["wall", "rock", "metal", "rusty-metal", "sand", "soil"]
    }

    /// Build a builtin material texture by name.
    pub fn builtin(name: &str) -> Result<Brush> {
        match name {
            "wall" => Self::color_noise_tagged(
                [
                    NoiseLayerConfig::new(40, 60.0, 0.4, 0.8),
                    NoiseLayerConfig::new(41, 30.0, 0.4, 0.6),
                    NoiseLayerConfig::new(42, 15.0, 0.4, 0.4),
                ],
                (45, 45, 45),
                MaterialTag::Wall,
            ),
            "rock" => Self::join([
                Self::color_noise_tagged(
                    [
                        NoiseLayerConfig::new(40, 60.0, 0.4, 0.8),
                        NoiseLayerConfig::new(41, 10.0, 0.4, 0.3),
                    ],
                    (79, 69, 63),
                    MaterialTag::Rock,
                )?,
                Self::speckle(
                    NoiseLayerConfig::new(5, 2.0, 0.8, 1.0),
                    Self::color(96, 85, 78, MaterialTag::Rock)?,
                )?,
                Self::speckle(
                    NoiseLayerConfig::new(6, 3.0, 0.85, 1.0),
                    Self::color(52, 45, 41, MaterialTag::Rock)?,
                )?,
            ]),
            "metal" => {
                let base = Colour::rgb(115, 120, 130);
                Self::color_noise_tagged(
                    [
                        NoiseLayerConfig::new(60, 80.0, 0.3, 0.4),
                        NoiseLayerConfig::new(61, 4.0, 0.7, 0.5).with_target(base.lighten(40.0)),
                    ],
                    base,
                    MaterialTag::Metal,
                )
            }
            "rusty-metal" => Self::join([
                Self::builtin("metal")?,
                Self::speckle(
                    NoiseLayerConfig::new(70, 20.0, 0.65, 1.0),
                    Self::color_noise_tagged(
                        NoiseLayerConfig::new(71, 3.0, 0.3, 0.5),
                        (140, 72, 40),
                        MaterialTag::Metal,
                    )?,
                )?,
            ]),
            "sand" => Self::color_noise_tagged(
                [
                    NoiseLayerConfig::new(10, 1.0, 0.5, 0.3),
                    NoiseLayerConfig::new(11, 40.0, 0.6, 0.2),
                ],
                (214, 181, 120),
                MaterialTag::Sand,
            ),
            "soil" => {
                let base = Colour::rgb(92, 64, 45);
                Self::color_noise_tagged(
                    [
                        NoiseLayerConfig::new(20, 1.5, 0.5, 0.4),
                        NoiseLayerConfig::new(21, 25.0, 0.5, 0.3).with_target(base.lighten(25.0)),
                    ],
                    base,
                    MaterialTag::Soil,
                )
            }
            _ => Err(SandbrushError::Config {
                message: format!("Unknown builtin brush: {}", name),
                help: Some(format!("Builtins: {}", Self::names().join(", "))),
            }),
        }
    }

    /// Get a builtin brush by name.
    pub fn get(name: &str) -> Option<Brush> {
        Self::builtin(name).ok()
    }
}
