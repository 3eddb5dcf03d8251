//! Texture file parser.
//!
//! Parses `.texture.md` files into named brushes. The body of each document
//! is a YAML brush expression:
//!
//! ```yaml
//! join:
//!   - noise:
//!       layers:
//!         - { seed: 40, factor: 60, threshold: 0.4, force: 0.8 }
//!       base: [79, 69, 63]
//!       tag: rock
//!   - speckle:
//!       layer: { seed: 5, factor: 2, threshold: 0.8, force: 1 }
//!       brush: { color: "#60554E", tag: rock }
//! ```
//!
//! Expressions are compiled only through [`Brushes`], so they are validated
//! exactly like brushes built in code.

use serde::Deserialize;

use crate::error::{Result, SandbrushError};
use crate::parser::span::Span;
use crate::parser::{parse_documents, RawDocument};
use crate::types::{Brush, Brushes, Colour, MaterialTag, NoiseBase, NoiseLayerConfig};

/// A named brush read from a texture file.
#[derive(Debug, Clone)]
pub struct Texture {
    pub name: String,
    pub brush: Brush,
    /// Preview width from frontmatter, if given.
    pub width: Option<u32>,
    /// Preview height from frontmatter, if given.
    pub height: Option<u32>,
    /// Where the document sits in its file.
    pub span: Span,
}

impl Texture {
    /// Preview size, falling back to the given default for unset dimensions.
    pub fn size_or(&self, width: u32, height: u32) -> (u32, u32) {
        (self.width.unwrap_or(width), self.height.unwrap_or(height))
    }
}

/// Parse a texture file into one or more textures.
pub fn parse_texture_file(source: &str) -> Result<Vec<Texture>> {
    parse_documents(source)?
        .into_iter()
        .map(parse_texture_document)
        .collect()
}

/// Parse and compile a standalone brush expression.
pub fn parse_brush_expr(yaml: &str) -> Result<Brush> {
    let def: BrushDef = serde_yaml::from_str(yaml).map_err(|e| yaml_error(e, 0))?;
    compile(def)
}

fn parse_texture_document(doc: RawDocument) -> Result<Texture> {
    let name = doc.name.value.clone();
    let context = format!("texture '{}' (line {})", name, doc.span.start.line);
    check_name(&name).map_err(|e| with_context(e, &context))?;

    let body = doc.body.as_ref().ok_or_else(|| SandbrushError::Parse {
        message: format!("{} has no brush expression", context),
        help: Some("Add the brush inside a ```px block".to_string()),
    })?;

    let width = doc.frontmatter.get_u32("width").map_err(|e| with_context(e, &context))?;
    let height = doc.frontmatter.get_u32("height").map_err(|e| with_context(e, &context))?;
    if width == Some(0) || height == Some(0) {
        return Err(SandbrushError::Config {
            message: format!("{}: preview size must be non-zero", context),
            help: None,
        });
    }

    let def: BrushDef = serde_yaml::from_str(&body.value)
        .map_err(|e| with_context(yaml_error(e, body.span.line_offset()), &context))?;
    let brush = compile(def).map_err(|e| with_context(e, &context))?;

    Ok(Texture {
        name,
        brush,
        width,
        height,
        span: doc.span,
    })
}

/// Texture names become output file stems, so they must be a single
/// plain path component.
fn check_name(name: &str) -> Result<()> {
    let plain = !name.trim().is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\']);
    if plain {
        Ok(())
    } else {
        Err(SandbrushError::Config {
            message: format!("invalid texture name '{}'", name),
            help: Some("Names are file stems: no path separators or dot segments".to_string()),
        })
    }
}

/// One node of a brush expression.
///
/// Exactly one of `color`, `noise`, `join`, `speckle` or `builtin` is set.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BrushDef {
    color: Option<ColourDef>,
    tag: Option<String>,
    noise: Option<NoiseDef>,
    join: Option<Vec<BrushDef>>,
    speckle: Option<Box<SpeckleDef>>,
    builtin: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NoiseDef {
    #[serde(default)]
    layers: Option<LayersDef>,
    base: BaseDef,
    /// Tag for a literal colour base.
    tag: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SpeckleDef {
    layer: LayerDef,
    brush: BrushDef,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LayerDef {
    seed: u32,
    factor: f64,
    threshold: f64,
    force: f64,
    target: Option<ColourDef>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LayersDef {
    Many(Vec<LayerDef>),
    One(LayerDef),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BaseDef {
    Colour(ColourDef),
    Brush(Box<BrushDef>),
}

/// `[r, g, b]` or a hex string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ColourDef {
    Channels(Vec<i64>),
    Hex(String),
}

impl ColourDef {
    fn channels(&self) -> Result<[i64; 3]> {
        match self {
            ColourDef::Channels(values) => <[i64; 3]>::try_from(values.as_slice()).map_err(|_| {
                SandbrushError::Config {
                    message: format!("Colour needs 3 channels, got {}", values.len()),
                    help: Some("Write colours as [r, g, b] or \"#RRGGBB\"".to_string()),
                }
            }),
            ColourDef::Hex(hex) => {
                let c = Colour::from_hex(hex)?;
                Ok([c.r as i64, c.g as i64, c.b as i64])
            }
        }
    }

    fn colour(&self) -> Result<Colour> {
        let [r, g, b] = self.channels()?;
        Colour::checked(r, g, b)
    }
}

impl LayerDef {
    fn config(&self) -> Result<NoiseLayerConfig> {
        let config = NoiseLayerConfig::new(self.seed, self.factor, self.threshold, self.force);
        Ok(match &self.target {
            Some(target) => config.with_target(target.colour()?),
            None => config,
        })
    }
}

fn parse_tag(tag: Option<&str>) -> Result<MaterialTag> {
    tag.map_or(Ok(MaterialTag::Wall), str::parse)
}

fn compile(def: BrushDef) -> Result<Brush> {
    let kinds = [
        def.color.is_some(),
        def.noise.is_some(),
        def.join.is_some(),
        def.speckle.is_some(),
        def.builtin.is_some(),
    ];
    match kinds.iter().filter(|set| **set).count() {
        1 => {}
        0 => {
            return Err(SandbrushError::Config {
                message: "Brush expression is empty".to_string(),
                help: Some("Use one of color, noise, join, speckle or builtin".to_string()),
            })
        }
        _ => {
            return Err(SandbrushError::Config {
                message: "Brush expression mixes several brush kinds".to_string(),
                help: Some("Wrap several brushes in a join list".to_string()),
            })
        }
    }

    if def.tag.is_some() && def.color.is_none() {
        return Err(SandbrushError::config("tag only applies to color brushes"));
    }

    if let Some(colour) = def.color {
        let [r, g, b] = colour.channels()?;
        return Brushes::color(r, g, b, parse_tag(def.tag.as_deref())?);
    }

    if let Some(noise) = def.noise {
        let layers = match noise.layers {
            None => Vec::new(),
            Some(LayersDef::One(layer)) => vec![layer.config()?],
            Some(LayersDef::Many(layers)) => layers
                .iter()
                .map(LayerDef::config)
                .collect::<Result<Vec<_>>>()?,
        };
        let base = match noise.base {
            BaseDef::Colour(colour) => {
                NoiseBase::Colour(colour.colour()?, parse_tag(noise.tag.as_deref())?)
            }
            BaseDef::Brush(_) if noise.tag.is_some() => {
                return Err(SandbrushError::config(
                    "noise tag only applies to a literal colour base",
                ))
            }
            BaseDef::Brush(brush) => NoiseBase::Brush(compile(*brush)?),
        };
        return Brushes::color_noise(layers, base);
    }

    if let Some(brushes) = def.join {
        let brushes = brushes.into_iter().map(compile).collect::<Result<Vec<_>>>()?;
        return Brushes::join(brushes);
    }

    if let Some(speckle) = def.speckle {
        let SpeckleDef { layer, brush } = *speckle;
        return Brushes::speckle(layer.config()?, compile(brush)?);
    }

    match def.builtin {
        Some(name) => Brushes::builtin(&name),
        None => Err(SandbrushError::config("Brush expression is empty")),
    }
}

/// Convert a YAML error, shifting its line by where the body starts.
fn yaml_error(err: serde_yaml::Error, line_offset: u32) -> SandbrushError {
    let message = match err.location() {
        Some(loc) => format!("line {}: {}", loc.line() as u32 + line_offset, err),
        None => err.to_string(),
    };
    SandbrushError::Parse {
        message: format!("Invalid brush expression at {}", message),
        help: None,
    }
}

/// Prefix an error message with the document it came from.
fn with_context(err: SandbrushError, context: &str) -> SandbrushError {
    match err {
        SandbrushError::Config { message, help } => SandbrushError::Config {
            message: format!("{}: {}", context, message),
            help,
        },
        SandbrushError::Range { message, help } => SandbrushError::Range {
            message: format!("{}: {}", context, message),
            help,
        },
        SandbrushError::Parse { message, help } => SandbrushError::Parse {
            message: format!("{}: {}", context, message),
            help,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Paint;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_color_texture() {
        let source = r#"---
name: plain-wall
width: 32
height: 16
---

```px
color: [45, 45, 45]
tag: wall
```
"#;

        let textures = parse_texture_file(source).unwrap();
        assert_eq!(textures.len(), 1);

        let texture = &textures[0];
        assert_eq!(texture.name, "plain-wall");
        assert_eq!(texture.size_or(64, 64), (32, 16));
        assert_eq!(
            texture.brush.evaluate(3, 9),
            Some(Paint::new(Colour::rgb(45, 45, 45), MaterialTag::Wall))
        );
    }

    #[test]
    fn test_parse_layered_texture() {
        let source = r##"---
name: rock-wall
---

```px
join:
  - noise:
      layers:
        - { seed: 40, factor: 60, threshold: 0.4, force: 0.8 }
        - { seed: 41, factor: 10, threshold: 0.4, force: 0.3, target: "#FFFFFF" }
      base: [79, 69, 63]
      tag: rock
  - speckle:
      layer: { seed: 5, factor: 2, threshold: 0.8, force: 1 }
      brush: { color: "#60554E", tag: rock }
```
"##;

        let textures = parse_texture_file(source).unwrap();
        let brush = &textures[0].brush;
        assert_eq!(brush.kind(), "join");
        assert_eq!(brush.layer_count(), 3);
        assert_eq!(brush.tags(), vec![MaterialTag::Rock]);
        assert_eq!(textures[0].size_or(64, 48), (64, 48));
    }

    #[test]
    fn test_expression_matches_api() {
        let parsed = parse_brush_expr(
            "noise:\n  layers: { seed: 40, factor: 60, threshold: 0.4, force: 0.8 }\n  base: { color: [79, 69, 63] }",
        )
        .unwrap();
        let built = Brushes::color_noise(
            NoiseLayerConfig::new(40, 60.0, 0.4, 0.8),
            Brushes::color(79, 69, 63, MaterialTag::Wall).unwrap(),
        )
        .unwrap();
        assert_eq!(parsed, built);
    }

    #[test]
    fn test_builtin_reference() {
        let brush = parse_brush_expr("builtin: rusty-metal").unwrap();
        assert_eq!(brush, Brushes::builtin("rusty-metal").unwrap());
    }

    #[test]
    fn test_noise_without_layers_is_base() {
        let brush = parse_brush_expr("noise:\n  base: [1, 2, 3]\n  tag: sand").unwrap();
        assert_eq!(brush, Brushes::color(1, 2, 3, MaterialTag::Sand).unwrap());
    }

    #[test]
    fn test_errors_keep_their_kind() {
        assert!(parse_brush_expr("join: []").unwrap_err().is_config());
        assert!(parse_brush_expr("color: [300, 0, 0]").unwrap_err().is_range());
        assert!(parse_brush_expr("color: [1, 2]").unwrap_err().is_config());
        assert!(parse_brush_expr("color: [1, 2, 3]\ntag: lava").unwrap_err().is_config());
        assert!(parse_brush_expr("builtin: nope").unwrap_err().is_config());
        assert!(parse_brush_expr("{}").unwrap_err().is_config());
        assert!(parse_brush_expr("builtin: wall\ncolor: [1, 2, 3]").unwrap_err().is_config());
        assert!(parse_brush_expr("builtin: wall\ntag: wall").unwrap_err().is_config());

        let zero_factor = "noise:\n  layers: { seed: 1, factor: 0, threshold: 0.4, force: 0.8 }\n  base: [1, 2, 3]";
        assert!(parse_brush_expr(zero_factor).unwrap_err().is_config());
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = parse_brush_expr("colour: [1, 2, 3]").unwrap_err();
        assert!(matches!(err, SandbrushError::Parse { .. }));
    }

    #[test]
    fn test_error_names_document() {
        let source = "---\nname: broken\n---\n\n```px\njoin: []\n```\n";
        let err = parse_texture_file(source).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("texture 'broken'"));
    }

    #[test]
    fn test_missing_body() {
        let err = parse_texture_file("---\nname: bare\n---\n").unwrap_err();
        assert!(matches!(err, SandbrushError::Parse { .. }));
    }

    #[test]
    fn test_path_like_names_rejected() {
        for name in ["../escape", "a/b", "a\\b", "..", "'  '"] {
            let source = format!("---\nname: {}\n---\n\n```px\nbuiltin: wall\n```\n", name);
            let err = parse_texture_file(&source).unwrap_err();
            assert!(err.is_config(), "{} accepted", name);
        }
        let ok = "---\nname: rock-wall.v2\n---\n\n```px\nbuiltin: wall\n```\n";
        assert!(parse_texture_file(ok).is_ok());
    }

    #[test]
    fn test_zero_size_rejected() {
        let source = "---\nname: flat\nwidth: 0\n---\n\n```px\nbuiltin: wall\n```\n";
        assert!(parse_texture_file(source).unwrap_err().is_config());
    }
}
