//! Sample command implementation.

use std::path::PathBuf;

use clap::{ArgGroup, Args};

use crate::discovery::load_textures;
use crate::error::{Result, SandbrushError};
use crate::parser::parse_brush_expr;
use crate::types::{Brush, Brushes, Paint};

/// Print the paint a brush produces at one cell
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["builtin", "file", "expr"])))]
pub struct SampleArgs {
    /// Builtin texture name
    #[arg(long)]
    pub builtin: Option<String>,

    /// Texture file to read
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Texture name within the file (defaults to the first)
    #[arg(long, requires = "file")]
    pub name: Option<String>,

    /// Inline brush expression, e.g. "builtin: rock"
    #[arg(long)]
    pub expr: Option<String>,

    /// Cell x coordinate
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub x: i64,

    /// Cell y coordinate
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub y: i64,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: SampleArgs) -> Result<()> {
    let brush = resolve_brush(&args)?;
    let paint = brush.evaluate(args.x, args.y);
    println!("{}", format_paint(paint, args.json)?);
    Ok(())
}

/// Build the brush selected by the arguments.
pub fn resolve_brush(args: &SampleArgs) -> Result<Brush> {
    if let Some(name) = &args.builtin {
        return Brushes::builtin(name);
    }
    if let Some(expr) = &args.expr {
        return parse_brush_expr(expr);
    }
    let file = args.file.as_ref().ok_or_else(|| {
        SandbrushError::config("Pass one of --builtin, --file or --expr")
    })?;

    let mut textures = load_textures(file)?.into_iter();
    let texture = match &args.name {
        Some(name) => textures.find(|t| &t.name == name).ok_or_else(|| SandbrushError::Config {
            message: format!("No texture named '{}' in {}", name, file.display()),
            help: None,
        })?,
        None => textures
            .next()
            .ok_or_else(|| SandbrushError::config("Texture file is empty"))?,
    };
    Ok(texture.brush)
}

/// Render a sample result as text or JSON.
pub fn format_paint(paint: Option<Paint>, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string(&paint).map_err(|e| SandbrushError::Parse {
            message: format!("Failed to serialize paint: {}", e),
            help: None,
        });
    }
    Ok(match paint {
        Some(paint) => format!("{} {}", paint.colour, paint.tag),
        None => "unset".to_string(),
    })
}
