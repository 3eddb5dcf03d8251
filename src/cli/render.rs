//! Render command implementation.
//!
//! Fills a canvas with each texture's brush and writes it as a PNG.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use log::info;

use crate::discovery::{collect_texture_files, load_textures};
use crate::error::{Result, SandbrushError};
use crate::parser::Texture;
use crate::render::{write_meta_json, write_png, Canvas, TextureMeta};

/// Render texture files to PNG images
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Texture files or directories to render
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output directory
    #[arg(long, short, default_value = "dist")]
    pub output: PathBuf,

    /// Canvas width for textures without a width of their own
    #[arg(long, default_value = "64")]
    pub width: u32,

    /// Canvas height for textures without a height of their own
    #[arg(long, default_value = "64")]
    pub height: u32,

    /// Brush x coordinate of the top-left cell
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub x: i64,

    /// Brush y coordinate of the top-left cell
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub y: i64,

    /// Scale factor for output (integer upscaling)
    #[arg(long, default_value = "1")]
    pub scale: u32,

    /// Also write a JSON summary next to each PNG
    #[arg(long)]
    pub meta: bool,
}

pub fn run(args: RenderArgs) -> Result<()> {
    let written = render_all(&args)?;
    println!("Rendered {} texture(s) to {}", written.len(), args.output.display());
    Ok(())
}

/// Render every texture found in `args.files`, returning the PNG paths.
pub fn render_all(args: &RenderArgs) -> Result<Vec<PathBuf>> {
    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| SandbrushError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let files = collect_texture_files(&args.files)?;
    if files.is_empty() {
        return Err(SandbrushError::Config {
            message: "No texture files found".to_string(),
            help: Some("Texture files end in .texture.md".to_string()),
        });
    }

    let mut seen: HashMap<String, PathBuf> = HashMap::new();
    let mut written = Vec::new();
    for file in &files {
        for texture in load_textures(file)? {
            if let Some(first) = seen.insert(texture.name.clone(), file.clone()) {
                return Err(SandbrushError::Config {
                    message: format!(
                        "Texture '{}' in {} would overwrite the one from {}",
                        texture.name,
                        file.display(),
                        first.display()
                    ),
                    help: Some("Give every texture a unique name".to_string()),
                });
            }
            written.push(render_texture(&texture, args)?);
        }
    }

    Ok(written)
}

fn render_texture(texture: &Texture, args: &RenderArgs) -> Result<PathBuf> {
    let (width, height) = texture.size_or(args.width, args.height);
    let mut canvas = Canvas::new(width, height).with_origin(args.x, args.y);
    let painted = canvas.fill(&texture.brush);

    let image_name = format!("{}.png", texture.name);
    let output_path = args.output.join(&image_name);
    write_png(&canvas, &output_path, args.scale)?;
    info!(
        "{}: painted {}/{} cells",
        texture.name,
        painted,
        width as usize * height as usize
    );

    if args.meta {
        let meta = TextureMeta::from_canvas(&texture.name, image_name, &canvas);
        write_meta_json(&meta, &meta_path(&output_path))?;
    }

    println!("  {} -> {}", texture.name, output_path.display());
    Ok(output_path)
}

fn meta_path(png: &Path) -> PathBuf {
    png.with_extension("json")
}
