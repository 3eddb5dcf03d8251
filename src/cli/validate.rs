//! Validate command implementation.

use std::path::PathBuf;

use clap::Args;
use log::warn;

use crate::discovery::{collect_texture_files, load_textures};
use crate::error::{Result, SandbrushError};

/// Check texture files without rendering
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Texture files or directories to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let files = collect_texture_files(&args.files)?;
    println!("Validating {} file(s)...", files.len());

    let mut failed = 0;
    for file in &files {
        match load_textures(file) {
            Ok(textures) => {
                for texture in textures {
                    println!(
                        "  ok  {} ({}, {} layer(s))",
                        texture.name,
                        texture.brush.kind(),
                        texture.brush.layer_count()
                    );
                }
            }
            Err(e) => {
                failed += 1;
                warn!("{} failed validation", file.display());
                eprintln!("  error: {}: {}", file.display(), e);
            }
        }
    }

    if failed > 0 {
        return Err(SandbrushError::Config {
            message: format!("{} of {} file(s) failed validation", failed, files.len()),
            help: None,
        });
    }

    println!("Validation passed.");
    Ok(())
}
