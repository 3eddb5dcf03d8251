//! List command implementation.

use clap::Args;

use crate::error::Result;
use crate::types::Brushes;

/// List builtin material textures
#[derive(Args, Debug)]
pub struct ListArgs {}

pub fn run(_args: ListArgs) -> Result<()> {
    for name in Brushes::names() {
        let brush = Brushes::builtin(name)?;
        let tags: Vec<&str> = brush.tags().into_iter().map(|t| t.name()).collect();
        println!(
            "{:<12} {:<8} {} layer(s), tags: {}",
            name,
            brush.kind(),
            brush.layer_count(),
            tags.join(", ")
        );
    }
    Ok(())
}
