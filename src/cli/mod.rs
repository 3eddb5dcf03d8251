pub mod completions;
pub mod list;
pub mod render;
pub mod sample;
pub mod validate;

use clap::{Parser, Subcommand};

/// sandbrush - Procedural material brushes for falling-sand grids
#[derive(Parser, Debug)]
#[command(name = "sandbrush")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log filter for the chosen verbosity; `RUST_LOG` overrides it.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render texture files to PNG images
    Render(render::RenderArgs),

    /// Check texture files without rendering
    Validate(validate::ValidateArgs),

    /// Print the paint a brush produces at one cell
    Sample(sample::SampleArgs),

    /// List builtin material textures
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
