use clap::Parser;
use miette::Result;
use sandbrush::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    match cli.command {
        Commands::Render(args) => sandbrush::cli::render::run(args)?,
        Commands::Validate(args) => sandbrush::cli::validate::run(args)?,
        Commands::Sample(args) => sandbrush::cli::sample::run(args)?,
        Commands::List(args) => sandbrush::cli::list::run(args)?,
        Commands::Completions(args) => sandbrush::cli::completions::run(args)?,
    }

    Ok(())
}
