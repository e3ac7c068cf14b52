use clap::Parser;
use page_object_codegen::cli::commands::{cmd_generate, cmd_inspect};
use page_object_codegen::cli::config::{Cli, Commands, load_config, log_level};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // RUST_LOG wins over -v
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level(cli.verbose))),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            project,
            output_dir,
            package,
            trace,
        } => {
            cmd_generate(
                &project,
                output_dir.as_deref(),
                package.as_deref(),
                trace.as_deref(),
                &config,
            )?;
        }
        Commands::Inspect { project } => {
            cmd_inspect(&project, &config)?;
        }
    }

    Ok(())
}
