use clap::Parser;
use tracing_subscriber::EnvFilter;

use match_solver::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("match_solver=debug,info")
    } else {
        EnvFilter::new("match_solver=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Marriage(args) => {
            cli::marriage::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::HospitalResident(args) => {
            cli::hospital::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
