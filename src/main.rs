use clap::Parser;
use munge_intersections::config::Cli;
use munge_intersections::munge_files;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> munge_intersections::Result<()> {
    let cli = Cli::parse();
    munge_files(&cli.input, &cli.output, &cli.json_output)?;
    Ok(())
}
