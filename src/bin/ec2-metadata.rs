//! CLI binary for the ec2-metadata crate.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ec2_metadata::{Collector, DirectorySink};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ec2-metadata")]
#[command(
    author,
    version,
    about = "Detect EC2 hosts and collect instance identity metadata"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether this host is an EC2 instance (exit 0 if so, 1 if not)
    Check,

    /// Collect instance metadata into a directory of artifact files
    Collect {
        /// Directory to write artifact files into
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let collector = match Collector::new() {
        Ok(collector) => collector,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Check => {
            if collector.check_enabled() {
                println!("EC2");
                ExitCode::SUCCESS
            } else {
                println!("not EC2");
                ExitCode::FAILURE
            }
        }

        Commands::Collect { output } => {
            let mut sink = match DirectorySink::new(&output) {
                Ok(sink) => sink,
                Err(e) => {
                    eprintln!("error: cannot create {}: {}", output.display(), e);
                    return ExitCode::FAILURE;
                }
            };

            // Per-field failures are logged and swallowed inside run; a
            // partially reachable metadata service still exits zero.
            collector.run(&mut sink).await;
            ExitCode::SUCCESS
        }
    }
}
