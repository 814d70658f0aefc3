pub mod env;

use clap::Parser;

/// Command-line surface: one flag choosing one-shot vs continuous execution.
#[derive(Debug, Clone, Parser)]
#[command(name = "internal-domain-sync")]
#[command(about = "Sync domains from a CSV file and/or URL into a DNS-policy registry as internal domains")]
pub struct CliArgs {
    #[arg(short, long, help = "Run continuously, reconciling on a fixed interval")]
    pub daemon: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
