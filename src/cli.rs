use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "clawclaim")]
#[command(author = "ClawClaim Team")]
#[command(version = "0.1.0")]
#[command(about = "Scan airdrop contracts for target addresses, claim, and report", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config directory (default.toml, <CLAW_ENV>.toml)
    #[arg(short, long, default_value = "config", global = true)]
    pub config: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run one scan: claim what is claimable, persist status, post report
    Scan,
    /// Print the persisted run status
    Status,
    /// Validate registries without touching the chain
    Check,
}
