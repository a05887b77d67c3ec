use clap::{Args, Parser, Subcommand};

/// Batch transfer interactor CLI
#[derive(Default, PartialEq, Eq, Debug, Parser)]
#[command(version, about)]
#[command(propagate_version = true)]
pub struct InteractCli {
    #[command(subcommand)]
    pub command: Option<InteractCliCommand>,
}

#[derive(Clone, PartialEq, Eq, Debug, Subcommand)]
pub enum InteractCliCommand {
    #[command(name = "deploy", about = "Deploy the contract with the configured network preset")]
    Deploy,
    #[command(name = "quote", about = "Quote the fee for a number of recipients")]
    Quote(QuoteArgs),
    #[command(name = "feeConfig", about = "Show the active fee configuration")]
    FeeConfig,
    #[command(name = "whitelist", about = "Add or remove a token from the whitelist")]
    Whitelist(WhitelistArgs),
    #[command(name = "batchNative", about = "Send a native batch from the wallet")]
    BatchNative(BatchNativeArgs),
    #[command(name = "pause", about = "Pause batch submission")]
    Pause,
    #[command(name = "unpause", about = "Resume batch submission")]
    Unpause,
    #[command(name = "withdrawFees", about = "Send collected fees to the fee collector")]
    WithdrawFees,
}

#[derive(Default, Clone, PartialEq, Eq, Debug, Args)]
pub struct QuoteArgs {
    /// Number of recipients in the batch
    #[arg(short = 'c', long = "count")]
    pub recipient_count: usize,
}

#[derive(Default, Clone, PartialEq, Eq, Debug, Args)]
pub struct WhitelistArgs {
    /// Token identifier, e.g. USDC-c76f1f
    #[arg(short = 't', long = "token")]
    pub token_id: String,

    /// Remove the token instead of adding it
    #[arg(long, default_value_t = false)]
    pub remove: bool,
}

#[derive(Default, Clone, PartialEq, Eq, Debug, Args)]
pub struct BatchNativeArgs {
    /// Transfers as `<bech32 address>=<amount>`, repeatable
    #[arg(short = 't', long = "transfer", required = true)]
    pub transfers: Vec<String>,

    /// Optional referrer address
    #[arg(short = 'r', long = "referrer")]
    pub referrer: Option<String>,
}
