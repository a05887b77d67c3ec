pub mod batch_transfer_interactor;
pub mod interact_cli;
pub mod interactor_config;
pub mod interactor_state;

use batch_transfer_interactor::BatchTransferInteract;
use clap::Parser;
use interact_cli::{InteractCli, InteractCliCommand};
use interactor_config::Config;
use multiversx_sc_snippets::{
    env_logger,
    imports::{Address, Bech32Address},
};

pub async fn batch_transfer_cli() {
    env_logger::init();

    let cli = InteractCli::parse();
    let config = Config::load_config();
    let mut interact = BatchTransferInteract::new(config).await;
    match &cli.command {
        Some(InteractCliCommand::Deploy) => interact.deploy().await,
        Some(InteractCliCommand::Quote(args)) => interact.quote(args.recipient_count).await,
        Some(InteractCliCommand::FeeConfig) => interact.fee_config().await,
        Some(InteractCliCommand::Whitelist(args)) => {
            interact.set_whitelist(&args.token_id, !args.remove).await
        }
        Some(InteractCliCommand::BatchNative(args)) => {
            let recipients: Vec<(Address, u128)> =
                args.transfers.iter().map(|raw| parse_transfer(raw)).collect();
            let referrer = args.referrer.as_deref().map(parse_address);
            interact
                .batch_transfer_native(&recipients, referrer, 0)
                .await;
        }
        Some(InteractCliCommand::Pause) => interact.pause().await,
        Some(InteractCliCommand::Unpause) => interact.unpause().await,
        Some(InteractCliCommand::WithdrawFees) => interact.withdraw_fees().await,
        None => {}
    }
}

fn parse_address(bech32_address: &str) -> Address {
    Bech32Address::from_bech32_string(bech32_address.to_string()).to_address()
}

fn parse_transfer(raw_transfer: &str) -> (Address, u128) {
    let (address, amount) = raw_transfer
        .split_once('=')
        .expect("transfers must look like <address>=<amount>");
    let amount = amount.parse().expect("amount must be an integer");

    (parse_address(address), amount)
}
