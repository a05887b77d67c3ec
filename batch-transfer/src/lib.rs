#![no_std]

use error_messages::INVALID_FEE_COLLECTOR;
use multiversx_sc::imports::*;
use structs::network::{Network, NetworkProfile};

pub mod events;
pub mod executor;
pub mod fees;
pub mod native;
pub mod refund;
pub mod token;

#[multiversx_sc::contract]
pub trait BatchTransfer:
    native::NativeBatchModule
    + token::TokenBatchModule
    + executor::BatchExecutorModule
    + refund::RefundModule
    + fees::FeesModule
    + events::BatchEventsModule
    + fee_registry::FeeRegistryModule
    + token_whitelist::TokenWhitelistModule
    + multiversx_sc_modules::pause::PauseModule
{
    #[init]
    fn init(
        &self,
        fee_collector: ManagedAddress,
        network: Network,
        opt_profile: OptionalValue<NetworkProfile<Self::Api>>,
    ) {
        require!(!fee_collector.is_zero(), INVALID_FEE_COLLECTOR);

        self.fee_collector().set(fee_collector);
        self.init_fee_registry(network, opt_profile.into_option());
        self.set_paused(false);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
