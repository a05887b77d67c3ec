#![no_std]

use error_messages::{INVALID_BATCH, PROFILE_NOT_CONFIGURED};
use structs::{
    aliases::FeeConfigTuple,
    fee::FeeTier,
    network::{Network, NetworkProfile, TransferKind},
};

multiversx_sc::imports!();

/// Per-network pricing, gas budgets and batch ceilings, plus the network the
/// contract currently settles for.
#[multiversx_sc::module]
pub trait FeeRegistryModule {
    fn init_fee_registry(
        &self,
        network: Network,
        opt_profile: Option<NetworkProfile<Self::Api>>,
    ) {
        let profile = opt_profile.unwrap_or_else(|| NetworkProfile::preset(network));
        self.store_profile(network, profile);
        self.active_network().set(network);
    }

    #[view(calculateFee)]
    fn calculate_fee(&self, recipient_count: usize) -> BigUint {
        match self.active_profile().fee_tier.quote(recipient_count) {
            Some(fee) => fee,
            None => sc_panic!(INVALID_BATCH),
        }
    }

    #[view(getTier)]
    fn get_tier(&self, network: Network) -> FeeTier<Self::Api> {
        self.profile_of(network).fee_tier
    }

    #[only_owner]
    #[endpoint(setTier)]
    fn set_tier(&self, network: Network, fee_tier: FeeTier<Self::Api>) {
        let mut profile = if self.network_profile(network).is_empty() {
            NetworkProfile::preset(network)
        } else {
            self.network_profile(network).get()
        };
        profile.fee_tier = fee_tier;

        self.store_profile(network, profile);
    }

    #[view(getNetworkProfile)]
    fn get_network_profile(&self, network: Network) -> NetworkProfile<Self::Api> {
        self.profile_of(network)
    }

    #[only_owner]
    #[endpoint(setNetworkProfile)]
    fn set_network_profile(&self, network: Network, profile: NetworkProfile<Self::Api>) {
        self.store_profile(network, profile);
    }

    #[view(getFeeConfig)]
    fn get_fee_config(&self) -> FeeConfigTuple<Self::Api> {
        self.active_profile().fee_tier.into_multi_value()
    }

    #[view(getCurrentChainFeeConfig)]
    fn get_current_chain_fee_config(&self) -> FeeConfigTuple<Self::Api> {
        self.get_fee_config()
    }

    #[only_owner]
    #[endpoint(setActiveNetwork)]
    fn set_active_network(&self, network: Network) {
        require!(
            !self.network_profile(network).is_empty(),
            PROFILE_NOT_CONFIGURED
        );

        self.active_network().set(network);
        self.active_network_changed_event(network);
    }

    #[view(getMaxBatchSize)]
    fn get_max_batch_size(&self, kind: TransferKind) -> usize {
        self.active_profile().max_batch_size(kind)
    }

    #[view(getCommonTokens)]
    fn get_common_tokens(&self) -> MultiValueEncoded<TokenIdentifier> {
        let network = self.active_network().get();

        let mut tokens = MultiValueEncoded::new();
        for token in self.common_tokens(network).iter() {
            tokens.push(token);
        }

        tokens
    }

    #[only_owner]
    #[endpoint(setCommonTokens)]
    fn set_common_tokens(&self, network: Network, tokens: MultiValueEncoded<TokenIdentifier>) {
        let mut mapper = self.common_tokens(network);
        mapper.clear();
        for token in tokens {
            mapper.push(&token);
        }
    }

    /// One read per batch. Callers keep the returned value for the whole call.
    fn active_profile(&self) -> NetworkProfile<Self::Api> {
        self.profile_of(self.active_network().get())
    }

    fn profile_of(&self, network: Network) -> NetworkProfile<Self::Api> {
        let mapper = self.network_profile(network);
        require!(!mapper.is_empty(), PROFILE_NOT_CONFIGURED);

        mapper.get()
    }

    fn store_profile(&self, network: Network, profile: NetworkProfile<Self::Api>) {
        if let Err(error) = profile.validate() {
            sc_panic!(error);
        }

        self.fee_tier_updated_event(network, &profile.fee_tier);
        self.network_profile(network).set(profile);
    }

    #[event("feeTierUpdated")]
    fn fee_tier_updated_event(&self, #[indexed] network: Network, fee_tier: &FeeTier<Self::Api>);

    #[event("activeNetworkChanged")]
    fn active_network_changed_event(&self, #[indexed] network: Network);

    #[view(getActiveNetwork)]
    #[storage_mapper("activeNetwork")]
    fn active_network(&self) -> SingleValueMapper<Network>;

    #[storage_mapper("networkProfile")]
    fn network_profile(&self, network: Network) -> SingleValueMapper<NetworkProfile<Self::Api>>;

    #[storage_mapper("commonTokens")]
    fn common_tokens(&self, network: Network) -> VecMapper<TokenIdentifier>;
}
