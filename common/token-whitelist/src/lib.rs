#![no_std]

use error_messages::{INVALID_TOKEN_ID, TOKEN_NOT_WHITELISTED};
use structs::aliases::WhitelistUpdateArg;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait TokenWhitelistModule {
    /// Only whitelisted tokens can be sent in a token batch
    #[only_owner]
    #[endpoint(setWhitelist)]
    fn set_whitelist(&self, token_id: TokenIdentifier, supported: bool) {
        self.update_whitelist(token_id, supported);
    }

    #[only_owner]
    #[endpoint(batchUpdateTokenWhitelist)]
    fn batch_update_token_whitelist(
        &self,
        updates: MultiValueEncoded<WhitelistUpdateArg<Self::Api>>,
    ) {
        for update in updates {
            let (token_id, supported) = update.into_tuple();
            self.update_whitelist(token_id, supported);
        }
    }

    #[view(isWhitelisted)]
    fn is_whitelisted(&self, token_id: TokenIdentifier) -> bool {
        self.token_whitelist().contains(&token_id)
    }

    fn require_token_whitelisted(&self, token_id: &TokenIdentifier) {
        require!(
            self.token_whitelist().contains(token_id),
            TOKEN_NOT_WHITELISTED
        );
    }

    fn update_whitelist(&self, token_id: TokenIdentifier, supported: bool) {
        require!(token_id.is_valid_esdt_identifier(), INVALID_TOKEN_ID);

        let changed = if supported {
            self.token_whitelist().insert(token_id.clone())
        } else {
            self.token_whitelist().swap_remove(&token_id)
        };

        if changed {
            self.token_whitelist_updated_event(&token_id, supported);
        }
    }

    #[event("tokenWhitelistUpdated")]
    fn token_whitelist_updated_event(
        &self,
        #[indexed] token_id: &TokenIdentifier,
        #[indexed] supported: bool,
    );

    #[view(getTokenWhitelist)]
    #[storage_mapper("tokenWhitelist")]
    fn token_whitelist(&self) -> UnorderedSetMapper<TokenIdentifier>;
}
