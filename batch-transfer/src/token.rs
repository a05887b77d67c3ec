use error_messages::{FEE_PAYMENT_MISMATCH, INVALID_TOKEN_PAYMENT};
use structs::{
    aliases::TransfersVec, ledger::sum_amounts, network::TransferKind, transfer::BatchReceipt,
};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait TokenBatchModule:
    crate::executor::BatchExecutorModule
    + crate::refund::RefundModule
    + crate::fees::FeesModule
    + crate::events::BatchEventsModule
    + fee_registry::FeeRegistryModule
    + token_whitelist::TokenWhitelistModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Expects one ESDT payment of `token_id` carrying the transferred value
    /// and an EGLD payment equal to the quoted fee.
    #[payable("*")]
    #[endpoint(batchTransferToken)]
    fn batch_transfer_token(
        &self,
        token_id: TokenIdentifier,
        expected_fee: BigUint,
        referrer: ManagedAddress,
        transfers: TransfersVec<Self::Api>,
    ) -> BatchReceipt<Self::Api> {
        let caller = self.blockchain().get_caller();
        let profile = self.active_profile();

        self.require_batch_shape(&profile, TransferKind::Token, &transfers);
        self.require_token_whitelisted(&token_id);

        let token = EgldOrEsdtTokenIdentifier::esdt(token_id);
        let (egld_amount, token_amount) = self.split_token_payments(&token);

        let fee = self.require_expected_fee(&profile, transfers.len(), &expected_fee);
        require!(egld_amount == fee, FEE_PAYMENT_MISMATCH);

        let mut ledger = self.open_ledger(token_amount, BigUint::zero(), &sum_amounts(&transfers));
        let results = self.execute_batch(&profile, &token, &transfers, &mut ledger);

        self.pay_refund(&caller, &token, &ledger.refund());
        self.book_fee(&caller, &referrer, &fee);

        let mut receipt = ledger.close(results);
        receipt.fee_charged = fee;
        self.emit_batch_summary(&caller, &referrer, &receipt);

        receipt
    }

    fn split_token_payments(&self, token: &EgldOrEsdtTokenIdentifier) -> (BigUint, BigUint) {
        let mut egld_amount = BigUint::zero();
        let mut opt_token_amount = None;

        for payment in self.call_value().all_transfers().clone_value().into_iter() {
            if payment.token_identifier.is_egld() {
                egld_amount += payment.amount;
                continue;
            }

            require!(
                opt_token_amount.is_none()
                    && &payment.token_identifier == token
                    && payment.token_nonce == 0,
                INVALID_TOKEN_PAYMENT
            );
            opt_token_amount = Some(payment.amount);
        }

        match opt_token_amount {
            Some(token_amount) => (egld_amount, token_amount),
            None => sc_panic!(INVALID_TOKEN_PAYMENT),
        }
    }
}
