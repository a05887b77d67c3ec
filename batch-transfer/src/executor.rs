use error_messages::{BATCH_TOO_LARGE, CONTRACT_PAUSED, FEE_MISMATCH, INVALID_BATCH};
use structs::{
    aliases::{GasLimit, TransferResultsVec, TransfersVec},
    ledger::RefundLedger,
    network::{NetworkProfile, TransferKind},
    settlement::settle_batch,
    transfer::{FailureReason, Transfer},
};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait BatchExecutorModule:
    crate::events::BatchEventsModule + multiversx_sc_modules::pause::PauseModule
{
    fn require_batch_shape(
        &self,
        profile: &NetworkProfile<Self::Api>,
        kind: TransferKind,
        transfers: &TransfersVec<Self::Api>,
    ) {
        require!(self.not_paused(), CONTRACT_PAUSED);
        require!(!transfers.is_empty(), INVALID_BATCH);
        require!(
            transfers.len() <= profile.max_batch_size(kind),
            BATCH_TOO_LARGE
        );
    }

    fn require_expected_fee(
        &self,
        profile: &NetworkProfile<Self::Api>,
        recipient_count: usize,
        expected_fee: &BigUint,
    ) -> BigUint {
        let fee = match profile.fee_tier.quote(recipient_count) {
            Some(fee) => fee,
            None => sc_panic!(INVALID_BATCH),
        };
        require!(&fee == expected_fee, FEE_MISMATCH);

        fee
    }

    fn execute_batch(
        &self,
        profile: &NetworkProfile<Self::Api>,
        token_id: &EgldOrEsdtTokenIdentifier,
        transfers: &TransfersVec<Self::Api>,
        ledger: &mut RefundLedger<Self::Api>,
    ) -> TransferResultsVec<Self::Api> {
        let kind = if token_id.is_egld() {
            TransferKind::Native
        } else {
            TransferKind::Token
        };
        let gas_per_item = profile.gas_per_item(kind);
        let required_gas_left = profile.required_gas_left(kind);
        let own_address = self.blockchain().get_sc_address();

        settle_batch(
            transfers,
            ledger,
            |_, transfer| {
                self.attempt_transfer(
                    kind,
                    token_id,
                    gas_per_item,
                    required_gas_left,
                    &own_address,
                    transfer,
                )
            },
            |result| {
                self.transfer_detail_event(
                    result.batch_index,
                    &result.to,
                    &result.amount,
                    result.success,
                    result.failure_reason,
                )
            },
        )
    }

    fn attempt_transfer(
        &self,
        kind: TransferKind,
        token_id: &EgldOrEsdtTokenIdentifier,
        gas_per_item: GasLimit,
        required_gas_left: GasLimit,
        own_address: &ManagedAddress,
        transfer: &Transfer<Self::Api>,
    ) -> Result<(), FailureReason> {
        if transfer.to.is_zero() || &transfer.to == own_address {
            return Err(FailureReason::InvalidRecipient);
        }
        if kind == TransferKind::Token && transfer.amount == 0u32 {
            return Err(FailureReason::ZeroAmount);
        }
        if self.blockchain().get_gas_left() < required_gas_left {
            return Err(FailureReason::BudgetExceeded);
        }

        let result = self
            .tx()
            .to(&transfer.to)
            .egld_or_single_esdt(token_id, 0, &transfer.amount)
            .gas(gas_per_item)
            .returns(ReturnsHandledOrError::new())
            .sync_call_fallible();

        match result {
            Ok(_) => Ok(()),
            Err(error_code) => Err(FailureReason::from_error_code(
                error_code,
                self.blockchain().is_smart_contract(&transfer.to),
            )),
        }
    }
}
