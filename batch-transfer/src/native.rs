use structs::{
    aliases::TransfersVec, ledger::sum_amounts, network::TransferKind, transfer::BatchReceipt,
};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait NativeBatchModule:
    crate::executor::BatchExecutorModule
    + crate::refund::RefundModule
    + crate::fees::FeesModule
    + crate::events::BatchEventsModule
    + fee_registry::FeeRegistryModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Attached EGLD must cover every amount plus the quoted fee. Whatever is
    /// not delivered goes back to the caller in the same transaction.
    #[payable("EGLD")]
    #[endpoint(batchTransferNative)]
    fn batch_transfer_native(
        &self,
        expected_fee: BigUint,
        referrer: ManagedAddress,
        transfers: TransfersVec<Self::Api>,
    ) -> BatchReceipt<Self::Api> {
        let caller = self.blockchain().get_caller();
        let supplied = self.call_value().egld().clone_value();
        let profile = self.active_profile();

        self.require_batch_shape(&profile, TransferKind::Native, &transfers);
        let fee = self.require_expected_fee(&profile, transfers.len(), &expected_fee);
        let mut ledger = self.open_ledger(supplied, fee, &sum_amounts(&transfers));

        let egld = EgldOrEsdtTokenIdentifier::egld();
        let results = self.execute_batch(&profile, &egld, &transfers, &mut ledger);

        self.pay_refund(&caller, &egld, &ledger.refund());
        self.book_fee(&caller, &referrer, ledger.fee());

        let receipt = ledger.close(results);
        self.emit_batch_summary(&caller, &referrer, &receipt);

        receipt
    }
}
