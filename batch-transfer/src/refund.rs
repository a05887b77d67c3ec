use structs::ledger::RefundLedger;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait RefundModule {
    fn open_ledger(
        &self,
        supplied: BigUint,
        fee: BigUint,
        requested: &BigUint,
    ) -> RefundLedger<Self::Api> {
        match RefundLedger::open(supplied, fee, requested) {
            Ok(ledger) => ledger,
            Err(error_message) => sc_panic!(error_message),
        }
    }

    /// Plain transfer: a refund that cannot be delivered reverts the batch.
    fn pay_refund(
        &self,
        caller: &ManagedAddress,
        token_id: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        if *amount == 0u32 {
            return;
        }

        self.tx()
            .to(caller)
            .egld_or_single_esdt(token_id, 0, amount)
            .transfer();
    }
}
