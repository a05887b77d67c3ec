use structs::{
    aliases::BatchIndex,
    transfer::{BatchReceipt, FailureReason},
};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait BatchEventsModule {
    fn emit_batch_summary(
        &self,
        caller: &ManagedAddress,
        referrer: &ManagedAddress,
        receipt: &BatchReceipt<Self::Api>,
    ) {
        self.batch_summary_event(
            caller,
            referrer,
            receipt.results.len(),
            receipt.success_count(),
            (
                receipt.total_spent.clone(),
                receipt.total_refunded.clone(),
                receipt.fee_charged.clone(),
            ),
        );
    }

    #[event("transferDetail")]
    fn transfer_detail_event(
        &self,
        #[indexed] batch_index: BatchIndex,
        #[indexed] to: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] success: bool,
        failure_reason: Option<FailureReason>,
    );

    #[event("batchSummary")]
    fn batch_summary_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] referrer: &ManagedAddress,
        #[indexed] transfer_count: usize,
        #[indexed] success_count: usize,
        totals: (BigUint, BigUint, BigUint),
    );

    #[event("feeCollectorChanged")]
    fn fee_collector_changed_event(&self, #[indexed] fee_collector: &ManagedAddress);

    #[event("feesWithdrawn")]
    fn fees_withdrawn_event(&self, #[indexed] fee_collector: &ManagedAddress, amount: &BigUint);

    #[event("referralRewardsClaimed")]
    fn referral_rewards_claimed_event(&self, #[indexed] referrer: &ManagedAddress, amount: &BigUint);
}
