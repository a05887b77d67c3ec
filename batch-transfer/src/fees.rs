use error_messages::{
    CALLER_NOT_FEE_COLLECTOR_OR_OWNER, INVALID_FEE_COLLECTOR, INVALID_REFERRAL_SHARE,
    NO_FEES_TO_WITHDRAW, NO_REFERRAL_REWARDS,
};
use structs::aliases::BasisPoints;

multiversx_sc::imports!();

pub const TOTAL_PERCENTAGE: BasisPoints = 10_000;

#[multiversx_sc::module]
pub trait FeesModule: crate::events::BatchEventsModule {
    #[only_owner]
    #[endpoint(setFeeCollector)]
    fn set_fee_collector(&self, fee_collector: ManagedAddress) {
        require!(!fee_collector.is_zero(), INVALID_FEE_COLLECTOR);

        self.fee_collector_changed_event(&fee_collector);
        self.fee_collector().set(fee_collector);
    }

    #[only_owner]
    #[endpoint(setReferralShare)]
    fn set_referral_share(&self, share: BasisPoints) {
        require!(share <= TOTAL_PERCENTAGE, INVALID_REFERRAL_SHARE);

        self.referral_share().set(share);
    }

    #[endpoint(withdrawFees)]
    fn withdraw_fees(&self) {
        let caller = self.blockchain().get_caller();
        let fee_collector = self.fee_collector().get();
        require!(
            caller == fee_collector || caller == self.blockchain().get_owner_address(),
            CALLER_NOT_FEE_COLLECTOR_OR_OWNER
        );

        let amount = self.collected_fees().take();
        require!(amount > 0u32, NO_FEES_TO_WITHDRAW);

        self.tx().to(&fee_collector).egld(&amount).transfer();
        self.fees_withdrawn_event(&fee_collector, &amount);
    }

    #[endpoint(claimReferralRewards)]
    fn claim_referral_rewards(&self) {
        let caller = self.blockchain().get_caller();

        let amount = self.referral_rewards(&caller).take();
        require!(amount > 0u32, NO_REFERRAL_REWARDS);

        self.tx().to(&caller).egld(&amount).transfer();
        self.referral_rewards_claimed_event(&caller, &amount);
    }

    /// Splits the EGLD fee between the referrer, if any, and the collector.
    fn book_fee(&self, caller: &ManagedAddress, referrer: &ManagedAddress, fee: &BigUint) {
        if *fee == 0u32 {
            return;
        }

        let mut collector_part = fee.clone();
        if !referrer.is_zero() && referrer != caller {
            let share = BigUint::from(self.referral_share().get());
            let referral_part = fee * &share / BigUint::from(TOTAL_PERCENTAGE);
            if referral_part > 0u32 {
                self.referral_rewards(referrer)
                    .update(|rewards| *rewards += &referral_part);
                collector_part -= referral_part;
            }
        }

        self.collected_fees()
            .update(|collected| *collected += collector_part);
    }

    #[view(getFeeCollector)]
    #[storage_mapper("feeCollector")]
    fn fee_collector(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getCollectedFees)]
    #[storage_mapper("collectedFees")]
    fn collected_fees(&self) -> SingleValueMapper<BigUint>;

    #[view(getReferralShare)]
    #[storage_mapper("referralShare")]
    fn referral_share(&self) -> SingleValueMapper<BasisPoints>;

    #[view(getReferralRewards)]
    #[storage_mapper("referralRewards")]
    fn referral_rewards(&self, referrer: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
