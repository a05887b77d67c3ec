use error_messages::INVALID_FEE_TIER;

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Pricing function of one network:
/// `clamp(base_fee + per_recipient_fee * count, min_fee, max_fee)`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug, PartialEq)]
pub struct FeeTier<M: ManagedTypeApi> {
    pub base_fee: BigUint<M>,
    pub per_recipient_fee: BigUint<M>,
    pub min_fee: BigUint<M>,
    pub max_fee: BigUint<M>,
}

impl<M: ManagedTypeApi> FeeTier<M> {
    pub fn new(
        base_fee: BigUint<M>,
        per_recipient_fee: BigUint<M>,
        min_fee: BigUint<M>,
        max_fee: BigUint<M>,
    ) -> Self {
        FeeTier {
            base_fee,
            per_recipient_fee,
            min_fee,
            max_fee,
        }
    }

    pub fn free() -> Self {
        FeeTier::new(
            BigUint::zero(),
            BigUint::zero(),
            BigUint::zero(),
            BigUint::zero(),
        )
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.min_fee > self.max_fee {
            return Err(INVALID_FEE_TIER);
        }

        Ok(())
    }

    /// Returns `None` for an empty batch.
    pub fn quote(&self, recipient_count: usize) -> Option<BigUint<M>> {
        if recipient_count == 0 {
            return None;
        }

        let variable_fee = &self.per_recipient_fee * &BigUint::from(recipient_count as u64);
        let raw_fee = &self.base_fee + &variable_fee;

        Some(self.clamp(raw_fee))
    }

    fn clamp(&self, raw_fee: BigUint<M>) -> BigUint<M> {
        if raw_fee < self.min_fee {
            return self.min_fee.clone();
        }
        if raw_fee > self.max_fee {
            return self.max_fee.clone();
        }

        raw_fee
    }

    pub fn into_multi_value(self) -> MultiValue4<BigUint<M>, BigUint<M>, BigUint<M>, BigUint<M>> {
        (
            self.base_fee,
            self.per_recipient_fee,
            self.min_fee,
            self.max_fee,
        )
            .into()
    }
}
