use error_messages::INSUFFICIENT_VALUE;

use crate::{
    aliases::{TransferResultsVec, TransfersVec},
    transfer::BatchReceipt,
};

multiversx_sc::imports!();

/// Value accounting for one batch. The refund is derived, never tracked, so
/// `supplied == fee + spent + refund()` holds by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct RefundLedger<M: ManagedTypeApi> {
    supplied: BigUint<M>,
    fee: BigUint<M>,
    spent: BigUint<M>,
}

impl<M: ManagedTypeApi> RefundLedger<M> {
    pub fn open(
        supplied: BigUint<M>,
        fee: BigUint<M>,
        requested: &BigUint<M>,
    ) -> Result<Self, &'static str> {
        if supplied < requested + &fee {
            return Err(INSUFFICIENT_VALUE);
        }

        Ok(RefundLedger {
            supplied,
            fee,
            spent: BigUint::zero(),
        })
    }

    pub fn record_delivery(&mut self, amount: &BigUint<M>) {
        self.spent += amount;
    }

    pub fn supplied(&self) -> &BigUint<M> {
        &self.supplied
    }

    pub fn fee(&self) -> &BigUint<M> {
        &self.fee
    }

    pub fn spent(&self) -> &BigUint<M> {
        &self.spent
    }

    pub fn refund(&self) -> BigUint<M> {
        &self.supplied - &self.fee - &self.spent
    }

    pub fn close(self, results: TransferResultsVec<M>) -> BatchReceipt<M> {
        let total_refunded = self.refund();

        BatchReceipt {
            results,
            total_spent: self.spent,
            total_refunded,
            fee_charged: self.fee,
        }
    }
}

pub fn sum_amounts<M: ManagedTypeApi>(transfers: &TransfersVec<M>) -> BigUint<M> {
    let mut total = BigUint::zero();
    for transfer in transfers.iter() {
        total += &transfer.amount;
    }

    total
}
