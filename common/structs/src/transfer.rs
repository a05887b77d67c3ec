use crate::aliases::{BatchIndex, TransferResultsVec};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Debug, PartialEq)]
pub struct Transfer<M: ManagedTypeApi> {
    pub to: ManagedAddress<M>,
    pub amount: BigUint<M>,
}

impl<M: ManagedTypeApi> Transfer<M> {
    pub fn new(to: ManagedAddress<M>, amount: BigUint<M>) -> Self {
        Transfer { to, amount }
    }
}

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Copy, Debug, PartialEq,
)]
pub enum FailureReason {
    RecipientRejected,
    NonPayableContract,
    BudgetExceeded,
    ZeroAmount,
    InvalidRecipient,
}

/// VM return code of a call that ran out of its forwarded gas.
pub const OUT_OF_GAS_ERROR_CODE: u32 = 5;

impl FailureReason {
    /// Classifies a failed transfer call by its VM return code.
    pub fn from_error_code(error_code: u32, recipient_is_contract: bool) -> Self {
        match error_code {
            OUT_OF_GAS_ERROR_CODE => FailureReason::BudgetExceeded,
            _ if recipient_is_contract => FailureReason::NonPayableContract,
            _ => FailureReason::RecipientRejected,
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Debug, PartialEq)]
pub struct TransferResult<M: ManagedTypeApi> {
    pub batch_index: BatchIndex,
    pub to: ManagedAddress<M>,
    pub amount: BigUint<M>,
    pub success: bool,
    pub failure_reason: Option<FailureReason>,
}

impl<M: ManagedTypeApi> TransferResult<M> {
    pub fn from_outcome(
        batch_index: BatchIndex,
        transfer: &Transfer<M>,
        outcome: Result<(), FailureReason>,
    ) -> Self {
        TransferResult {
            batch_index,
            to: transfer.to.clone(),
            amount: transfer.amount.clone(),
            success: outcome.is_ok(),
            failure_reason: outcome.err(),
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug, PartialEq)]
pub struct BatchReceipt<M: ManagedTypeApi> {
    pub results: TransferResultsVec<M>,
    pub total_spent: BigUint<M>,
    pub total_refunded: BigUint<M>,
    pub fee_charged: BigUint<M>,
}

impl<M: ManagedTypeApi> BatchReceipt<M> {
    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|result| result.success).count()
    }
}
