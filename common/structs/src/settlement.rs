use crate::{
    aliases::{BatchIndex, TransferResultsVec, TransfersVec},
    ledger::RefundLedger,
    transfer::{FailureReason, Transfer, TransferResult},
};

multiversx_sc::imports!();

/// Walks the batch in submission order. Each item is attempted exactly once and
/// its outcome is recorded; a failed item never stops the loop. Only delivered
/// amounts are booked on the ledger.
pub fn settle_batch<M, A, R>(
    transfers: &TransfersVec<M>,
    ledger: &mut RefundLedger<M>,
    mut attempt: A,
    mut on_result: R,
) -> TransferResultsVec<M>
where
    M: ManagedTypeApi,
    A: FnMut(BatchIndex, &Transfer<M>) -> Result<(), FailureReason>,
    R: FnMut(&TransferResult<M>),
{
    let mut results = ManagedVec::new();

    for (index, transfer_ref) in transfers.iter().enumerate() {
        let transfer: &Transfer<M> = &transfer_ref;
        let batch_index = index as BatchIndex;

        let outcome = attempt(batch_index, transfer);
        if outcome.is_ok() {
            ledger.record_delivery(&transfer.amount);
        }

        let result = TransferResult::from_outcome(batch_index, transfer, outcome);
        on_result(&result);
        results.push(result);
    }

    results
}
