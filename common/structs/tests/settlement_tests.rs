use error_messages::INSUFFICIENT_VALUE;
use multiversx_sc::types::{BigUint, ManagedAddress, ManagedVec};
use multiversx_sc_scenario::api::StaticApi;
use proptest::prelude::*;
use structs::{
    aliases::TransfersVec,
    ledger::{sum_amounts, RefundLedger},
    settlement::settle_batch,
    transfer::{FailureReason, Transfer, OUT_OF_GAS_ERROR_CODE},
};

fn address(seed: u8) -> ManagedAddress<StaticApi> {
    ManagedAddress::new_from_bytes(&[seed; 32])
}

fn batch(items: &[(u8, u64)]) -> TransfersVec<StaticApi> {
    let mut transfers = ManagedVec::new();
    for (seed, amount) in items {
        transfers.push(Transfer::new(address(*seed), BigUint::from(*amount)));
    }

    transfers
}

#[test]
fn ledger_rejects_underfunded_batch() {
    let result = RefundLedger::<StaticApi>::open(
        BigUint::from(100u64),
        BigUint::from(10u64),
        &BigUint::from(91u64),
    );

    assert_eq!(result.err(), Some(INSUFFICIENT_VALUE));
}

#[test]
fn ledger_accepts_exact_value() {
    let ledger = RefundLedger::<StaticApi>::open(
        BigUint::from(100u64),
        BigUint::from(10u64),
        &BigUint::from(90u64),
    )
    .unwrap();

    assert_eq!(ledger.refund(), BigUint::from(90u64));
}

#[test]
fn failed_middle_item_is_refunded() {
    let transfers = batch(&[(1, 10), (2, 20), (3, 30)]);
    let supplied = BigUint::from(65u64);
    let fee = BigUint::from(5u64);
    let mut ledger =
        RefundLedger::open(supplied, fee, &sum_amounts(&transfers)).unwrap();

    let rejected = address(2);
    let results = settle_batch(
        &transfers,
        &mut ledger,
        |_, transfer| {
            if transfer.to == rejected {
                Err(FailureReason::RecipientRejected)
            } else {
                Ok(())
            }
        },
        |_| {},
    );

    let receipt = ledger.close(results);
    assert_eq!(receipt.total_spent, BigUint::from(40u64));
    assert_eq!(receipt.total_refunded, BigUint::from(20u64));
    assert_eq!(receipt.fee_charged, BigUint::from(5u64));
    assert_eq!(receipt.success_count(), 2);

    let middle = receipt.results.get(1);
    assert_eq!(middle.batch_index, 1);
    assert!(!middle.success);
    assert_eq!(middle.failure_reason, Some(FailureReason::RecipientRejected));
}

#[test]
fn duplicate_recipients_are_separate_items() {
    let transfers = batch(&[(7, 1), (7, 2), (7, 3)]);
    let mut ledger =
        RefundLedger::open(BigUint::from(6u64), BigUint::zero(), &BigUint::from(6u64)).unwrap();

    let mut attempted = Vec::new();
    let results = settle_batch(
        &transfers,
        &mut ledger,
        |index, _| {
            attempted.push(index);
            if index == 1 {
                Err(FailureReason::BudgetExceeded)
            } else {
                Ok(())
            }
        },
        |_| {},
    );

    assert_eq!(attempted, vec![0, 1, 2]);
    assert_eq!(results.len(), 3);
    assert!(results.get(0).success);
    assert!(!results.get(1).success);
    assert!(results.get(2).success);
    assert_eq!(ledger.spent(), &BigUint::from(4u64));
    assert_eq!(ledger.refund(), BigUint::from(2u64));
}

#[test]
fn every_result_reported_in_order() {
    let transfers = batch(&[(1, 5), (2, 6), (3, 7), (4, 8)]);
    let mut ledger =
        RefundLedger::open(BigUint::from(30u64), BigUint::from(4u64), &BigUint::from(26u64))
            .unwrap();

    let mut reported = Vec::new();
    let results = settle_batch(
        &transfers,
        &mut ledger,
        |_, _| Ok(()),
        |result| reported.push(result.batch_index),
    );

    assert_eq!(reported, vec![0, 1, 2, 3]);
    for (index, result) in results.iter().enumerate() {
        let expected = transfers.get(index);
        assert_eq!(result.to, expected.to);
        assert_eq!(result.amount, expected.amount);
        assert_eq!(result.failure_reason, None);
    }
    assert_eq!(ledger.refund(), BigUint::zero());
}

#[test]
fn out_of_gas_call_is_budget_exceeded() {
    assert_eq!(
        FailureReason::from_error_code(OUT_OF_GAS_ERROR_CODE, true),
        FailureReason::BudgetExceeded
    );
    assert_eq!(
        FailureReason::from_error_code(OUT_OF_GAS_ERROR_CODE, false),
        FailureReason::BudgetExceeded
    );
}

#[test]
fn other_call_errors_split_by_recipient_kind() {
    // user error, execution failed
    for error_code in [4u32, 10] {
        assert_eq!(
            FailureReason::from_error_code(error_code, true),
            FailureReason::NonPayableContract
        );
        assert_eq!(
            FailureReason::from_error_code(error_code, false),
            FailureReason::RecipientRejected
        );
    }
}

proptest! {
    #[test]
    fn value_is_conserved(
        items in prop::collection::vec((1u8..=255, 0u64..1_000_000, any::<bool>()), 1..40),
        fee in 0u64..10_000,
        surplus in 0u64..1_000_000,
    ) {
        let amounts: Vec<(u8, u64)> = items.iter().map(|(seed, amount, _)| (*seed, *amount)).collect();
        let transfers = batch(&amounts);
        let requested = sum_amounts(&transfers);
        let supplied = &requested + &BigUint::from(fee + surplus);
        let mut ledger = RefundLedger::open(supplied.clone(), BigUint::from(fee), &requested).unwrap();

        let results = settle_batch(
            &transfers,
            &mut ledger,
            |index, _| {
                if items[index as usize].2 {
                    Ok(())
                } else {
                    Err(FailureReason::RecipientRejected)
                }
            },
            |_| {},
        );

        let delivered: u64 = items
            .iter()
            .filter(|(_, _, passes)| *passes)
            .map(|(_, amount, _)| *amount)
            .sum();

        let receipt = ledger.close(results);
        prop_assert_eq!(receipt.results.len(), items.len());
        prop_assert_eq!(&receipt.total_spent, &BigUint::from(delivered));
        prop_assert_eq!(
            &receipt.fee_charged + &receipt.total_spent + &receipt.total_refunded,
            supplied
        );
        for (index, result) in receipt.results.iter().enumerate() {
            prop_assert_eq!(result.batch_index as usize, index);
            prop_assert_eq!(result.success, items[index].2);
        }
    }
}
