use error_messages::EMPTY_EXPECTED_LOG;
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{Address, BigUint, ManagedBuffer, TestTokenIdentifier},
    scenario_model::{Log, TxResponseStatus},
};

use crate::base_setup::init::BaseSetup;

impl BaseSetup {
    pub fn check_egld_balance(&mut self, address: Address, expected_balance: u64) {
        self.world
            .check_account(address)
            .balance(BigUint::<StaticApi>::from(expected_balance));
    }

    pub fn check_esdt_balance(
        &mut self,
        address: Address,
        token_id: TestTokenIdentifier,
        expected_balance: u64,
    ) {
        self.world
            .check_account(address)
            .esdt_balance(token_id, BigUint::<StaticApi>::from(expected_balance));
    }

    pub fn assert_expected_log(&mut self, logs: Vec<Log>, expected_log: Option<&str>) {
        match expected_log {
            None => {
                assert!(
                    logs.is_empty(),
                    "Expected no logs, but found some: {:?}",
                    logs
                );
            }
            Some(expected_str) => {
                assert!(!expected_str.is_empty(), "{}", EMPTY_EXPECTED_LOG);
                let expected_bytes = ManagedBuffer::<StaticApi>::from(expected_str).to_vec();

                let found_log = logs
                    .iter()
                    .find(|log| log.topics.iter().any(|topic| *topic == expected_bytes));

                assert!(
                    found_log.is_some(),
                    "Expected log '{}' not found",
                    expected_str
                );
            }
        }
    }

    pub fn count_logs(&self, logs: &[Log], identifier: &str) -> usize {
        let expected_bytes = ManagedBuffer::<StaticApi>::from(identifier).to_vec();

        logs.iter()
            .filter(|log| log.topics.first() == Some(&expected_bytes))
            .count()
    }

    pub fn assert_expected_error_message<T>(
        &mut self,
        response: Result<T, TxResponseStatus>,
        expected_error_message: Option<&str>,
    ) -> Option<T> {
        match response {
            Ok(value) => {
                assert!(
                    expected_error_message.is_none(),
                    "Transaction was successful, but expected error"
                );
                Some(value)
            }
            Err(error) => {
                assert_eq!(expected_error_message, Some(error.message.as_str()));
                None
            }
        }
    }
}
