use common_test_setup::base_setup::{
    deploy::test_profile,
    init::{AccountSetup, BaseSetup},
};
use common_test_setup::constants::{
    BATCH_GAS_LIMIT, BATCH_TRANSFER_ADDRESS, FEE_COLLECTOR_ADDRESS, FIRST_RECEIVER_ADDRESS,
    FIRST_TEST_TOKEN, ONE_HUNDRED_MILLION, OWNER_ADDRESS, OWNER_BALANCE, REFERRER_ADDRESS,
    SECOND_RECEIVER_ADDRESS, SECOND_TEST_TOKEN, THIRD_RECEIVER_ADDRESS, USER_ADDRESS,
    USER_BALANCE,
};
use multiversx_sc::{
    imports::OptionalValue,
    types::{
        BigUint, EgldOrEsdtTokenIdentifier, EgldOrEsdtTokenPayment, ManagedAddress, ManagedVec,
        MultiEgldOrEsdtPayment, MultiValueEncoded, ReturnsResult, TestAddress,
        TestTokenIdentifier, TokenIdentifier,
    },
};
use multiversx_sc::types::ReturnsHandledOrError;
use multiversx_sc_scenario::{api::StaticApi, ReturnsLogs, ScenarioTxRun};
use proxies::batch_transfer_proxy::BatchTransferProxy;
use structs::{
    aliases::TransfersVec,
    fee::FeeTier,
    network::{Network, NetworkProfile, TransferKind},
    transfer::{BatchReceipt, Transfer},
};

pub struct BatchTransferTestState {
    pub common_setup: BaseSetup,
}

impl BatchTransferTestState {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let owner_account = AccountSetup {
            address: OWNER_ADDRESS.to_address(),
            esdt_balances: None,
            egld_balance: Some(OWNER_BALANCE.into()),
        };

        let user_account = AccountSetup {
            address: USER_ADDRESS.to_address(),
            esdt_balances: Some(vec![
                (FIRST_TEST_TOKEN, ONE_HUNDRED_MILLION.into()),
                (SECOND_TEST_TOKEN, ONE_HUNDRED_MILLION.into()),
            ]),
            egld_balance: Some(USER_BALANCE.into()),
        };

        let account_setups = vec![
            owner_account,
            user_account,
            AccountSetup::empty(FEE_COLLECTOR_ADDRESS.to_address()),
            AccountSetup::empty(REFERRER_ADDRESS.to_address()),
            AccountSetup::empty(FIRST_RECEIVER_ADDRESS.to_address()),
            AccountSetup::empty(SECOND_RECEIVER_ADDRESS.to_address()),
            AccountSetup::empty(THIRD_RECEIVER_ADDRESS.to_address()),
        ];

        let common_setup = BaseSetup::new(account_setups);

        Self { common_setup }
    }

    pub fn deploy_with_test_profile(&mut self) -> &mut Self {
        self.common_setup
            .deploy_batch_transfer(Network::Custom, OptionalValue::Some(test_profile()));

        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn batch_transfer_native(
        &mut self,
        transfers: TransfersVec<StaticApi>,
        expected_fee: u64,
        referrer: ManagedAddress<StaticApi>,
        value: u64,
        gas_limit: u64,
        expected_error_message: Option<&str>,
        expected_log: Option<&str>,
    ) -> Option<BatchReceipt<StaticApi>> {
        let (result, logs) = self
            .common_setup
            .world
            .tx()
            .from(USER_ADDRESS)
            .to(BATCH_TRANSFER_ADDRESS)
            .gas(gas_limit)
            .typed(BatchTransferProxy)
            .batch_transfer_native(BigUint::from(expected_fee), referrer, transfers)
            .egld(BigUint::from(value))
            .returns(ReturnsHandledOrError::new().returns(ReturnsResult))
            .returns(ReturnsLogs)
            .run();

        if expected_log.is_some() {
            self.common_setup
                .assert_expected_log(logs, expected_log);
        }

        self.common_setup
            .assert_expected_error_message(result, expected_error_message)
    }

    pub fn batch_transfer_token(
        &mut self,
        token_id: TestTokenIdentifier,
        transfers: TransfersVec<StaticApi>,
        expected_fee: u64,
        payment: MultiEgldOrEsdtPayment<StaticApi>,
        expected_error_message: Option<&str>,
        expected_log: Option<&str>,
    ) -> Option<BatchReceipt<StaticApi>> {
        let (result, logs) = self
            .common_setup
            .world
            .tx()
            .from(USER_ADDRESS)
            .to(BATCH_TRANSFER_ADDRESS)
            .gas(BATCH_GAS_LIMIT)
            .typed(BatchTransferProxy)
            .batch_transfer_token(
                TokenIdentifier::from(token_id),
                BigUint::from(expected_fee),
                ManagedAddress::zero(),
                transfers,
            )
            .payment(payment)
            .returns(ReturnsHandledOrError::new().returns(ReturnsResult))
            .returns(ReturnsLogs)
            .run();

        if expected_log.is_some() {
            self.common_setup
                .assert_expected_log(logs, expected_log);
        }

        self.common_setup
            .assert_expected_error_message(result, expected_error_message)
    }

    pub fn set_whitelist(
        &mut self,
        token_id: TestTokenIdentifier,
        supported: bool,
        expected_error_message: Option<&str>,
        expected_log: Option<&str>,
    ) {
        let (result, logs) = self
            .common_setup
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(BATCH_TRANSFER_ADDRESS)
            .typed(BatchTransferProxy)
            .set_whitelist(TokenIdentifier::from(token_id), supported)
            .returns(ReturnsHandledOrError::new())
            .returns(ReturnsLogs)
            .run();

        self.common_setup
            .assert_expected_error_message(result, expected_error_message);
        if expected_log.is_some() {
            self.common_setup.assert_expected_log(logs, expected_log);
        }
    }

    pub fn batch_update_token_whitelist(&mut self, updates: Vec<(TestTokenIdentifier, bool)>) {
        let mut args = MultiValueEncoded::new();
        for (token_id, supported) in updates {
            args.push((TokenIdentifier::from(token_id), supported).into());
        }

        self.common_setup
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(BATCH_TRANSFER_ADDRESS)
            .typed(BatchTransferProxy)
            .batch_update_token_whitelist(args)
            .run();
    }

    pub fn set_tier(
        &mut self,
        caller: TestAddress,
        network: Network,
        fee_tier: FeeTier<StaticApi>,
        expected_error_message: Option<&str>,
    ) {
        let result = self
            .common_setup
            .world
            .tx()
            .from(caller)
            .to(BATCH_TRANSFER_ADDRESS)
            .typed(BatchTransferProxy)
            .set_tier(network, fee_tier)
            .returns(ReturnsHandledOrError::new())
            .run();

        self.common_setup
            .assert_expected_error_message(result, expected_error_message);
    }

    pub fn set_network_profile(&mut self, network: Network, profile: NetworkProfile<StaticApi>) {
        self.common_setup
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(BATCH_TRANSFER_ADDRESS)
            .typed(BatchTransferProxy)
            .set_network_profile(network, profile)
            .run();
    }

    pub fn set_active_network(
        &mut self,
        network: Network,
        expected_error_message: Option<&str>,
        expected_log: Option<&str>,
    ) {
        let (result, logs) = self
            .common_setup
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(BATCH_TRANSFER_ADDRESS)
            .typed(BatchTransferProxy)
            .set_active_network(network)
            .returns(ReturnsHandledOrError::new())
            .returns(ReturnsLogs)
            .run();

        self.common_setup
            .assert_expected_error_message(result, expected_error_message);
        if expected_log.is_some() {
            self.common_setup.assert_expected_log(logs, expected_log);
        }
    }

    pub fn set_referral_share(&mut self, share: u32, expected_error_message: Option<&str>) {
        let result = self
            .common_setup
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(BATCH_TRANSFER_ADDRESS)
            .typed(BatchTransferProxy)
            .set_referral_share(share)
            .returns(ReturnsHandledOrError::new())
            .run();

        self.common_setup
            .assert_expected_error_message(result, expected_error_message);
    }

    pub fn set_fee_collector(
        &mut self,
        fee_collector: ManagedAddress<StaticApi>,
        expected_error_message: Option<&str>,
    ) {
        let result = self
            .common_setup
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(BATCH_TRANSFER_ADDRESS)
            .typed(BatchTransferProxy)
            .set_fee_collector(fee_collector)
            .returns(ReturnsHandledOrError::new())
            .run();

        self.common_setup
            .assert_expected_error_message(result, expected_error_message);
    }

    pub fn withdraw_fees(
        &mut self,
        caller: TestAddress,
        expected_error_message: Option<&str>,
        expected_log: Option<&str>,
    ) {
        let (result, logs) = self
            .common_setup
            .world
            .tx()
            .from(caller)
            .to(BATCH_TRANSFER_ADDRESS)
            .typed(BatchTransferProxy)
            .withdraw_fees()
            .returns(ReturnsHandledOrError::new())
            .returns(ReturnsLogs)
            .run();

        self.common_setup
            .assert_expected_error_message(result, expected_error_message);
        if expected_log.is_some() {
            self.common_setup.assert_expected_log(logs, expected_log);
        }
    }

    pub fn claim_referral_rewards(
        &mut self,
        caller: TestAddress,
        expected_error_message: Option<&str>,
    ) {
        let result = self
            .common_setup
            .world
            .tx()
            .from(caller)
            .to(BATCH_TRANSFER_ADDRESS)
            .typed(BatchTransferProxy)
            .claim_referral_rewards()
            .returns(ReturnsHandledOrError::new())
            .run();

        self.common_setup
            .assert_expected_error_message(result, expected_error_message);
    }

    pub fn set_common_tokens(
        &mut self,
        caller: TestAddress,
        network: Network,
        tokens: &[TestTokenIdentifier],
        expected_error_message: Option<&str>,
    ) {
        let mut args = MultiValueEncoded::new();
        for token_id in tokens {
            args.push(TokenIdentifier::from(*token_id));
        }

        let result = self
            .common_setup
            .world
            .tx()
            .from(caller)
            .to(BATCH_TRANSFER_ADDRESS)
            .typed(BatchTransferProxy)
            .set_common_tokens(network, args)
            .returns(ReturnsHandledOrError::new())
            .run();

        self.common_setup
            .assert_expected_error_message(result, expected_error_message);
    }

    pub fn pause(&mut self) {
        self.common_setup
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(BATCH_TRANSFER_ADDRESS)
            .typed(BatchTransferProxy)
            .pause_endpoint()
            .run();
    }

    pub fn calculate_fee(&mut self, recipient_count: usize) -> BigUint<StaticApi> {
        self.common_setup
            .world
            .query()
            .to(BATCH_TRANSFER_ADDRESS)
            .typed(BatchTransferProxy)
            .calculate_fee(recipient_count)
            .returns(ReturnsResult)
            .run()
    }

    pub fn fee_config(&mut self) -> FeeTier<StaticApi> {
        let (base_fee, per_recipient_fee, min_fee, max_fee) = self
            .common_setup
            .world
            .query()
            .to(BATCH_TRANSFER_ADDRESS)
            .typed(BatchTransferProxy)
            .get_current_chain_fee_config()
            .returns(ReturnsResult)
            .run()
            .into_tuple();

        FeeTier::new(base_fee, per_recipient_fee, min_fee, max_fee)
    }

    pub fn max_batch_size(&mut self, kind: TransferKind) -> usize {
        self.common_setup
            .world
            .query()
            .to(BATCH_TRANSFER_ADDRESS)
            .typed(BatchTransferProxy)
            .get_max_batch_size(kind)
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_whitelisted(&mut self, token_id: TestTokenIdentifier) -> bool {
        self.common_setup
            .world
            .query()
            .to(BATCH_TRANSFER_ADDRESS)
            .typed(BatchTransferProxy)
            .is_whitelisted(TokenIdentifier::from(token_id))
            .returns(ReturnsResult)
            .run()
    }

    pub fn common_tokens(&mut self) -> Vec<TokenIdentifier<StaticApi>> {
        self.common_setup
            .world
            .query()
            .to(BATCH_TRANSFER_ADDRESS)
            .typed(BatchTransferProxy)
            .get_common_tokens()
            .returns(ReturnsResult)
            .run()
            .into_iter()
            .collect()
    }

    pub fn tier(&mut self, network: Network) -> FeeTier<StaticApi> {
        self.common_setup
            .world
            .query()
            .to(BATCH_TRANSFER_ADDRESS)
            .typed(BatchTransferProxy)
            .get_tier(network)
            .returns(ReturnsResult)
            .run()
    }

    pub fn network_profile(&mut self, network: Network) -> NetworkProfile<StaticApi> {
        self.common_setup
            .world
            .query()
            .to(BATCH_TRANSFER_ADDRESS)
            .typed(BatchTransferProxy)
            .get_network_profile(network)
            .returns(ReturnsResult)
            .run()
    }

    pub fn collected_fees(&mut self) -> BigUint<StaticApi> {
        self.common_setup
            .world
            .query()
            .to(BATCH_TRANSFER_ADDRESS)
            .typed(BatchTransferProxy)
            .collected_fees()
            .returns(ReturnsResult)
            .run()
    }

    pub fn referral_rewards(&mut self, referrer: TestAddress) -> BigUint<StaticApi> {
        self.common_setup
            .world
            .query()
            .to(BATCH_TRANSFER_ADDRESS)
            .typed(BatchTransferProxy)
            .referral_rewards(referrer)
            .returns(ReturnsResult)
            .run()
    }
}

pub fn transfers(items: &[(TestAddress, u64)]) -> TransfersVec<StaticApi> {
    let mut batch = ManagedVec::new();
    for (to, amount) in items {
        batch.push(Transfer::new(to.to_managed_address(), BigUint::from(*amount)));
    }

    batch
}

pub fn token_payment(
    token_id: TestTokenIdentifier,
    token_amount: u64,
    egld_fee: u64,
) -> MultiEgldOrEsdtPayment<StaticApi> {
    let mut payment = ManagedVec::new();
    if egld_fee > 0 {
        payment.push(EgldOrEsdtTokenPayment::new(
            EgldOrEsdtTokenIdentifier::egld(),
            0,
            BigUint::from(egld_fee),
        ));
    }
    payment.push(EgldOrEsdtTokenPayment::new(
        EgldOrEsdtTokenIdentifier::esdt(TokenIdentifier::from(token_id)),
        0,
        BigUint::from(token_amount),
    ));

    payment
}

/// Items that fail before any call is made: the zero address is never a valid
/// recipient.
pub fn zero_address_transfers(amounts: &[u64]) -> TransfersVec<StaticApi> {
    let mut batch = ManagedVec::new();
    for amount in amounts {
        batch.push(Transfer::new(ManagedAddress::zero(), BigUint::from(*amount)));
    }

    batch
}
