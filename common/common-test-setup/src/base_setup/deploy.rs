use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{BigUint, OptionalValue},
    ScenarioTxRun,
};
use proxies::batch_transfer_proxy::BatchTransferProxy;
use structs::{
    fee::FeeTier,
    network::{BatchCeilings, GasBudget, Network, NetworkProfile},
};

use crate::{
    base_setup::init::BaseSetup,
    constants::{
        BATCH_TRANSFER_ADDRESS, BATCH_TRANSFER_CODE_PATH, FEE_COLLECTOR_ADDRESS, OWNER_ADDRESS,
        TEST_BASE_FEE, TEST_MAX_FEE, TEST_MAX_NATIVE_TRANSFERS, TEST_MAX_TOKEN_TRANSFERS,
        TEST_MIN_FEE, TEST_PER_RECIPIENT_FEE,
    },
};

/// Small fees and ceilings so balances stay readable in assertions.
pub fn test_profile() -> NetworkProfile<StaticApi> {
    NetworkProfile::new(
        FeeTier::new(
            BigUint::from(TEST_BASE_FEE),
            BigUint::from(TEST_PER_RECIPIENT_FEE),
            BigUint::from(TEST_MIN_FEE),
            BigUint::from(TEST_MAX_FEE),
        ),
        GasBudget::default(),
        BatchCeilings {
            max_native_transfers: TEST_MAX_NATIVE_TRANSFERS,
            max_token_transfers: TEST_MAX_TOKEN_TRANSFERS,
        },
    )
}

impl BaseSetup {
    pub fn deploy_batch_transfer(
        &mut self,
        network: Network,
        opt_profile: OptionalValue<NetworkProfile<StaticApi>>,
    ) -> &mut Self {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(BatchTransferProxy)
            .init(FEE_COLLECTOR_ADDRESS, network, opt_profile)
            .code(BATCH_TRANSFER_CODE_PATH)
            .new_address(BATCH_TRANSFER_ADDRESS)
            .run();

        self
    }
}
