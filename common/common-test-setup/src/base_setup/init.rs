use crate::constants::BATCH_TRANSFER_CODE_PATH;
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{Address, BigUint, TestTokenIdentifier},
    ScenarioWorld,
};

pub struct BaseSetup {
    pub world: ScenarioWorld,
}

pub struct AccountSetup<'a> {
    pub address: Address,
    pub esdt_balances: Option<Vec<(TestTokenIdentifier<'a>, BigUint<StaticApi>)>>,
    pub egld_balance: Option<BigUint<StaticApi>>,
}

impl AccountSetup<'_> {
    pub fn empty(address: Address) -> Self {
        AccountSetup {
            address,
            esdt_balances: None,
            egld_balance: None,
        }
    }
}

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(BATCH_TRANSFER_CODE_PATH, batch_transfer::ContractBuilder);

    blockchain
}

impl BaseSetup {
    pub fn new(account_setups: Vec<AccountSetup>) -> Self {
        let mut world = world();

        for acc in account_setups {
            let mut acc_builder = world.account(acc.address.clone()).nonce(1);

            if let Some(esdt_balances) = &acc.esdt_balances {
                for (token_id, amount) in esdt_balances {
                    acc_builder = acc_builder.esdt_balance(*token_id, amount.clone());
                }
            }

            if let Some(balance) = &acc.egld_balance {
                acc_builder.balance(balance.clone());
            }
        }

        Self { world }
    }
}
