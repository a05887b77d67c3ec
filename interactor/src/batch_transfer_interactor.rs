use multiversx_sc_snippets::imports::*;
use proxies::batch_transfer_proxy::BatchTransferProxy;
use structs::{
    network::{NetworkProfile, TransferKind},
    transfer::{BatchReceipt, Transfer},
};

use crate::interactor_config::Config;
use crate::interactor_state::State;

const BATCH_TRANSFER_CODE_PATH: MxscPath =
    MxscPath::new("../batch-transfer/output/batch-transfer.mxsc.json");
const INTERACTOR_WORKING_DIR: &str = "interactor";

pub const ISSUE_COST: u64 = 50_000_000_000_000_000; // 0.05 EGLD
const DEPLOY_GAS: u64 = 100_000_000;
const ADMIN_GAS: u64 = 30_000_000;
const BATCH_BASE_GAS: u64 = 20_000_000;
const BATCH_ITEM_GAS: u64 = 10_000_000;

pub struct BatchTransferInteract {
    pub interactor: Interactor,
    pub wallet_address: Address,
    pub referrer_address: Address,
    pub state: State,
    config: Config,
}

impl BatchTransferInteract {
    pub async fn new(config: Config) -> Self {
        let mut interactor = Interactor::new(config.gateway_uri())
            .await
            .use_chain_simulator(config.use_chain_simulator());

        interactor.set_current_dir_from_workspace(INTERACTOR_WORKING_DIR);

        let wallet_address = interactor.register_wallet(test_wallets::grace()).await; //shard 1
        let referrer_address = interactor.register_wallet(test_wallets::eve()).await; //shard 1

        if config.use_chain_simulator() {
            interactor.generate_blocks_until_epoch(1u64).await.unwrap();
        }

        BatchTransferInteract {
            interactor,
            wallet_address,
            referrer_address,
            state: State::load_state(),
            config,
        }
    }

    pub async fn deploy(&mut self) {
        self.deploy_with_profile(None).await;
    }

    pub async fn deploy_with_profile(&mut self, opt_profile: Option<NetworkProfile<StaticApi>>) {
        let fee_collector = match &self.config.fee_collector {
            Some(bech32_address) => {
                Bech32Address::from_bech32_string(bech32_address.clone()).to_address()
            }
            None => self.wallet_address.clone(),
        };

        let new_address = self
            .interactor
            .tx()
            .from(&self.wallet_address)
            .gas(DEPLOY_GAS)
            .typed(BatchTransferProxy)
            .init(
                ManagedAddress::from(fee_collector),
                self.config.network(),
                OptionalValue::from(opt_profile),
            )
            .code(BATCH_TRANSFER_CODE_PATH)
            .code_metadata(CodeMetadata::all())
            .returns(ReturnsNewAddress)
            .run()
            .await;

        let new_address_bech32 = Bech32Address::from(new_address.clone()).to_bech32_string();
        self.state
            .set_batch_transfer_address(Bech32Address::from_bech32_string(
                new_address_bech32.clone(),
            ));

        println!("new Batch-Transfer address: {new_address_bech32}");
    }

    /// Deploys a second instance without the payable flag. Plain value
    /// transfers to it are refused by the protocol.
    pub async fn deploy_non_payable_contract(&mut self) -> Address {
        let wallet_address = ManagedAddress::from(&self.wallet_address);

        let new_address = self
            .interactor
            .tx()
            .from(&self.wallet_address)
            .gas(DEPLOY_GAS)
            .typed(BatchTransferProxy)
            .init(
                wallet_address,
                self.config.network(),
                OptionalValue::<NetworkProfile<StaticApi>>::None,
            )
            .code(BATCH_TRANSFER_CODE_PATH)
            .code_metadata(CodeMetadata::UPGRADEABLE)
            .returns(ReturnsNewAddress)
            .run()
            .await;

        println!("new non-payable contract: {}", Bech32Address::from(new_address.clone()).to_bech32_string());

        new_address
    }

    pub async fn issue_fungible_token(&mut self, ticker: &str, amount: u64) -> String {
        let token_id = self
            .interactor
            .tx()
            .from(&self.wallet_address)
            .to(ESDTSystemSCAddress)
            .gas(DEPLOY_GAS)
            .typed(ESDTSystemSCProxy)
            .issue_and_set_all_roles(
                BigUint::from(ISSUE_COST),
                ticker.to_string(),
                ticker.to_string(),
                EsdtTokenType::Fungible,
                0usize,
            )
            .returns(ReturnsNewTokenIdentifier)
            .run()
            .await;

        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(&self.wallet_address)
            .gas(DEPLOY_GAS)
            .typed(UserBuiltinProxy)
            .esdt_local_mint(TokenIdentifier::from(token_id.as_str()), 0, BigUint::from(amount))
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("Issued {token_id}");

        token_id
    }

    pub async fn quote(&mut self, recipient_count: usize) {
        let fee = self
            .interactor
            .query()
            .to(self.state.batch_transfer_address())
            .typed(BatchTransferProxy)
            .calculate_fee(recipient_count)
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("Fee for {recipient_count} recipients: {fee}");
    }

    pub async fn fee_config(&mut self) {
        let (base_fee, per_recipient_fee, min_fee, max_fee) = self
            .interactor
            .query()
            .to(self.state.batch_transfer_address())
            .typed(BatchTransferProxy)
            .get_current_chain_fee_config()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await
            .into_tuple();

        let max_batch_size = self
            .interactor
            .query()
            .to(self.state.batch_transfer_address())
            .typed(BatchTransferProxy)
            .get_max_batch_size(TransferKind::Native)
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("base fee: {base_fee}");
        println!("per recipient fee: {per_recipient_fee}");
        println!("min fee: {min_fee}");
        println!("max fee: {max_fee}");
        println!("max native batch size: {max_batch_size}");
    }

    pub async fn set_whitelist(&mut self, token_id: &str, supported: bool) {
        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.batch_transfer_address())
            .gas(ADMIN_GAS)
            .typed(BatchTransferProxy)
            .set_whitelist(TokenIdentifier::from(token_id), supported)
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("Token {token_id} whitelisted: {supported}");
    }

    pub async fn set_referral_share(&mut self, share: u32) {
        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.batch_transfer_address())
            .gas(ADMIN_GAS)
            .typed(BatchTransferProxy)
            .set_referral_share(share)
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;
    }

    /// Attaches the amounts, the quoted fee and `surplus`, which comes back as
    /// part of the refund.
    pub async fn batch_transfer_native(
        &mut self,
        recipients: &[(Address, u128)],
        referrer: Option<Address>,
        surplus: u128,
    ) -> BatchReceipt<StaticApi> {
        let (transfers, total) = build_transfers(recipients);
        let fee = self.calculate_fee(transfers.len()).await;
        let referrer = referrer
            .map(ManagedAddress::from)
            .unwrap_or_else(ManagedAddress::zero);

        let batch_gas = BATCH_BASE_GAS + BATCH_ITEM_GAS * transfers.len() as u64;
        let payment = total + &fee + BigUint::from_bytes_be(&surplus.to_be_bytes());
        let receipt = self
            .interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.batch_transfer_address())
            .gas(batch_gas)
            .typed(BatchTransferProxy)
            .batch_transfer_native(fee, referrer, transfers)
            .egld(payment)
            .returns(ReturnsResult)
            .run()
            .await;

        print_receipt(&receipt);

        receipt
    }

    /// Sends `token_amount` of `token_id` for the transfers and the quoted fee
    /// in EGLD.
    pub async fn batch_transfer_token(
        &mut self,
        token_id: &str,
        recipients: &[(Address, u128)],
        token_amount: u128,
    ) -> BatchReceipt<StaticApi> {
        let (transfers, _) = build_transfers(recipients);
        let fee = self.calculate_fee(transfers.len()).await;

        let mut payment = ManagedVec::<StaticApi, EgldOrEsdtTokenPayment<StaticApi>>::new();
        payment.push(EgldOrEsdtTokenPayment::new(
            EgldOrEsdtTokenIdentifier::egld(),
            0,
            fee.clone(),
        ));
        payment.push(EgldOrEsdtTokenPayment::new(
            EgldOrEsdtTokenIdentifier::esdt(TokenIdentifier::from(token_id)),
            0,
            BigUint::from_bytes_be(&token_amount.to_be_bytes()),
        ));

        let batch_gas = BATCH_BASE_GAS + BATCH_ITEM_GAS * transfers.len() as u64;
        let receipt = self
            .interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.batch_transfer_address())
            .gas(batch_gas)
            .typed(BatchTransferProxy)
            .batch_transfer_token(
                TokenIdentifier::from(token_id),
                fee,
                ManagedAddress::zero(),
                transfers,
            )
            .payment(payment)
            .returns(ReturnsResult)
            .run()
            .await;

        print_receipt(&receipt);

        receipt
    }

    pub async fn pause(&mut self) {
        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.batch_transfer_address())
            .gas(ADMIN_GAS)
            .typed(BatchTransferProxy)
            .pause_endpoint()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("Batch submission paused");
    }

    pub async fn unpause(&mut self) {
        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.batch_transfer_address())
            .gas(ADMIN_GAS)
            .typed(BatchTransferProxy)
            .unpause_endpoint()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("Batch submission resumed");
    }

    pub async fn withdraw_fees(&mut self) {
        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.batch_transfer_address())
            .gas(ADMIN_GAS)
            .typed(BatchTransferProxy)
            .withdraw_fees()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("Collected fees sent to the fee collector");
    }

    pub async fn claim_referral_rewards(&mut self) {
        self.interactor
            .tx()
            .from(&self.referrer_address)
            .to(self.state.batch_transfer_address())
            .gas(ADMIN_GAS)
            .typed(BatchTransferProxy)
            .claim_referral_rewards()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;
    }

    pub async fn calculate_fee(&mut self, recipient_count: usize) -> BigUint<StaticApi> {
        self.interactor
            .query()
            .to(self.state.batch_transfer_address())
            .typed(BatchTransferProxy)
            .calculate_fee(recipient_count)
            .returns(ReturnsResult)
            .run()
            .await
    }

    pub async fn collected_fees(&mut self) -> BigUint<StaticApi> {
        self.interactor
            .query()
            .to(self.state.batch_transfer_address())
            .typed(BatchTransferProxy)
            .collected_fees()
            .returns(ReturnsResult)
            .run()
            .await
    }

    pub async fn referral_rewards(&mut self, referrer: &Address) -> BigUint<StaticApi> {
        self.interactor
            .query()
            .to(self.state.batch_transfer_address())
            .typed(BatchTransferProxy)
            .referral_rewards(ManagedAddress::from(referrer))
            .returns(ReturnsResult)
            .run()
            .await
    }

    pub async fn egld_balance(&mut self, address: &Address) -> u128 {
        self.interactor
            .get_account(address)
            .await
            .balance
            .parse()
            .unwrap()
    }

    pub async fn esdt_balance(&mut self, address: &Address, token_id: &str) -> u128 {
        self.interactor
            .get_account_esdt(address)
            .await
            .get(token_id)
            .map(|esdt_balance| esdt_balance.balance.parse().unwrap())
            .unwrap_or_default()
    }

    pub fn batch_transfer_address(&self) -> Address {
        self.state.batch_transfer_address().to_address()
    }
}

fn build_transfers(
    recipients: &[(Address, u128)],
) -> (ManagedVec<StaticApi, Transfer<StaticApi>>, BigUint<StaticApi>) {
    let mut transfers = ManagedVec::new();
    let mut total = BigUint::zero();
    for (to, amount) in recipients {
        let amount = BigUint::from_bytes_be(&amount.to_be_bytes());
        total += &amount;
        transfers.push(Transfer::new(ManagedAddress::from(to), amount));
    }

    (transfers, total)
}

fn print_receipt(receipt: &BatchReceipt<StaticApi>) {
    println!(
        "Delivered {} of {} transfers",
        receipt.success_count(),
        receipt.results.len()
    );
    for result in receipt.results.iter() {
        if let Some(reason) = result.failure_reason {
            println!("  #{} failed: {:?}", result.batch_index, reason);
        }
    }
}
