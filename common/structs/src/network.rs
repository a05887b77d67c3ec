use error_messages::{INVALID_BATCH_CEILING, INVALID_GAS_BUDGET};

use crate::{aliases::GasLimit, fee::FeeTier, SETTLEMENT_GAS_RESERVE};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub const ONE_NATIVE_UNIT: u64 = 1_000_000_000_000_000_000;
pub const MICRO_NATIVE_UNIT: u64 = ONE_NATIVE_UNIT / 1_000_000;

pub const DEFAULT_NATIVE_TRANSFER_GAS: GasLimit = 5_000_000;
pub const DEFAULT_TOKEN_TRANSFER_GAS: GasLimit = 7_500_000;
/// Largest per-item budget a profile may carry; the block gas limit of a
/// single transaction.
pub const MAX_TRANSFER_GAS: GasLimit = 600_000_000;

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum Network {
    Ethereum,
    Arbitrum,
    Bsc,
    Polygon,
    Custom,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum TransferKind {
    Native,
    Token,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub struct GasBudget {
    pub native_transfer_gas: GasLimit,
    pub token_transfer_gas: GasLimit,
}

impl Default for GasBudget {
    fn default() -> Self {
        GasBudget {
            native_transfer_gas: DEFAULT_NATIVE_TRANSFER_GAS,
            token_transfer_gas: DEFAULT_TOKEN_TRANSFER_GAS,
        }
    }
}

impl GasBudget {
    #[inline]
    pub fn for_kind(&self, kind: TransferKind) -> GasLimit {
        match kind {
            TransferKind::Native => self.native_transfer_gas,
            TransferKind::Token => self.token_transfer_gas,
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub struct BatchCeilings {
    pub max_native_transfers: u32,
    pub max_token_transfers: u32,
}

impl BatchCeilings {
    #[inline]
    pub fn for_kind(&self, kind: TransferKind) -> usize {
        match kind {
            TransferKind::Native => self.max_native_transfers as usize,
            TransferKind::Token => self.max_token_transfers as usize,
        }
    }
}

/// Everything that differs between deployment targets: pricing, per-item gas
/// and batch ceilings. One engine, one profile per network.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug, PartialEq)]
pub struct NetworkProfile<M: ManagedTypeApi> {
    pub fee_tier: FeeTier<M>,
    pub gas_budget: GasBudget,
    pub ceilings: BatchCeilings,
}

impl<M: ManagedTypeApi> NetworkProfile<M> {
    pub fn new(fee_tier: FeeTier<M>, gas_budget: GasBudget, ceilings: BatchCeilings) -> Self {
        NetworkProfile {
            fee_tier,
            gas_budget,
            ceilings,
        }
    }

    pub fn preset(network: Network) -> Self {
        match network {
            Network::Ethereum => Self::from_micro_units((1_000, 100, 1_000, 50_000), (300, 200)),
            Network::Arbitrum => Self::from_micro_units((200, 20, 200, 10_000), (400, 300)),
            Network::Bsc => Self::from_micro_units((1_000, 100, 1_000, 50_000), (500, 400)),
            Network::Polygon => {
                Self::from_micro_units((100_000, 10_000, 100_000, 5_000_000), (800, 600))
            }
            Network::Custom => NetworkProfile::new(
                FeeTier::free(),
                GasBudget::default(),
                BatchCeilings {
                    max_native_transfers: 100,
                    max_token_transfers: 100,
                },
            ),
        }
    }

    /// Fee amounts are in millionths of the native unit: `1_000` is 0.001.
    fn from_micro_units(fees: (u64, u64, u64, u64), ceilings: (u32, u32)) -> Self {
        let micro_unit = MICRO_NATIVE_UNIT;
        let (base_fee, per_recipient_fee, min_fee, max_fee) = fees;
        let (max_native_transfers, max_token_transfers) = ceilings;

        NetworkProfile::new(
            FeeTier::new(
                BigUint::from(base_fee * micro_unit),
                BigUint::from(per_recipient_fee * micro_unit),
                BigUint::from(min_fee * micro_unit),
                BigUint::from(max_fee * micro_unit),
            ),
            GasBudget::default(),
            BatchCeilings {
                max_native_transfers,
                max_token_transfers,
            },
        )
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        self.fee_tier.validate()?;

        if self.ceilings.max_native_transfers == 0 || self.ceilings.max_token_transfers == 0 {
            return Err(INVALID_BATCH_CEILING);
        }
        let budgets = [
            self.gas_budget.native_transfer_gas,
            self.gas_budget.token_transfer_gas,
        ];
        if budgets
            .iter()
            .any(|&budget| budget == 0 || budget > MAX_TRANSFER_GAS)
        {
            return Err(INVALID_GAS_BUDGET);
        }

        Ok(())
    }

    #[inline]
    pub fn max_batch_size(&self, kind: TransferKind) -> usize {
        self.ceilings.for_kind(kind)
    }

    #[inline]
    pub fn gas_per_item(&self, kind: TransferKind) -> GasLimit {
        self.gas_budget.for_kind(kind)
    }

    /// Gas that must still be available before an item is attempted.
    #[inline]
    pub fn required_gas_left(&self, kind: TransferKind) -> GasLimit {
        self.gas_per_item(kind)
            .saturating_add(SETTLEMENT_GAS_RESERVE)
    }
}
