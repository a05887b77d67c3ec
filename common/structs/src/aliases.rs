multiversx_sc::imports!();

pub type GasLimit = u64;
pub type BatchIndex = u32;
pub type BasisPoints = u32;

pub type TransfersVec<M> = ManagedVec<M, crate::transfer::Transfer<M>>;
pub type TransferResultsVec<M> = ManagedVec<M, crate::transfer::TransferResult<M>>;
pub type FeeConfigTuple<M> = MultiValue4<BigUint<M>, BigUint<M>, BigUint<M>, BigUint<M>>;
pub type WhitelistUpdateArg<M> = MultiValue2<TokenIdentifier<M>, bool>;
