#![no_std]

macro_rules! error_messages {
    ($($name:ident => $msg:literal),* $(,)?) => {
        $(pub const $name: &str = $msg;)*
        pub const ALL_ERROR_MESSAGES: &[&str] = &[$($msg),*];
        pub const ALL_ERROR_NAMES: &[&str] = &[$(stringify!($name)),*];
    };
}

error_messages! {
    BATCH_TOO_LARGE => "Batch exceeds the network ceiling",
    CALLER_NOT_FEE_COLLECTOR_OR_OWNER => "Only the owner or the fee collector can withdraw fees",
    CONTRACT_PAUSED => "Batch transfers are paused",
    EMPTY_EXPECTED_LOG => "Expected log can not be empty",
    FEE_MISMATCH => "Attached fee does not match the current quote",
    FEE_PAYMENT_MISMATCH => "Attached EGLD must equal the batch fee",
    INSUFFICIENT_VALUE => "Supplied value does not cover transfers and fee",
    INVALID_BATCH => "Batch must contain at least one transfer",
    INVALID_BATCH_CEILING => "Batch ceilings must be greater than zero",
    INVALID_FEE_COLLECTOR => "Fee collector can not be the zero address",
    INVALID_FEE_TIER => "Minimum fee can not exceed maximum fee",
    INVALID_GAS_BUDGET => "Per-item gas budgets must be greater than zero",
    INVALID_REFERRAL_SHARE => "Referral share can not exceed 10000 basis points",
    INVALID_TOKEN_ID => "Invalid token ID",
    INVALID_TOKEN_PAYMENT => "Expected exactly one fungible payment of the batch token",
    NO_FEES_TO_WITHDRAW => "There are no collected fees to withdraw",
    NO_KNOWN_BATCH_TRANSFER => "No known Batch Transfer contract, deploy first",
    NO_REFERRAL_REWARDS => "There are no referral rewards for the caller",
    PROFILE_NOT_CONFIGURED => "No profile is configured for this network",
    TOKEN_NOT_WHITELISTED => "Token is not whitelisted",
}
