use multiversx_sc_scenario::imports::{MxscPath, TestAddress, TestSCAddress, TestTokenIdentifier};

pub const BATCH_TRANSFER_ADDRESS: TestSCAddress = TestSCAddress::new("batch-transfer");

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const USER_ADDRESS: TestAddress = TestAddress::new("user");
pub const FEE_COLLECTOR_ADDRESS: TestAddress = TestAddress::new("fee-collector");
pub const REFERRER_ADDRESS: TestAddress = TestAddress::new("referrer");
pub const FIRST_RECEIVER_ADDRESS: TestAddress = TestAddress::new("first-receiver");
pub const SECOND_RECEIVER_ADDRESS: TestAddress = TestAddress::new("second-receiver");
pub const THIRD_RECEIVER_ADDRESS: TestAddress = TestAddress::new("third-receiver");

pub const BATCH_TRANSFER_CODE_PATH: MxscPath =
    MxscPath::new("../batch-transfer/output/batch-transfer.mxsc.json");

pub const FIRST_TEST_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("GREEN-0e161c");
pub const SECOND_TEST_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("LTST-4f849e");
pub const WRONG_TOKEN_ID: TestTokenIdentifier = TestTokenIdentifier::new("WRONG-TOKEN");

pub const OWNER_BALANCE: u64 = 100_000_000_000;
pub const USER_BALANCE: u64 = 100_000_000_000;
pub const ONE_HUNDRED_MILLION: u64 = 100_000_000;

pub const BATCH_GAS_LIMIT: u64 = 600_000_000;
pub const LOW_GAS_LIMIT: u64 = 6_000_000;

pub const TEST_BASE_FEE: u64 = 1_000;
pub const TEST_PER_RECIPIENT_FEE: u64 = 100;
pub const TEST_MIN_FEE: u64 = 1_000;
pub const TEST_MAX_FEE: u64 = 5_000;
pub const TEST_MAX_NATIVE_TRANSFERS: u32 = 5;
pub const TEST_MAX_TOKEN_TRANSFERS: u32 = 3;

pub const TRANSFER_DETAIL_LOG: &str = "transferDetail";
pub const BATCH_SUMMARY_LOG: &str = "batchSummary";
pub const FEE_TIER_UPDATED_LOG: &str = "feeTierUpdated";
pub const ACTIVE_NETWORK_CHANGED_LOG: &str = "activeNetworkChanged";
pub const TOKEN_WHITELIST_UPDATED_LOG: &str = "tokenWhitelistUpdated";
pub const FEE_COLLECTOR_CHANGED_LOG: &str = "feeCollectorChanged";
pub const FEES_WITHDRAWN_LOG: &str = "feesWithdrawn";
pub const REFERRAL_REWARDS_CLAIMED_LOG: &str = "referralRewardsClaimed";

pub const ONLY_OWNER_ERROR: &str = "Endpoint can only be called by owner";
