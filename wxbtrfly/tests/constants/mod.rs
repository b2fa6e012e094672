use multiversx_sc::types::TestAddress;
use multiversx_sc_scenario::imports::{MxscPath, TestTokenIdentifier};

pub const BTRFLY_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("BTRFLY-abcdef");
pub const BTRFLY_DECIMALS: u32 = 9;
pub const WX_BTRFLY_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WXBTRFLY-abcdef");
pub const WX_BTRFLY_DECIMALS: u32 = 18;

pub const EPOCH_LENGTH: u64 = 10;
pub const FIRST_EPOCH_BLOCK: u64 = 10;
pub const START_BLOCK: u64 = 1;

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const HOLDER_ADDRESS: TestAddress = TestAddress::new("holder");
pub const OTHER_HOLDER_ADDRESS: TestAddress = TestAddress::new("other-holder");

pub const STAKING_PATH: MxscPath = MxscPath::new("../staking/output/staking.mxsc.json");
pub const WXBTRFLY_PATH: MxscPath = MxscPath::new("output/wxbtrfly.mxsc.json");
