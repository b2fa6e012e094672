use multiversx_sc::types::TestAddress;
use multiversx_sc_scenario::imports::{MxscPath, TestTokenIdentifier};

pub const BTRFLY_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("BTRFLY-abcdef");
pub const BTRFLY_DECIMALS: u32 = 9;

pub const WETH_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WETH-abcdef");
pub const WETH_DECIMALS: u32 = 18;
pub const WETH_FLOOR: u64 = 1_000_000_000_000; // 1000 BTRFLY

pub const LP_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("BTRFLYWETH-abcdef");

// 20 WETH back 10,000 BTRFLY, the other 10,000 are excess
pub const INITIAL_SUPPLY: u64 = 10_000_000_000_000;
// sqrt(10 BTRFLY * 2 WETH) minted when seeding the pool
pub const INITIAL_LP_SUPPLY: u64 = 141_421_356_237_309;

pub const START_BLOCK: u64 = 1;

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const FEE_RECIPIENT_ADDRESS: TestAddress = TestAddress::new("fee-recipient");
pub const KEEPER_ADDRESS: TestAddress = TestAddress::new("keeper");

pub const LIQUIDITY_UPKEEP_PATH: MxscPath = MxscPath::new("output/liquidity-upkeep.mxsc.json");
pub const TREASURY_PATH: MxscPath = MxscPath::new("../treasury/output/treasury.mxsc.json");
pub const BONDING_CALCULATOR_PATH: MxscPath =
    MxscPath::new("../bonding_calculator/output/bonding-calculator.mxsc.json");
pub const SWAP_MOCK_PATH: MxscPath = MxscPath::new("../swap_mock/output/swap-mock.mxsc.json");
