use multiversx_sc::types::TestAddress;
use multiversx_sc_scenario::imports::{MxscPath, TestTokenIdentifier};

pub const BTRFLY_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("BTRFLY-abcdef");
pub const BTRFLY_DECIMALS: u32 = 9;
pub const BTRFLY_UNIT: u64 = 1_000_000_000;

pub const CRV_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("CRV-abcdef");
pub const CRV_DECIMALS: u32 = 18;
pub const CRV_FLOOR: u64 = 4_090_000_000; // 4.09 BTRFLY

pub const CVX_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("CVX-abcdef");
pub const CVX_DECIMALS: u32 = 18;
pub const CVX_FLOOR: u64 = 5_400_000_000; // 5.4 BTRFLY

pub const WETH_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WETH-abcdef");
pub const WETH_DECIMALS: u32 = 18;
pub const WETH_FLOOR: u64 = 1_000_000_000_000; // 1000 BTRFLY

pub const LP_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("BTRFLYWETH-abcdef");
pub const STRAY_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("STRAY-abcdef");

// 10,000 BTRFLY of supply backs every market
pub const INITIAL_SUPPLY: u64 = 10_000_000_000_000;

pub const CONTROL_VARIABLE: u64 = 285;
pub const VESTING_TERM: u64 = 33_110;
pub const MINIMUM_PRICE: u64 = 176_000;
pub const MAX_PAYOUT: u64 = 100; // 0.1% of supply
pub const FEE: u64 = 95; // 0.95%
pub const TITHE: u64 = 5; // 0.05%
pub const MAX_DEBT: u64 = 1_000_000_000_000_000;

pub const CVX_CONTROL_VARIABLE: u64 = 275;
pub const CVX_INITIAL_DEBT: u64 = 15_000_000_000_000;

pub const EPOCH_LENGTH: u64 = 2_200;
pub const FIRST_EPOCH_BLOCK: u64 = 1_000_000;

pub const START_BLOCK: u64 = 1;

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const DEPOSITOR_ADDRESS: TestAddress = TestAddress::new("depositor");
pub const OTHER_DEPOSITOR_ADDRESS: TestAddress = TestAddress::new("other-depositor");
pub const DAO_ADDRESS: TestAddress = TestAddress::new("dao");
pub const FEE_RECIPIENT_ADDRESS: TestAddress = TestAddress::new("fee-recipient");
pub const TITHE_RECIPIENT_ADDRESS: TestAddress = TestAddress::new("tithe-recipient");

pub const BOND_DEPOSITORY_PATH: MxscPath = MxscPath::new("output/bond-depository.mxsc.json");
pub const TREASURY_PATH: MxscPath = MxscPath::new("../treasury/output/treasury.mxsc.json");
pub const STAKING_PATH: MxscPath = MxscPath::new("../staking/output/staking.mxsc.json");
pub const BONDING_CALCULATOR_PATH: MxscPath =
    MxscPath::new("../bonding_calculator/output/bonding-calculator.mxsc.json");
pub const SWAP_MOCK_PATH: MxscPath = MxscPath::new("../swap_mock/output/swap-mock.mxsc.json");
