#![no_std]

/// One whole BTRFLY, 9 decimals
pub const NATIVE_UNIT: u64 = 1_000_000_000;

pub const WAD: u128 = 1_000_000_000_000_000_000; // 1e18, precision of wxBTRFLY
pub const WAD_PRECISION: usize = 18;

pub const BPS: u64 = 10_000; // 100%

/// Scale of the debt ratio, 1e9 == 100%
pub const DEBT_RATIO_SCALE: u64 = 1_000_000_000;

/// Bond prices are quoted in hundredths of the unit of account
pub const BASE_PRICE: u64 = 100;
/// `(bcv * ratio + PRICE_OFFSET) / PRICE_DIVISOR` == `100 + 100 * bcv * ratio / 1e9`
pub const PRICE_OFFSET: u64 = 1_000_000_000;
pub const PRICE_DIVISOR: u64 = 10_000_000;

/// Denominator of the per deposit payout cap, 1_000 == 1% of supply
pub const MAX_PAYOUT_DENOMINATOR: u64 = 100_000;
pub const MAX_PAYOUT_LIMIT: u64 = 1_000;

/// 0.01 BTRFLY
pub const MIN_PAYOUT: u64 = 10_000_000;

/// ~36 hours of blocks
pub const MIN_VESTING_TERM: u64 = 10_000;

/// BCV adjustments are bounded to 2.5% of the current value per step
pub const MAX_ADJUSTMENT_NUMERATOR: u64 = 25;
pub const MAX_ADJUSTMENT_DENOMINATOR: u64 = 1_000;

/// Staking index precision and starting value
pub const INITIAL_INDEX: u64 = 1_000_000_000;
/// 5,000,000 xBTRFLY fragments seed the rebasing ledger
pub const INITIAL_FRAGMENTS_SUPPLY: u64 = 5_000_000_000_000_000;
/// Gons are the invariant unit behind rebasing balances
pub const TOTAL_GONS_EXP: u32 = 50;

/// Thecosomata debt fee denominator
pub const DEBT_FEE_DENOMINATOR: u64 = 1_000_000;
