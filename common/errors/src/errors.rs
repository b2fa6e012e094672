#![no_std]

// Bond depository

pub static ERROR_DEBT_CEILING_EXCEEDED: &[u8] = b"Max capacity reached";

pub static ERROR_BOND_TOO_LARGE: &[u8] = b"Bond too large";

pub static ERROR_BOND_TOO_SMALL: &[u8] = b"Bond too small";

pub static ERROR_SLIPPAGE_LIMIT: &[u8] = b"Slippage limit: more than max price";

pub static ERROR_NOTHING_TO_REDEEM: &[u8] = b"Nothing to redeem";

pub static ERROR_INVALID_DEPOSITOR: &[u8] = b"Invalid address";

pub static ERROR_TERMS_NOT_INITIALIZED: &[u8] = b"Bond terms not initialized";

pub static ERROR_DEBT_MUST_BE_ZERO: &[u8] = b"Debt must be 0 for initialization";

pub static ERROR_VESTING_TOO_SHORT: &[u8] = b"Vesting must be longer than 36 hours";

pub static ERROR_INVALID_VESTING: &[u8] = b"Vesting term must be positive";

pub static ERROR_PAYOUT_TOO_HIGH: &[u8] = b"Payout cannot be above 1 percent";

pub static ERROR_FEE_TOO_HIGH: &[u8] = b"DAO fee cannot exceed payout";

pub static ERROR_TITHE_TOO_HIGH: &[u8] = b"Tithe cannot exceed deposit";

pub static ERROR_INCREMENT_TOO_LARGE: &[u8] = b"Increment too large";

pub static ERROR_PROTECTED_TOKEN: &[u8] = b"Token cannot be recovered";

pub static ERROR_STAKING_NOT_SET: &[u8] = b"Staking contract not set";

pub static ERROR_INVALID_PAYMENT: &[u8] = b"Invalid payment token";

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero";

// Treasury

pub static ERROR_NOT_APPROVED: &[u8] = b"Not approved";

pub static ERROR_NOT_ACCEPTED: &[u8] = b"Not accepted";

pub static ERROR_MUST_QUEUE: &[u8] = b"Must queue";

pub static ERROR_QUEUE_NOT_EXPIRED: &[u8] = b"Queue not expired";

pub static ERROR_INVALID_PERMISSION_TARGET: &[u8] = b"Permission kind does not match target";

pub static ERROR_INSUFFICIENT_RESERVES: &[u8] = b"Insufficient reserves";

pub static ERROR_PROFIT_EXCEEDS_VALUE: &[u8] = b"Profit exceeds deposit value";

pub static ERROR_ASSET_DECIMALS_NOT_SET: &[u8] = b"Asset decimals not set";

pub static ERROR_CALCULATOR_NOT_SET: &[u8] = b"Bond calculator not set";

pub static ERROR_NOT_RESERVE_TOKEN: &[u8] = b"Not a reserve token";

// Staking

pub static ERROR_INSUFFICIENT_BALANCE: &[u8] = b"Insufficient xBTRFLY balance";

pub static ERROR_INSUFFICIENT_ALLOWANCE: &[u8] = b"Insufficient xBTRFLY allowance";

pub static ERROR_DEPOSITS_LOCKED: &[u8] = b"Deposits for account are locked";

pub static ERROR_INVALID_EPOCH_LENGTH: &[u8] = b"Epoch length must be positive";

// wxBTRFLY

pub static ERROR_STAKE_IN_WARMUP: &[u8] = b"Stake is still in warmup";

// Bonding calculator / pool

pub static ERROR_PAIR_NOT_REGISTERED: &[u8] = b"Pair not registered";

pub static ERROR_PAIR_EMPTY: &[u8] = b"Pair has no liquidity";

pub static ERROR_POOL_ALREADY_INITIALIZED: &[u8] = b"Pool already initialized";

pub static ERROR_POOL_NOT_INITIALIZED: &[u8] = b"Pool not initialized";

pub static ERROR_INVALID_NUMBER_OF_ESDT_TRANSFERS: &[u8] = b"Invalid number of ESDT transfers";

pub static ERROR_INSUFFICIENT_LIQUIDITY_MINTED: &[u8] = b"Insufficient liquidity minted";

// Liquidity upkeep

pub static ERROR_INSUFFICIENT_AMOUNTS: &[u8] = b"Insufficient amounts";

pub static ERROR_DEBT_FEE_TOO_HIGH: &[u8] = b"Debt fee cannot exceed 100 percent";
