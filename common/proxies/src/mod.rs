#![no_std]

pub mod proxy_bond_depository;
pub mod proxy_bonding_calculator;
pub mod proxy_liquidity_upkeep;
pub mod proxy_staking;
pub mod proxy_swap_mock;
pub mod proxy_treasury;
pub mod proxy_wxbtrfly;
