#![no_std]

use common_constants::{
    BPS, DEBT_RATIO_SCALE, MAX_PAYOUT_DENOMINATOR, PRICE_DIVISOR, PRICE_OFFSET, WAD,
};

multiversx_sc::imports!();

/// Closed form bond and index math shared by every contract of the protocol.
///
/// All results truncate toward zero. Callers rely on that: the fee split hands
/// the remainder to the primary side and the wrapper loses at most one unit
/// on a round trip.
#[multiversx_sc::module]
pub trait SharedMathModule {
    fn mul_div_floor(&self, a: &BigUint, b: &BigUint, denominator: &BigUint) -> BigUint {
        if denominator == &BigUint::zero() {
            return BigUint::zero();
        }
        (a * b) / denominator
    }

    fn apply_bps(&self, amount: &BigUint, bps: &BigUint) -> BigUint {
        self.mul_div_floor(amount, bps, &BigUint::from(BPS))
    }

    /// Splits `payout` into `(primary, secondary)` where the secondary share is
    /// `fee` basis points. Nothing is created or destroyed by the split.
    fn split_fee(&self, payout: &BigUint, fee: &BigUint) -> (BigUint, BigUint) {
        let secondary = self.get_min(self.apply_bps(payout, fee), payout.clone());
        let primary = payout - &secondary;

        (primary, secondary)
    }

    /// Outstanding debt relative to native supply, 1e9 == 100%.
    fn compute_debt_ratio(&self, current_debt: &BigUint, native_supply: &BigUint) -> BigUint {
        self.mul_div_floor(current_debt, &BigUint::from(DEBT_RATIO_SCALE), native_supply)
    }

    /// `max(minimum_price, 100 + 100 * debt_ratio * control_variable / 1e9)`
    ///
    /// # Arguments
    /// - `debt_ratio`: Debt ratio with 9 decimals.
    /// - `control_variable`: Sensitivity of the price to the debt ratio.
    /// - `minimum_price`: Floor, in hundredths of the unit of account.
    ///
    /// # Returns
    /// - The bond price in hundredths, never below `minimum_price`.
    fn compute_bond_price(
        &self,
        debt_ratio: &BigUint,
        control_variable: &BigUint,
        minimum_price: &BigUint,
    ) -> BigUint {
        let price = (control_variable * debt_ratio + BigUint::from(PRICE_OFFSET))
            / BigUint::from(PRICE_DIVISOR);

        self.get_max(price, minimum_price.clone())
    }

    /// Native tokens bought by `value` at `price`.
    fn compute_payout(&self, value: &BigUint, price: &BigUint) -> BigUint {
        self.mul_div_floor(value, &BigUint::from(100u64), price)
    }

    fn compute_max_payout(&self, native_supply: &BigUint, max_payout: &BigUint) -> BigUint {
        self.mul_div_floor(
            native_supply,
            max_payout,
            &BigUint::from(MAX_PAYOUT_DENOMINATOR),
        )
    }

    /// Part of `total_debt` released after `blocks_elapsed` blocks of a
    /// `vesting_term` long schedule, never above `total_debt`.
    fn compute_debt_decay(&self, total_debt: &BigUint, blocks_elapsed: u64, vesting_term: u64) -> BigUint {
        if vesting_term == 0 || blocks_elapsed >= vesting_term {
            return total_debt.clone();
        }

        let decay = self.mul_div_floor(
            total_debt,
            &BigUint::from(blocks_elapsed),
            &BigUint::from(vesting_term),
        );

        self.get_min(decay, total_debt.clone())
    }

    /// Linear vesting: `payout * elapsed / vesting`, the whole payout once the
    /// vesting period is over.
    fn vested_payout(&self, payout: &BigUint, blocks_elapsed: u64, vesting: u64) -> BigUint {
        if vesting == 0 || blocks_elapsed >= vesting {
            return payout.clone();
        }

        self.mul_div_floor(payout, &BigUint::from(blocks_elapsed), &BigUint::from(vesting))
    }

    /// Basis points of a bond vested after `blocks_elapsed`, capped at 10_000.
    fn percent_vested(&self, blocks_elapsed: u64, vesting: u64) -> u64 {
        if vesting == 0 || blocks_elapsed >= vesting {
            return BPS;
        }

        blocks_elapsed * BPS / vesting
    }

    /// Remaining vesting of a bond topped up with `new_payout`, weighted by payout
    /// so the first deposit keeps most of its progress.
    fn blended_vesting(
        &self,
        prior_payout: &BigUint,
        prior_remaining: u64,
        new_payout: &BigUint,
        vesting_term: u64,
    ) -> u64 {
        let total = prior_payout + new_payout;
        if total == 0u64 {
            return vesting_term;
        }

        let weighted = prior_payout * &BigUint::from(prior_remaining)
            + new_payout * &BigUint::from(vesting_term);

        (weighted / total).to_u64().unwrap_or(vesting_term)
    }

    /// Rebasing amount to wrapped amount (18 decimals) at `index` (9 decimals).
    fn to_wrapped(&self, amount: &BigUint, index: &BigUint) -> BigUint {
        self.mul_div_floor(amount, &BigUint::from(WAD), index)
    }

    fn from_wrapped(&self, wrapped: &BigUint, index: &BigUint) -> BigUint {
        self.mul_div_floor(wrapped, index, &BigUint::from(WAD))
    }

    /// Amount of the other side of a constant product pool matching `amount`.
    fn quote(&self, amount: &BigUint, reserve_in: &BigUint, reserve_out: &BigUint) -> BigUint {
        self.mul_div_floor(amount, reserve_out, reserve_in)
    }

    fn get_min(&self, a: BigUint, b: BigUint) -> BigUint {
        if a < b {
            a
        } else {
            b
        }
    }

    fn get_max(&self, a: BigUint, b: BigUint) -> BigUint {
        if a > b {
            a
        } else {
            b
        }
    }
}
