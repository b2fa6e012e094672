multiversx_sc::imports!();

use common_constants::DEBT_RATIO_SCALE;
use common_errors::ERROR_DEBT_CEILING_EXCEEDED;
use common_proxies::{proxy_bonding_calculator, proxy_treasury};

use crate::storage;

/// Outstanding bond debt, decaying linearly over one vesting term.
#[multiversx_sc::module]
pub trait DebtModule: storage::Storage + common_math::SharedMathModule {
    /// Debt released since the last decay, never more than the total debt.
    #[view(debtDecay)]
    fn debt_decay(&self) -> BigUint {
        let elapsed = self.blockchain().get_block_nonce() - self.last_decay().get();

        self.compute_debt_decay(
            &self.total_debt().get(),
            elapsed,
            self.terms().get().vesting_term,
        )
    }

    #[view(currentDebt)]
    fn current_debt(&self) -> BigUint {
        self.total_debt().get() - self.debt_decay()
    }

    /// `current_debt * 1e9 / native_supply`, zero without supply.
    #[view(debtRatio)]
    fn debt_ratio(&self) -> BigUint {
        self.compute_debt_ratio(&self.current_debt(), &self.native_supply())
    }

    /// Debt ratio of LP bonds expressed against the non native side of the pair.
    #[view(standardizedDebtRatio)]
    fn standardized_debt_ratio(&self) -> BigUint {
        let ratio = self.debt_ratio();
        if !self.is_liquidity_bond() {
            return ratio;
        }

        self.mul_div_floor(
            &ratio,
            &self.markdown(),
            &BigUint::from(DEBT_RATIO_SCALE),
        )
    }

    #[view(isLiquidityBond)]
    fn is_liquidity_bond(&self) -> bool {
        !self.bond_calculator().is_empty()
    }

    fn decay_debt(&self) {
        let decay = self.debt_decay();
        self.total_debt().update(|debt| *debt -= decay);
        self.last_decay().set(self.blockchain().get_block_nonce());
    }

    fn require_debt_capacity(&self, value: &BigUint, max_debt: &BigUint) {
        require!(
            &(&self.total_debt().get() + value) <= max_debt,
            ERROR_DEBT_CEILING_EXCEEDED
        );
    }

    fn native_supply(&self) -> BigUint {
        self.tx()
            .to(self.treasury().get())
            .typed(proxy_treasury::TreasuryProxy)
            .native_supply()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn markdown(&self) -> BigUint {
        self.tx()
            .to(self.bond_calculator().get())
            .typed(proxy_bonding_calculator::BondingCalculatorProxy)
            .markdown(self.principal_token().get())
            .returns(ReturnsResult)
            .sync_call_readonly()
    }
}
