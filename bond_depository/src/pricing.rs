multiversx_sc::imports!();

use common_constants::BASE_PRICE;
use common_proxies::proxy_treasury;

use crate::{debt, storage};

#[multiversx_sc::module]
pub trait PricingModule:
    storage::Storage
    + debt::DebtModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// Current bond price in hundredths, from the decayed debt ratio.
    #[view(bondPrice)]
    fn bond_price(&self) -> BigUint {
        let terms = self.terms().get();

        self.compute_bond_price(
            &self.debt_ratio(),
            &terms.control_variable,
            &terms.minimum_price,
        )
    }

    /// Bond price expressed in principal units.
    ///
    /// LP bonds go through the markdown of the pair, reserve bonds through the
    /// decimals of the principal.
    #[view(bondPriceInPrincipal)]
    fn bond_price_in_principal(&self) -> BigUint {
        let price = self.bond_price();

        let unit = if self.is_liquidity_bond() {
            self.markdown()
        } else {
            let decimals = self
                .tx()
                .to(self.treasury().get())
                .typed(proxy_treasury::TreasuryProxy)
                .asset_decimals(self.principal_token().get())
                .returns(ReturnsResult)
                .sync_call_readonly();

            BigUint::from(10u64).pow(decimals)
        };

        self.mul_div_floor(&price, &unit, &BigUint::from(BASE_PRICE))
    }

    /// Native tokens a deposit worth `value` would pay out now.
    #[view(payoutFor)]
    fn payout_for(&self, value: BigUint) -> BigUint {
        self.compute_payout(&value, &self.bond_price())
    }

    /// Largest payout a single deposit may receive.
    #[view(maxPayout)]
    fn max_payout(&self) -> BigUint {
        self.compute_max_payout(&self.native_supply(), &self.terms().get().max_payout)
    }

    /// Steps the control variable towards its target once the buffer has passed.
    fn adjust(&self) {
        let mut adjustment = self.adjustment().get();
        let now = self.blockchain().get_block_nonce();

        let ready_at = adjustment.last_block.saturating_add(adjustment.buffer);
        if adjustment.rate == 0u64 || now < ready_at {
            return;
        }

        let mut terms = self.terms().get();
        let initial = terms.control_variable.clone();

        if adjustment.add {
            terms.control_variable += &adjustment.rate;
            if terms.control_variable >= adjustment.target {
                adjustment.rate = BigUint::zero();
            }
        } else {
            terms.control_variable = if terms.control_variable > adjustment.rate {
                &terms.control_variable - &adjustment.rate
            } else {
                BigUint::zero()
            };
            if terms.control_variable <= adjustment.target {
                adjustment.rate = BigUint::zero();
            }
        }

        adjustment.last_block = now;

        self.control_variable_adjustment_event(
            &initial,
            &terms.control_variable,
            &adjustment.rate,
            adjustment.add,
        );

        self.terms().set(terms);
        self.adjustment().set(adjustment);
    }
}
