multiversx_sc::imports!();

use common_errors::{ERROR_ASSET_DECIMALS_NOT_SET, ERROR_CALCULATOR_NOT_SET};
use common_proxies::proxy_bonding_calculator;

use crate::storage;

#[multiversx_sc::module]
pub trait ValuationModule:
    storage::Storage + common_math::SharedMathModule + common_events::EventsModule
{
    /// Sets the native units backing one whole reserve token.
    #[only_owner]
    #[endpoint(setFloor)]
    fn set_floor(&self, token: TokenIdentifier, floor: BigUint) {
        self.floor(&token).set(&floor);
        self.floor_set_event(&token, &floor);
    }

    #[only_owner]
    #[endpoint(setAssetDecimals)]
    fn set_asset_decimals(&self, token: TokenIdentifier, decimals: u32) {
        self.asset_decimals(&token).set(decimals);
    }

    /// Native value of `amount` of `token`.
    ///
    /// Reserve tokens are valued at their floor, liquidity tokens through their
    /// bonding calculator. Unknown tokens are worth nothing.
    #[view(valueOf)]
    fn value_of(&self, token: &TokenIdentifier, amount: &BigUint) -> BigUint {
        if self.reserve_tokens().contains(token) {
            return self.reserve_value(token, amount);
        }

        if self.liquidity_tokens().contains(token) {
            let calculator = self.bond_calculator(token);
            require!(!calculator.is_empty(), ERROR_CALCULATOR_NOT_SET);

            return self
                .tx()
                .to(calculator.get())
                .typed(proxy_bonding_calculator::BondingCalculatorProxy)
                .valuation(token, amount)
                .returns(ReturnsResult)
                .sync_call_readonly();
        }

        BigUint::zero()
    }

    /// Reserves not backing circulating native supply.
    #[view(excessReserves)]
    fn excess_reserves(&self) -> BigUint {
        let reserves = self.total_reserves().get();
        let supply = self.native_supply().get();

        if reserves > supply {
            reserves - supply
        } else {
            BigUint::zero()
        }
    }

    /// Largest amount of `token` that `manage` can currently release.
    #[view(getManageableAmount)]
    fn get_manageable_amount(&self, token: &TokenIdentifier) -> BigUint {
        let balance = self.token_balance(token);
        let excess = self.excess_reserves();

        if self.reserve_tokens().contains(token) {
            let floor = self.floor(token).get();
            let affordable = self.mul_div_floor(&excess, &self.asset_unit(token), &floor);
            return self.get_min(balance, affordable);
        }

        let balance_value = self.value_of(token, &balance);
        if balance_value <= excess {
            return balance;
        }

        self.mul_div_floor(&balance, &excess, &balance_value)
    }

    fn reserve_value(&self, token: &TokenIdentifier, amount: &BigUint) -> BigUint {
        self.mul_div_floor(amount, &self.floor(token).get(), &self.asset_unit(token))
    }

    fn asset_unit(&self, token: &TokenIdentifier) -> BigUint {
        let decimals = self.asset_decimals(token);
        require!(!decimals.is_empty(), ERROR_ASSET_DECIMALS_NOT_SET);

        BigUint::from(10u64).pow(decimals.get())
    }

    fn token_balance(&self, token: &TokenIdentifier) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token.clone()), 0)
    }
}
