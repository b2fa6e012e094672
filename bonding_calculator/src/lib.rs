#![no_std]

multiversx_sc::imports!();

use common_constants::{NATIVE_UNIT, WAD};
use common_errors::{ERROR_PAIR_EMPTY, ERROR_PAIR_NOT_REGISTERED};
use common_proxies::proxy_swap_mock;

/// Values LP tokens of native pairs in native units.
///
/// The value of a pair is `2 * sqrt(k)`, with `k` the product of the reserves
/// normalized to 18 decimals. One side of the pair can therefore never be
/// worth more than the other, which is what makes the value safe to mint against.
#[multiversx_sc::contract]
pub trait BondingCalculator: common_math::SharedMathModule {
    #[init]
    fn init(&self, native_token: TokenIdentifier) {
        self.native_token().set(native_token);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Registers a pool, keyed by the LP token it issues.
    #[only_owner]
    #[endpoint(addPair)]
    fn add_pair(&self, pair: ManagedAddress) {
        let lp_token = self
            .tx()
            .to(&pair)
            .typed(proxy_swap_mock::SwapMockProxy)
            .lp_token()
            .returns(ReturnsResult)
            .sync_call_readonly();

        self.pair(&lp_token).set(pair);
    }

    /// Product of the pair reserves with 18 decimals.
    #[view(getKValue)]
    fn get_k_value(&self, lp_token: TokenIdentifier) -> BigUint {
        let pair = self.require_pair(&lp_token);
        let (first_reserve, second_reserve) = self.pair_reserves(&pair);
        let (first_decimals, second_decimals) = self
            .tx()
            .to(&pair)
            .typed(proxy_swap_mock::SwapMockProxy)
            .get_token_decimals()
            .returns(ReturnsResult)
            .sync_call_readonly()
            .into_tuple();

        self.mul_div_floor(
            &(first_reserve * second_reserve),
            &BigUint::from(WAD),
            &BigUint::from(10u64).pow(first_decimals + second_decimals),
        )
    }

    /// `2 * sqrt(k)`, in native units.
    #[view(getTotalValue)]
    fn get_total_value(&self, lp_token: TokenIdentifier) -> BigUint {
        self.get_k_value(lp_token).sqrt() * BigUint::from(2u64)
    }

    /// Share of the pair value represented by `amount` LP tokens.
    #[view(valuation)]
    fn valuation(&self, lp_token: TokenIdentifier, amount: BigUint) -> BigUint {
        let pair = self.require_pair(&lp_token);
        let lp_supply = self
            .tx()
            .to(&pair)
            .typed(proxy_swap_mock::SwapMockProxy)
            .lp_token_supply()
            .returns(ReturnsResult)
            .sync_call_readonly();

        let total_value = self.get_total_value(lp_token);

        self.mul_div_floor(&total_value, &amount, &lp_supply)
    }

    /// Non native reserve per unit of pair value, scaled by `2 * 10^9`.
    ///
    /// Converts a native denominated bond price into the units of the
    /// non native side of the pair.
    #[view(markdown)]
    fn markdown(&self, lp_token: TokenIdentifier) -> BigUint {
        let pair = self.require_pair(&lp_token);
        let (first_reserve, second_reserve) = self.pair_reserves(&pair);

        let first_token = self
            .tx()
            .to(&pair)
            .typed(proxy_swap_mock::SwapMockProxy)
            .first_token()
            .returns(ReturnsResult)
            .sync_call_readonly();

        let reserve = if first_token == self.native_token().get() {
            second_reserve
        } else {
            first_reserve
        };

        let total_value = self.get_total_value(lp_token);
        require!(total_value > 0u64, ERROR_PAIR_EMPTY);

        self.mul_div_floor(&reserve, &BigUint::from(2 * NATIVE_UNIT), &total_value)
    }

    fn require_pair(&self, lp_token: &TokenIdentifier) -> ManagedAddress {
        let pair = self.pair(lp_token);
        require!(!pair.is_empty(), ERROR_PAIR_NOT_REGISTERED);

        pair.get()
    }

    fn pair_reserves(&self, pair: &ManagedAddress) -> (BigUint, BigUint) {
        self.tx()
            .to(pair)
            .typed(proxy_swap_mock::SwapMockProxy)
            .get_reserves()
            .returns(ReturnsResult)
            .sync_call_readonly()
            .into_tuple()
    }

    #[view(getNativeToken)]
    #[storage_mapper("native_token")]
    fn native_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getPair)]
    #[storage_mapper("pair")]
    fn pair(&self, lp_token: &TokenIdentifier) -> SingleValueMapper<ManagedAddress>;
}
