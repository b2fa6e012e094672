#![no_std]

multiversx_sc::imports!();

use common_errors::{
    ERROR_INSUFFICIENT_LIQUIDITY_MINTED, ERROR_INVALID_NUMBER_OF_ESDT_TRANSFERS,
    ERROR_INVALID_PAYMENT, ERROR_POOL_ALREADY_INITIALIZED, ERROR_POOL_NOT_INITIALIZED,
};

/// Two token constant product pool standing in for the BTRFLY/WETH pair.
///
/// Liquidity is added in the current reserve ratio only. Whatever exceeds the
/// ratio stays in the pool, there are no refunds.
#[multiversx_sc::contract]
pub trait SwapMock: common_math::SharedMathModule {
    /// The pool must hold the local mint role of `lp_token`.
    #[init]
    fn init(
        &self,
        first_token: TokenIdentifier,
        second_token: TokenIdentifier,
        lp_token: TokenIdentifier,
        first_decimals: u32,
        second_decimals: u32,
    ) {
        self.first_token().set(&first_token);
        self.second_token().set(&second_token);
        self.lp_token().set_token_id(lp_token);
        self.token_decimals(&first_token).set(first_decimals);
        self.token_decimals(&second_token).set(second_decimals);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Seeds the pool, minting `sqrt(first * second)` LP tokens.
    #[payable]
    #[endpoint(initPool)]
    fn init_pool(&self) -> EsdtTokenPayment {
        require!(
            self.lp_token_supply().get() == 0u64,
            ERROR_POOL_ALREADY_INITIALIZED
        );

        let (first_amount, second_amount) = self.read_pair_payments();
        let liquidity = (&first_amount * &second_amount).sqrt();

        self.mint_liquidity(&first_amount, &second_amount, liquidity)
    }

    /// Adds liquidity at the current ratio.
    ///
    /// # Returns
    /// - `EsdtTokenPayment`: LP tokens sent to the caller.
    #[payable]
    #[endpoint(addLiquidity)]
    fn add_liquidity(&self) -> EsdtTokenPayment {
        let supply = self.lp_token_supply().get();
        require!(supply > 0u64, ERROR_POOL_NOT_INITIALIZED);

        let (first_amount, second_amount) = self.read_pair_payments();
        let first_reserve = self.reserve(&self.first_token().get()).get();
        let second_reserve = self.reserve(&self.second_token().get()).get();

        let liquidity = self.get_min(
            self.mul_div_floor(&first_amount, &supply, &first_reserve),
            self.mul_div_floor(&second_amount, &supply, &second_reserve),
        );

        self.mint_liquidity(&first_amount, &second_amount, liquidity)
    }

    /// Amount of the other token matching `amount` of `token` at the current ratio.
    #[view(getEquivalent)]
    fn get_equivalent(&self, token: TokenIdentifier, amount: BigUint) -> BigUint {
        let first_token = self.first_token().get();
        let second_token = self.second_token().get();
        require!(
            token == first_token || token == second_token,
            ERROR_INVALID_PAYMENT
        );

        let other = if token == first_token {
            second_token
        } else {
            first_token
        };

        self.quote(
            &amount,
            &self.reserve(&token).get(),
            &self.reserve(&other).get(),
        )
    }

    #[view(getReserves)]
    fn get_reserves(&self) -> MultiValue2<BigUint, BigUint> {
        let first_reserve = self.reserve(&self.first_token().get()).get();
        let second_reserve = self.reserve(&self.second_token().get()).get();

        (first_reserve, second_reserve).into()
    }

    #[view(getTokenDecimals)]
    fn get_token_decimals(&self) -> MultiValue2<u32, u32> {
        let first_decimals = self.token_decimals(&self.first_token().get()).get();
        let second_decimals = self.token_decimals(&self.second_token().get()).get();

        (first_decimals, second_decimals).into()
    }

    fn read_pair_payments(&self) -> (BigUint, BigUint) {
        let payments = self.call_value().all_esdt_transfers();
        require!(payments.len() == 2, ERROR_INVALID_NUMBER_OF_ESDT_TRANSFERS);

        let first = payments.get(0);
        let second = payments.get(1);
        let first_token = self.first_token().get();
        let second_token = self.second_token().get();

        if first.token_identifier == first_token && second.token_identifier == second_token {
            (first.amount.clone(), second.amount.clone())
        } else if first.token_identifier == second_token && second.token_identifier == first_token
        {
            (second.amount.clone(), first.amount.clone())
        } else {
            sc_panic!(ERROR_INVALID_PAYMENT)
        }
    }

    fn mint_liquidity(
        &self,
        first_amount: &BigUint,
        second_amount: &BigUint,
        liquidity: BigUint,
    ) -> EsdtTokenPayment {
        require!(liquidity > 0u64, ERROR_INSUFFICIENT_LIQUIDITY_MINTED);

        self.reserve(&self.first_token().get())
            .update(|reserve| *reserve += first_amount);
        self.reserve(&self.second_token().get())
            .update(|reserve| *reserve += second_amount);
        self.lp_token_supply().update(|supply| *supply += &liquidity);

        let caller = self.blockchain().get_caller();
        self.lp_token().mint_and_send(&caller, liquidity)
    }

    #[view(getFirstTokenId)]
    #[storage_mapper("first_token")]
    fn first_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getSecondTokenId)]
    #[storage_mapper("second_token")]
    fn second_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getLpTokenIdentifier)]
    #[storage_mapper("lp_token")]
    fn lp_token(&self) -> FungibleTokenMapper;

    #[view(getLpTokenSupply)]
    #[storage_mapper("lp_token_supply")]
    fn lp_token_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("reserve")]
    fn reserve(&self, token: &TokenIdentifier) -> SingleValueMapper<BigUint>;

    #[storage_mapper("token_decimals")]
    fn token_decimals(&self, token: &TokenIdentifier) -> SingleValueMapper<u32>;
}
