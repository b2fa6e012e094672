#![no_std]

multiversx_sc::imports!();

pub use common_events::*;

use common_constants::WAD_PRECISION;
use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INVALID_PAYMENT, ERROR_STAKE_IN_WARMUP,
};
use common_proxies::proxy_staking;

/// Non rebasing wrapper of staked BTRFLY.
///
/// One wxBTRFLY (18 decimals) is worth `index / 1e9` xBTRFLY, so wrapped
/// balances stay constant while the staked value behind them grows with every
/// rebase.
#[multiversx_sc::contract]
pub trait WxBtrfly:
    common_math::SharedMathModule
    + common_events::EventsModule
    + multiversx_sc_modules::default_issue_callbacks::DefaultIssueCallbacksModule
{
    /// # Arguments
    /// - `staking`: Staking contract holding the rebasing ledger.
    /// - `native_token`: BTRFLY token identifier.
    #[init]
    fn init(&self, staking: ManagedAddress, native_token: TokenIdentifier) {
        self.staking().set(staking);
        self.native_token().set(native_token);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Issues wxBTRFLY with 18 decimals and all local roles set on this contract.
    #[only_owner]
    #[payable("EGLD")]
    #[endpoint(registerWrappedToken)]
    fn register_wrapped_token(&self, token_name: ManagedBuffer, ticker: ManagedBuffer) {
        let payment_amount = self.call_value().egld();
        self.wrapped_token().issue_and_set_all_roles(
            payment_amount.clone_value(),
            token_name,
            ticker,
            WAD_PRECISION,
            None,
        );
    }

    /// Stakes the BTRFLY sent along and wraps the resulting xBTRFLY.
    ///
    /// The stake is claimed right away, so a staking warmup makes this fail.
    ///
    /// # Returns
    /// - `EsdtTokenPayment`: wxBTRFLY minted to the caller.
    #[payable]
    #[endpoint(wrapFromBTRFLY)]
    fn wrap_from_btrfly(&self) -> EsdtTokenPayment {
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.native_token().get(),
            ERROR_INVALID_PAYMENT
        );
        require!(payment.amount > 0u64, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let sc_address = self.blockchain().get_sc_address();
        let staked_before = self.staked_balance(&sc_address);

        self.tx()
            .to(self.staking().get())
            .typed(proxy_staking::StakingProxy)
            .stake(&sc_address)
            .single_esdt(&payment.token_identifier, 0, &payment.amount)
            .sync_call();

        self.tx()
            .to(self.staking().get())
            .typed(proxy_staking::StakingProxy)
            .claim(&sc_address)
            .sync_call();

        // Only xBTRFLY actually credited to this contract backs new wxBTRFLY
        let credited = self.staked_balance(&sc_address) - staked_before;
        require!(credited > 0u64, ERROR_STAKE_IN_WARMUP);

        self.mint_wrapped(&credited)
    }

    /// Pulls `amount` xBTRFLY from the caller and wraps it.
    ///
    /// The caller must first `approve` this contract on the staking ledger.
    #[endpoint(wrapFromxBTRFLY)]
    fn wrap_from_xbtrfly(&self, amount: BigUint) -> EsdtTokenPayment {
        require!(amount > 0u64, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let caller = self.blockchain().get_caller();
        self.tx()
            .to(self.staking().get())
            .typed(proxy_staking::StakingProxy)
            .transfer_from(&caller, self.blockchain().get_sc_address(), &amount)
            .sync_call();

        self.mint_wrapped(&amount)
    }

    /// Burns the wxBTRFLY sent along and returns the underlying BTRFLY.
    #[payable]
    #[endpoint(unwrapToBTRFLY)]
    fn unwrap_to_btrfly(&self) -> EsdtTokenPayment {
        let amount = self.burn_wrapped();

        let payment = self
            .tx()
            .to(self.staking().get())
            .typed(proxy_staking::StakingProxy)
            .unstake(&amount, false)
            .returns(ReturnsResult)
            .sync_call();

        let caller = self.blockchain().get_caller();
        self.tx().to(&caller).payment(&payment).transfer();

        payment
    }

    /// Burns the wxBTRFLY sent along and credits the underlying xBTRFLY.
    #[payable]
    #[endpoint(unwrapToxBTRFLY)]
    fn unwrap_to_xbtrfly(&self) -> BigUint {
        let amount = self.burn_wrapped();

        let caller = self.blockchain().get_caller();
        self.tx()
            .to(self.staking().get())
            .typed(proxy_staking::StakingProxy)
            .transfer(&caller, &amount)
            .sync_call();

        amount
    }

    /// xBTRFLY backing `amount` wxBTRFLY.
    #[view(xBTRFLYValue)]
    fn x_btrfly_value(&self, amount: BigUint) -> BigUint {
        self.from_wrapped(&amount, &self.real_index())
    }

    /// wxBTRFLY matching `amount` xBTRFLY.
    #[view(wBTRFLYValue)]
    fn w_btrfly_value(&self, amount: BigUint) -> BigUint {
        self.to_wrapped(&amount, &self.real_index())
    }

    #[view(realIndex)]
    fn real_index(&self) -> BigUint {
        self.tx()
            .to(self.staking().get())
            .typed(proxy_staking::StakingProxy)
            .index()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn staked_balance(&self, account: &ManagedAddress) -> BigUint {
        self.tx()
            .to(self.staking().get())
            .typed(proxy_staking::StakingProxy)
            .balance_of(account)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn mint_wrapped(&self, amount: &BigUint) -> EsdtTokenPayment {
        let index = self.real_index();
        let wrapped = self.to_wrapped(amount, &index);
        require!(wrapped > 0u64, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let caller = self.blockchain().get_caller();
        self.wrap_event(&caller, amount, &wrapped, &index);

        self.wrapped_token().mint_and_send(&caller, wrapped)
    }

    fn burn_wrapped(&self) -> BigUint {
        let payment = self.call_value().single_esdt();
        self.wrapped_token().require_same_token(&payment.token_identifier);
        require!(payment.amount > 0u64, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let index = self.real_index();
        let amount = self.from_wrapped(&payment.amount, &index);
        require!(amount > 0u64, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        self.wrapped_token().burn(&payment.amount);

        let caller = self.blockchain().get_caller();
        self.unwrap_event(&caller, &payment.amount, &amount, &index);

        amount
    }

    #[view(getWrappedToken)]
    #[storage_mapper("wrapped_token")]
    fn wrapped_token(&self) -> FungibleTokenMapper;

    #[view(getStaking)]
    #[storage_mapper("staking")]
    fn staking(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getNativeToken)]
    #[storage_mapper("native_token")]
    fn native_token(&self) -> SingleValueMapper<TokenIdentifier>;
}
