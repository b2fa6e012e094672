#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod permissions;
pub mod storage;
pub mod valuation;
pub use common_events::*;

use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INSUFFICIENT_RESERVES, ERROR_INVALID_PAYMENT,
    ERROR_NOT_ACCEPTED, ERROR_NOT_RESERVE_TOKEN, ERROR_PROFIT_EXCEEDS_VALUE,
};
use common_structs::PermissionKind;

#[multiversx_sc::contract]
pub trait Treasury:
    storage::Storage
    + permissions::PermissionsModule
    + valuation::ValuationModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Initializes the treasury.
    ///
    /// The treasury must hold the local mint and burn roles of `native_token`.
    ///
    /// # Arguments
    /// - `native_token`: BTRFLY token identifier.
    /// - `blocks_needed_for_queue`: Base delay between `queue` and `toggle`.
    #[init]
    fn init(&self, native_token: TokenIdentifier, blocks_needed_for_queue: u64) {
        self.native_token().set_token_id(native_token);
        self.blocks_needed_for_queue().set(blocks_needed_for_queue);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Deposits a reserve or liquidity token into the treasury.
    ///
    /// **Purpose**: Backs new native supply with reserves. The depositor receives
    /// the value of the deposit minus `profit` in freshly minted native tokens;
    /// `profit` is kept as excess reserves.
    ///
    /// **Process**:
    /// 1. Checks that the token is accepted and the caller holds the matching depositor permission.
    /// 2. Values the deposit and checks `profit <= value`.
    /// 3. Mints `value - profit` to the caller.
    /// 4. Books the value as reserves.
    ///
    /// # Arguments
    /// - `profit`: Part of the value not minted back to the caller.
    ///
    /// # Returns
    /// - `BigUint`: Native amount minted to the caller.
    #[payable]
    #[endpoint(deposit)]
    fn deposit(&self, profit: BigUint) -> BigUint {
        let payment = self.call_value().single_esdt();
        let caller = self.blockchain().get_caller();
        require!(payment.amount > 0u64, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let token = &payment.token_identifier;
        if self.reserve_tokens().contains(token) {
            self.require_permission(PermissionKind::ReserveDepositor, &caller);
        } else if self.liquidity_tokens().contains(token) {
            self.require_permission(PermissionKind::LiquidityDepositor, &caller);
        } else {
            sc_panic!(ERROR_NOT_ACCEPTED);
        }

        let value = self.value_of(token, &payment.amount);
        require!(profit <= value, ERROR_PROFIT_EXCEEDS_VALUE);

        let minted = &value - &profit;
        if minted > 0u64 {
            self.native_token().mint_and_send(&caller, minted.clone());
            self.native_supply().update(|supply| *supply += &minted);
        }

        self.total_reserves().update(|reserves| *reserves += &value);

        self.treasury_deposit_event(token, &payment.amount, &value);
        self.reserves_updated_event(&self.total_reserves().get());

        minted
    }

    /// Mints native tokens against excess reserves.
    ///
    /// # Arguments
    /// - `recipient`: Receiver of the minted tokens.
    /// - `amount`: Native amount to mint, at most `excessReserves`.
    #[endpoint(mintRewards)]
    fn mint_rewards(&self, recipient: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.require_permission(PermissionKind::RewardManager, &caller);
        require!(amount > 0u64, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        require!(amount <= self.excess_reserves(), ERROR_INSUFFICIENT_RESERVES);

        self.native_token().mint_and_send(&recipient, amount.clone());
        self.native_supply().update(|supply| *supply += &amount);

        self.rewards_minted_event(&caller, &recipient, &amount);
    }

    /// Releases reserves to a manager.
    ///
    /// Only excess reserves can leave: the value of `amount` must not exceed
    /// `excessReserves`.
    ///
    /// # Arguments
    /// - `token`: Reserve or liquidity token to release.
    /// - `amount`: Token amount to release.
    ///
    /// # Returns
    /// - `EsdtTokenPayment`: The payment sent to the caller.
    #[endpoint(manage)]
    fn manage(&self, token: TokenIdentifier, amount: BigUint) -> EsdtTokenPayment {
        let caller = self.blockchain().get_caller();
        require!(amount > 0u64, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        if self.liquidity_tokens().contains(&token) {
            self.require_permission(PermissionKind::LiquidityManager, &caller);
        } else if self.reserve_tokens().contains(&token) {
            self.require_permission(PermissionKind::ReserveManager, &caller);
        } else {
            sc_panic!(ERROR_NOT_ACCEPTED);
        }

        let value = self.value_of(&token, &amount);
        require!(value <= self.excess_reserves(), ERROR_INSUFFICIENT_RESERVES);

        self.decrease_reserves(&value);

        let payment = EsdtTokenPayment::new(token.clone(), 0, amount.clone());
        self.tx().to(&caller).payment(&payment).transfer();

        self.reserves_managed_event(&token, &amount);
        self.reserves_updated_event(&self.total_reserves().get());

        payment
    }

    /// Redeems native tokens for reserves at the floor.
    ///
    /// The whole native payment is burned and the matching amount of `token`
    /// is released to the caller.
    ///
    /// # Arguments
    /// - `token`: Reserve token to receive.
    #[payable]
    #[endpoint(withdraw)]
    fn withdraw(&self, token: TokenIdentifier) -> EsdtTokenPayment {
        let caller = self.blockchain().get_caller();
        self.require_permission(PermissionKind::ReserveSpender, &caller);
        require!(self.reserve_tokens().contains(&token), ERROR_NOT_RESERVE_TOKEN);

        let value = self.require_native_payment();
        let amount = self.mul_div_floor(&value, &self.asset_unit(&token), &self.floor(&token).get());
        require!(amount > 0u64, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        self.native_token().burn(&value);
        self.decrease_native_supply(&value);
        self.decrease_reserves(&value);

        let payment = EsdtTokenPayment::new(token.clone(), 0, amount.clone());
        self.tx().to(&caller).payment(&payment).transfer();

        self.reserves_withdrawn_event(&token, &amount, &value);
        self.reserves_updated_event(&self.total_reserves().get());

        payment
    }

    /// Burns the native tokens sent along, shrinking the tracked supply.
    #[payable]
    #[endpoint(burn)]
    fn burn(&self) {
        let amount = self.require_native_payment();
        let caller = self.blockchain().get_caller();

        self.native_token().burn(&amount);
        self.decrease_native_supply(&amount);

        self.native_burned_event(&caller, &amount);
    }

    /// Recomputes total reserves from the balances held.
    #[only_owner]
    #[endpoint(auditReserves)]
    fn audit_reserves(&self) -> BigUint {
        let mut reserves = BigUint::zero();

        for token in self.reserve_tokens().iter() {
            let balance = self.token_balance(&token);
            reserves += self.value_of(&token, &balance);
        }

        for token in self.liquidity_tokens().iter() {
            let balance = self.token_balance(&token);
            reserves += self.value_of(&token, &balance);
        }

        self.total_reserves().set(&reserves);
        self.reserves_updated_event(&reserves);

        reserves
    }

    fn require_native_payment(&self) -> BigUint {
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.native_token().get_token_id(),
            ERROR_INVALID_PAYMENT
        );
        require!(payment.amount > 0u64, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        payment.amount.clone()
    }

    fn decrease_reserves(&self, value: &BigUint) {
        self.total_reserves().update(|reserves| {
            *reserves = if *reserves > *value {
                &*reserves - value
            } else {
                BigUint::zero()
            };
        });
    }

    // Native tokens minted before the treasury existed can be burned through it
    fn decrease_native_supply(&self, amount: &BigUint) {
        self.native_supply().update(|supply| {
            *supply = if *supply > *amount {
                &*supply - amount
            } else {
                BigUint::zero()
            };
        });
    }
}
