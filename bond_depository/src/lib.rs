#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod config;
pub mod debt;
pub mod ledger;
pub mod pricing;
pub mod storage;
pub use common_events::*;

use common_constants::MIN_PAYOUT;
use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_BOND_TOO_LARGE, ERROR_BOND_TOO_SMALL,
    ERROR_INVALID_DEPOSITOR, ERROR_INVALID_PAYMENT, ERROR_SLIPPAGE_LIMIT, ERROR_STAKING_NOT_SET,
    ERROR_TERMS_NOT_INITIALIZED,
};
use common_proxies::{proxy_staking, proxy_treasury};
use common_structs::{Adjustment, BondTerms};

/// Sells BTRFLY at a debt adjusted price against one principal token.
///
/// Deposits are valued by the treasury, which keeps the principal. The payout
/// is minted to this contract and vests linearly for the depositor.
#[multiversx_sc::contract]
pub trait BondDepository:
    storage::Storage
    + debt::DebtModule
    + pricing::PricingModule
    + ledger::LedgerModule
    + config::ConfigModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Initializes a bond market. Terms are set separately with `initializeBondTerms`.
    ///
    /// # Arguments
    /// - `native_token`: BTRFLY token identifier.
    /// - `principal_token`: Token bonded, a reserve token or an LP token.
    /// - `treasury`: Treasury valuing and keeping the principal.
    /// - `dao`: Receiver of recovered tokens.
    /// - `fee_recipient`: Receiver of the redemption fee.
    /// - `tithe_recipient`: Receiver of the deposit tithe.
    /// - `bond_calculator`: LP valuation contract, only for LP bonds.
    #[init]
    fn init(
        &self,
        native_token: TokenIdentifier,
        principal_token: TokenIdentifier,
        treasury: ManagedAddress,
        dao: ManagedAddress,
        fee_recipient: ManagedAddress,
        tithe_recipient: ManagedAddress,
        bond_calculator: OptionalValue<ManagedAddress>,
    ) {
        self.native_token().set(native_token);
        self.principal_token().set(principal_token);
        self.treasury().set(treasury);
        self.dao().set(dao);
        self.fee_recipient().set(fee_recipient);
        self.tithe_recipient().set(tithe_recipient);

        if let OptionalValue::Some(calculator) = bond_calculator {
            self.bond_calculator().set(calculator);
        }

        self.terms().set(BondTerms {
            control_variable: BigUint::zero(),
            vesting_term: 0,
            minimum_price: BigUint::zero(),
            max_payout: BigUint::zero(),
            fee: BigUint::zero(),
            max_debt: BigUint::zero(),
            tithe: BigUint::zero(),
        });
        self.adjustment().set(Adjustment {
            add: false,
            rate: BigUint::zero(),
            target: BigUint::zero(),
            buffer: 0,
            last_block: 0,
        });
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Bonds the principal sent along.
    ///
    /// **Purpose**: Sells native tokens at the current bond price. The payout
    /// vests over the vesting term and is claimed with `redeem`.
    ///
    /// **Process**:
    /// 1. Decays the debt and checks the price against `max_price`.
    /// 2. Values the deposit through the treasury and sizes the payout.
    /// 3. Checks the payout bounds and the debt ceiling.
    /// 4. Pays the tithe and deposits the rest of the principal into the treasury.
    /// 5. Has the treasury mint the payout to this contract.
    /// 6. Books the debt, opens or tops up the bond and steps the control variable.
    ///
    /// # Arguments
    /// - `max_price`: Highest acceptable bond price, in hundredths.
    /// - `depositor`: Owner of the bond.
    ///
    /// # Returns
    /// - `BigUint`: Native payout of the deposit.
    ///
    /// # Errors
    /// - `ERROR_SLIPPAGE_LIMIT`: Price above `max_price`.
    /// - `ERROR_BOND_TOO_SMALL` / `ERROR_BOND_TOO_LARGE`: Payout out of bounds.
    /// - `ERROR_DEBT_CEILING_EXCEEDED`: The deposit would push the debt above `max_debt`.
    #[payable]
    #[endpoint(deposit)]
    fn deposit(&self, max_price: BigUint, depositor: ManagedAddress) -> BigUint {
        let payment = self.call_value().single_esdt();
        let principal = self.principal_token().get();
        require!(payment.token_identifier == principal, ERROR_INVALID_PAYMENT);
        require!(payment.amount > 0u64, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        require!(!depositor.is_zero(), ERROR_INVALID_DEPOSITOR);

        let terms = self.terms().get();
        require!(terms.is_initialized(), ERROR_TERMS_NOT_INITIALIZED);

        self.decay_debt();

        let price = self.bond_price();
        require!(price <= max_price, ERROR_SLIPPAGE_LIMIT);

        let value = self.treasury_value_of(&principal, &payment.amount);
        let payout = self.compute_payout(&value, &price);
        require!(payout >= MIN_PAYOUT, ERROR_BOND_TOO_SMALL);
        require!(payout <= self.max_payout(), ERROR_BOND_TOO_LARGE);

        self.require_debt_capacity(&value, &terms.max_debt);

        let tithe = self.apply_bps(&payment.amount, &terms.tithe);
        if tithe > 0u64 {
            let tithe_recipient = self.tithe_recipient().get();
            self.tx()
                .to(&tithe_recipient)
                .single_esdt(&principal, 0, &tithe)
                .transfer();
            self.partner_share_paid_event(&tithe_recipient, &principal, &tithe);
        }

        let deposited = &payment.amount - &tithe;
        let profit = self.treasury_value_of(&principal, &deposited);
        self.tx()
            .to(self.treasury().get())
            .typed(proxy_treasury::TreasuryProxy)
            .deposit(profit)
            .single_esdt(&principal, 0, &deposited)
            .sync_call();

        self.tx()
            .to(self.treasury().get())
            .typed(proxy_treasury::TreasuryProxy)
            .mint_rewards(self.blockchain().get_sc_address(), &payout)
            .sync_call();

        self.total_debt().update(|debt| *debt += &value);
        self.open_bond(&depositor, &payout, &price);

        self.emit_bond_created(
            &depositor,
            &payment.amount,
            &payout,
            terms.vesting_term,
            &price,
        );
        self.bond_price_changed_event(
            &self.bond_price_in_principal(),
            &self.bond_price(),
            &self.debt_ratio(),
        );

        self.adjust();

        payout
    }

    /// Pays out the vested part of `recipient`'s bond.
    ///
    /// Anyone may trigger a redemption, the payout always goes to `recipient`.
    /// The fee share of the vested amount goes to the fee recipient.
    ///
    /// # Arguments
    /// - `recipient`: Owner of the bond.
    /// - `stake`: Stakes the payout for `recipient` instead of sending it.
    ///
    /// # Returns
    /// - `BigUint`: Native amount paid to or staked for `recipient`.
    ///
    /// # Errors
    /// - `ERROR_NOTHING_TO_REDEEM`: Nothing vested.
    #[endpoint(redeem)]
    fn redeem(&self, recipient: ManagedAddress, stake: bool) -> BigUint {
        let (vested, remaining) = self.release_vested(&recipient);

        let terms = self.terms().get();
        let (primary, secondary) = self.split_fee(&vested, &terms.fee);
        let native_token = self.native_token().get();

        if secondary > 0u64 {
            let fee_recipient = self.fee_recipient().get();
            self.tx()
                .to(&fee_recipient)
                .single_esdt(&native_token, 0, &secondary)
                .transfer();
            self.partner_share_paid_event(&fee_recipient, &native_token, &secondary);
        }

        if primary > 0u64 {
            if stake {
                self.stake_for(&recipient, &native_token, &primary);
            } else {
                self.tx()
                    .to(&recipient)
                    .single_esdt(&native_token, 0, &primary)
                    .transfer();
            }
        }

        self.bond_redeemed_event(&recipient, &vested, &remaining);

        primary
    }

    fn stake_for(&self, recipient: &ManagedAddress, native_token: &TokenIdentifier, amount: &BigUint) {
        let staking = self.staking();
        require!(!staking.is_empty(), ERROR_STAKING_NOT_SET);

        self.tx()
            .to(staking.get())
            .typed(proxy_staking::StakingProxy)
            .stake(recipient)
            .single_esdt(native_token, 0, amount)
            .sync_call();

        self.tx()
            .to(staking.get())
            .typed(proxy_staking::StakingProxy)
            .claim(recipient)
            .sync_call();
    }

    fn treasury_value_of(&self, token: &TokenIdentifier, amount: &BigUint) -> BigUint {
        self.tx()
            .to(self.treasury().get())
            .typed(proxy_treasury::TreasuryProxy)
            .value_of(token, amount)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }
}
