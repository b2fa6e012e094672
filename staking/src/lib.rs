#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod ledger;
pub mod storage;
pub use common_events::*;

use common_constants::{INITIAL_FRAGMENTS_SUPPLY, INITIAL_INDEX};
use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_DEPOSITS_LOCKED, ERROR_INVALID_EPOCH_LENGTH,
    ERROR_INVALID_PAYMENT,
};
use common_structs::{Epoch, WarmupClaim};

#[multiversx_sc::contract]
pub trait Staking:
    storage::Storage + ledger::LedgerModule + common_events::EventsModule
{
    /// Initializes staking with the whole rebasing supply held by the contract.
    ///
    /// # Arguments
    /// - `native_token`: BTRFLY token identifier.
    /// - `epoch_length`: Blocks between two rebases.
    /// - `first_epoch_number`: Number of the first epoch.
    /// - `first_epoch_block`: Block from which the first rebase can run.
    #[init]
    fn init(
        &self,
        native_token: TokenIdentifier,
        epoch_length: u64,
        first_epoch_number: u64,
        first_epoch_block: u64,
    ) {
        require!(epoch_length > 0, ERROR_INVALID_EPOCH_LENGTH);

        self.native_token().set(native_token);
        self.epoch().set(Epoch {
            length: epoch_length,
            number: first_epoch_number,
            end_block: first_epoch_block,
            distribute: BigUint::zero(),
        });

        let total_gons = self.total_gons();
        let supply = BigUint::from(INITIAL_FRAGMENTS_SUPPLY);
        let gons_per_fragment = &total_gons / &supply;

        self.index_gons()
            .set(&gons_per_fragment * &BigUint::from(INITIAL_INDEX));
        self.gon_balance(&self.blockchain().get_sc_address())
            .set(total_gons);
        self.gons_per_fragment().set(gons_per_fragment);
        self.total_supply().set(supply);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Stakes the BTRFLY sent along for `recipient`.
    ///
    /// The stake sits in warmup until `claim` once the warmup period is over.
    /// With no warmup it can be claimed in the same block.
    #[payable]
    #[endpoint(stake)]
    fn stake(&self, recipient: ManagedAddress) {
        let amount = self.require_native_payment();
        self.rebase_excluding(&amount);

        let warmup = self.warmup_info(&recipient);
        let mut claim = self.get_warmup_info(recipient.clone());
        require!(!claim.lock, ERROR_DEPOSITS_LOCKED);

        let gons = self.gons_for_balance(&amount);
        self.take_gons(&self.blockchain().get_sc_address(), &gons);

        claim.deposit += &amount;
        claim.gons += &gons;
        claim.expiry = self.epoch().get().number.saturating_add(self.warmup_period().get());
        warmup.set(&claim);

        self.stake_event(&recipient, &amount, claim.expiry);
    }

    /// Credits an expired warmup to `recipient`. Does nothing before expiry.
    #[endpoint(claim)]
    fn claim(&self, recipient: ManagedAddress) {
        let warmup = self.warmup_info(&recipient);
        if warmup.is_empty() {
            return;
        }

        let claim = warmup.get();
        if self.epoch().get().number < claim.expiry {
            return;
        }

        warmup.clear();
        self.gon_balance(&recipient)
            .update(|balance| *balance += &claim.gons);
    }

    /// Gives up a pending warmup and returns the original deposit.
    #[endpoint(forfeit)]
    fn forfeit(&self) -> EsdtTokenPayment {
        let caller = self.blockchain().get_caller();
        let warmup = self.warmup_info(&caller);

        let payment = EsdtTokenPayment::new(self.native_token().get(), 0, BigUint::zero());
        if warmup.is_empty() {
            return payment;
        }

        let claim = warmup.take();
        self.gon_balance(&self.blockchain().get_sc_address())
            .update(|balance| *balance += &claim.gons);

        let payment = EsdtTokenPayment::new(payment.token_identifier, 0, claim.deposit);
        self.tx().to(&caller).payment(&payment).transfer_if_not_empty();

        payment
    }

    /// Prevents others from staking into the caller's warmup.
    #[endpoint(toggleDepositLock)]
    fn toggle_deposit_lock(&self) -> bool {
        let caller = self.blockchain().get_caller();
        let warmup = self.warmup_info(&caller);

        let mut claim = self.get_warmup_info(caller);
        claim.lock = !claim.lock;
        warmup.set(&claim);

        claim.lock
    }

    /// Burns `amount` xBTRFLY of the caller and returns the same amount of BTRFLY.
    ///
    /// # Arguments
    /// - `amount`: xBTRFLY to unstake.
    /// - `trigger`: Runs a rebase first when set.
    #[endpoint(unstake)]
    fn unstake(&self, amount: BigUint, trigger: bool) -> EsdtTokenPayment {
        require!(amount > 0u64, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        if trigger {
            self.rebase_excluding(&BigUint::zero());
        }

        let caller = self.blockchain().get_caller();
        let sc_address = self.blockchain().get_sc_address();
        self.move_gons(&caller, &sc_address, &self.gons_for_balance(&amount));

        let payment = EsdtTokenPayment::new(self.native_token().get(), 0, amount);
        self.tx().to(&caller).payment(&payment).transfer();

        self.unstake_event(&caller, &payment.amount);

        payment
    }

    /// Ends the current epoch once its end block is reached.
    ///
    /// The profit measured at the previous rebase is distributed now, and the
    /// BTRFLY held above the circulating supply becomes the next profit.
    #[endpoint(rebase)]
    fn rebase(&self) {
        self.rebase_excluding(&BigUint::zero());
    }

    // `incoming` is BTRFLY already received by the ongoing call, not profit
    fn rebase_excluding(&self, incoming: &BigUint) {
        let mut epoch = self.epoch().get();
        if epoch.end_block > self.blockchain().get_block_nonce() {
            return;
        }

        self.rebase_supply(&epoch.distribute, epoch.number);

        epoch.end_block += epoch.length;
        epoch.number += 1;

        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(self.native_token().get()), 0);
        let staked = self.circulating_supply() + incoming;
        epoch.distribute = if balance > staked {
            balance - staked
        } else {
            BigUint::zero()
        };

        self.epoch().set(epoch);
    }

    #[only_owner]
    #[endpoint(setWarmup)]
    fn set_warmup(&self, period: u64) {
        self.warmup_period().set(period);
    }

    #[view(getWarmupInfo)]
    fn get_warmup_info(&self, account: ManagedAddress) -> WarmupClaim<Self::Api> {
        let warmup = self.warmup_info(&account);
        if warmup.is_empty() {
            return WarmupClaim {
                deposit: BigUint::zero(),
                gons: BigUint::zero(),
                expiry: 0,
                lock: false,
            };
        }

        warmup.get()
    }

    fn require_native_payment(&self) -> BigUint {
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.native_token().get(),
            ERROR_INVALID_PAYMENT
        );
        require!(payment.amount > 0u64, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        payment.amount.clone()
    }
}
