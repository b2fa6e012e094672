multiversx_sc::imports!();

use common_constants::TOTAL_GONS_EXP;
use common_errors::{ERROR_INSUFFICIENT_ALLOWANCE, ERROR_INSUFFICIENT_BALANCE};

use crate::storage;

/// Rebasing xBTRFLY balances.
///
/// Balances are kept in gons, a fixed total split across holders. A rebase
/// only changes how many gons make up one fragment, so every holder's balance
/// grows by the same proportion without touching their storage.
#[multiversx_sc::module]
pub trait LedgerModule: storage::Storage + common_events::EventsModule {
    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.move_gons(&caller, &to, &self.gons_for_balance(&amount));
    }

    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.allowance(&caller, &spender).set(amount);
    }

    /// Moves `amount` from `from` to `to` against the caller's allowance.
    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) {
        let spender = self.blockchain().get_caller();

        self.allowance(&from, &spender).update(|allowance| {
            require!(*allowance >= amount, ERROR_INSUFFICIENT_ALLOWANCE);
            *allowance -= &amount;
        });

        self.move_gons(&from, &to, &self.gons_for_balance(&amount));
    }

    #[view(balanceOf)]
    fn balance_of(&self, account: ManagedAddress) -> BigUint {
        self.balance_for_gons(&self.gon_balance(&account).get())
    }

    /// Supply held outside the staking contract, warmup included.
    #[view(circulatingSupply)]
    fn circulating_supply(&self) -> BigUint {
        let held = self.balance_for_gons(&self.gon_balance(&self.blockchain().get_sc_address()).get());
        let supply = self.total_supply().get();

        if supply > held {
            supply - held
        } else {
            BigUint::zero()
        }
    }

    /// Growth of one staked unit since genesis, 9 decimals.
    #[view(index)]
    fn index(&self) -> BigUint {
        self.balance_for_gons(&self.index_gons().get())
    }

    fn total_gons(&self) -> BigUint {
        BigUint::from(10u64).pow(TOTAL_GONS_EXP)
    }

    fn gons_for_balance(&self, amount: &BigUint) -> BigUint {
        amount * &self.gons_per_fragment().get()
    }

    fn balance_for_gons(&self, gons: &BigUint) -> BigUint {
        gons / &self.gons_per_fragment().get()
    }

    fn move_gons(&self, from: &ManagedAddress, to: &ManagedAddress, gons: &BigUint) {
        self.take_gons(from, gons);
        self.gon_balance(to).update(|balance| *balance += gons);
    }

    fn take_gons(&self, from: &ManagedAddress, gons: &BigUint) {
        self.gon_balance(from).update(|balance| {
            require!(*balance >= *gons, ERROR_INSUFFICIENT_BALANCE);
            *balance -= gons;
        });
    }

    /// Spreads `profit` over the circulating supply.
    fn rebase_supply(&self, profit: &BigUint, epoch_number: u64) {
        let mut supply = self.total_supply().get();

        if *profit > 0u64 {
            let circulating = self.circulating_supply();
            let rebase_amount = if circulating > 0u64 {
                &(profit * &supply) / &circulating
            } else {
                profit.clone()
            };

            supply += rebase_amount;
            self.total_supply().set(&supply);
            self.gons_per_fragment().set(self.total_gons() / &supply);
        }

        self.rebase_event(epoch_number, profit, &supply, &self.index());
    }
}
