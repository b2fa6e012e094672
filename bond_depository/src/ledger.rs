multiversx_sc::imports!();

use common_errors::ERROR_NOTHING_TO_REDEEM;
use common_structs::Bond;

use crate::storage;

/// Per depositor vesting records.
///
/// A record moves from vesting to partially redeemed and back with every
/// deposit and redemption, and is removed once fully redeemed.
#[multiversx_sc::module]
pub trait LedgerModule: storage::Storage + common_math::SharedMathModule {
    /// Opens a bond for `depositor` or tops up the existing one.
    ///
    /// Topping up blends the remaining vesting of the old payout with a full
    /// term for the new one, weighted by payout.
    fn open_bond(&self, depositor: &ManagedAddress, payout: &BigUint, price: &BigUint) {
        let now = self.blockchain().get_block_nonce();
        let vesting_term = self.terms().get().vesting_term;
        let record = self.bond_info(depositor);

        let bond = if record.is_empty() {
            Bond::new(payout.clone(), vesting_term, now, price.clone())
        } else {
            let prior = record.get();
            let remaining = prior
                .vesting
                .saturating_sub(now.saturating_sub(prior.last_block));
            let vesting =
                self.blended_vesting(&prior.payout, remaining, payout, vesting_term);

            Bond::new(&prior.payout + payout, vesting, now, price.clone())
        };

        record.set(bond);
    }

    /// Releases the vested part of `recipient`'s bond.
    ///
    /// # Returns
    /// - `(vested, remaining)`: Amount released now and payout still vesting.
    ///
    /// # Errors
    /// - `ERROR_NOTHING_TO_REDEEM`: No record, or nothing vested since the last redemption.
    fn release_vested(&self, recipient: &ManagedAddress) -> (BigUint, BigUint) {
        let record = self.bond_info(recipient);
        require!(!record.is_empty(), ERROR_NOTHING_TO_REDEEM);

        let mut bond = record.get();
        let now = self.blockchain().get_block_nonce();

        if bond.is_fully_vested_at(now) {
            record.clear();
            require!(bond.payout > 0u64, ERROR_NOTHING_TO_REDEEM);

            return (bond.payout, BigUint::zero());
        }

        let elapsed = now - bond.last_block;
        let vested = self.vested_payout(&bond.payout, elapsed, bond.vesting);
        require!(vested > 0u64, ERROR_NOTHING_TO_REDEEM);

        bond.payout -= &vested;
        bond.vesting -= elapsed;
        bond.last_block = now;

        let remaining = bond.payout.clone();
        record.set(bond);

        (vested, remaining)
    }

    #[view(bondInfo)]
    fn get_bond_info(&self, depositor: ManagedAddress) -> Bond<Self::Api> {
        let record = self.bond_info(&depositor);
        if record.is_empty() {
            return Bond::new(BigUint::zero(), 0, 0, BigUint::zero());
        }

        record.get()
    }

    /// Payout `depositor` could redeem now.
    #[view(pendingPayoutFor)]
    fn pending_payout_for(&self, depositor: ManagedAddress) -> BigUint {
        let bond = self.get_bond_info(depositor);
        let elapsed = self
            .blockchain()
            .get_block_nonce()
            .saturating_sub(bond.last_block);

        self.vested_payout(&bond.payout, elapsed, bond.vesting)
    }

    /// Vested share of `depositor`'s bond in basis points.
    #[view(percentVestedFor)]
    fn percent_vested_for(&self, depositor: ManagedAddress) -> u64 {
        let bond = self.get_bond_info(depositor);
        if bond.payout == 0u64 {
            return 0;
        }

        let elapsed = self
            .blockchain()
            .get_block_nonce()
            .saturating_sub(bond.last_block);

        self.percent_vested(elapsed, bond.vesting)
    }
}
