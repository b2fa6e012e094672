multiversx_sc::imports!();

use common_errors::{
    ERROR_CALCULATOR_NOT_SET, ERROR_INVALID_PERMISSION_TARGET, ERROR_MUST_QUEUE, ERROR_NOT_APPROVED,
    ERROR_QUEUE_NOT_EXPIRED,
};
use common_structs::{PermissionKind, PermissionTarget};

use crate::storage;

/// Timelocked permission registry of the treasury.
///
/// A permission is first queued, then toggled on once its queue delay has
/// passed. Turning a permission off is immediate.
#[multiversx_sc::module]
pub trait PermissionsModule: storage::Storage + common_events::EventsModule {
    /// Queues `target` for the permission `kind`.
    ///
    /// Managers and debtors wait twice the configured delay.
    ///
    /// # Arguments
    /// - `kind`: Permission to grant.
    /// - `target`: Account for role kinds, token for `ReserveToken` / `LiquidityToken`.
    #[only_owner]
    #[endpoint(queue)]
    fn queue(&self, kind: PermissionKind, target: PermissionTarget<Self::Api>) {
        require!(target.matches(&kind), ERROR_INVALID_PERMISSION_TARGET);

        let delay = self.blocks_needed_for_queue().get() * kind.queue_multiplier();
        let queued_block = self.blockchain().get_block_nonce() + delay;
        self.queued_block(kind, &target).set(queued_block);

        self.permission_queued_event(kind, &target, queued_block);
    }

    /// Flips the permission `kind` for `target`.
    ///
    /// # Arguments
    /// - `kind`: Permission to flip.
    /// - `target`: Account or token the permission applies to.
    /// - `calculator`: Valuation contract, required when listing a liquidity token.
    ///
    /// # Returns
    /// - `bool`: The new state of the permission.
    ///
    /// # Errors
    /// - `ERROR_MUST_QUEUE`: Activation without a prior `queue`.
    /// - `ERROR_QUEUE_NOT_EXPIRED`: Activation before the queue delay elapsed.
    #[only_owner]
    #[endpoint(toggle)]
    fn toggle(
        &self,
        kind: PermissionKind,
        target: PermissionTarget<Self::Api>,
        calculator: OptionalValue<ManagedAddress>,
    ) -> bool {
        require!(target.matches(&kind), ERROR_INVALID_PERMISSION_TARGET);

        let permission = self.permission(kind, &target);
        let active = !permission.get();

        if active {
            let queued = self.queued_block(kind, &target);
            require!(!queued.is_empty(), ERROR_MUST_QUEUE);
            require!(
                queued.get() <= self.blockchain().get_block_nonce(),
                ERROR_QUEUE_NOT_EXPIRED
            );
            queued.clear();
        }

        permission.set(active);

        if let PermissionTarget::Token(token) = &target {
            match kind {
                PermissionKind::ReserveToken => self.update_reserve_token(token, active),
                PermissionKind::LiquidityToken => {
                    self.update_liquidity_token(token, active, calculator.into_option())
                },
                _ => {},
            }
        }

        self.permission_toggled_event(kind, &target, active);

        active
    }

    fn update_reserve_token(&self, token: &TokenIdentifier, active: bool) {
        if active {
            self.reserve_tokens().insert(token.clone());
        } else {
            self.reserve_tokens().swap_remove(token);
        }
    }

    fn update_liquidity_token(
        &self,
        token: &TokenIdentifier,
        active: bool,
        calculator: Option<ManagedAddress>,
    ) {
        if active {
            match calculator {
                Some(address) => self.bond_calculator(token).set(address),
                None => sc_panic!(ERROR_CALCULATOR_NOT_SET),
            }
            self.liquidity_tokens().insert(token.clone());
        } else {
            self.bond_calculator(token).clear();
            self.liquidity_tokens().swap_remove(token);
        }
    }

    fn is_account_permitted(&self, kind: PermissionKind, account: &ManagedAddress) -> bool {
        self.permission(kind, &PermissionTarget::Account(account.clone()))
            .get()
    }

    fn require_permission(&self, kind: PermissionKind, account: &ManagedAddress) {
        require!(self.is_account_permitted(kind, account), ERROR_NOT_APPROVED);
    }
}
