#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    fn emit_bond_created(
        &self,
        depositor: &ManagedAddress,
        deposit: &BigUint,
        payout: &BigUint,
        vesting_term: u64,
        price: &BigUint,
    ) {
        let expires = self.blockchain().get_block_nonce() + vesting_term;
        self.bond_created_event(depositor, deposit, payout, expires, price);
    }

    #[event("bond_created")]
    fn bond_created_event(
        &self,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] deposit: &BigUint,
        #[indexed] payout: &BigUint,
        #[indexed] expires: u64,
        #[indexed] price: &BigUint,
    );

    #[event("bond_redeemed")]
    fn bond_redeemed_event(
        &self,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] payout: &BigUint,
        #[indexed] remaining: &BigUint,
    );

    #[event("bond_price_changed")]
    fn bond_price_changed_event(
        &self,
        #[indexed] price_in_principal: &BigUint,
        #[indexed] internal_price: &BigUint,
        #[indexed] debt_ratio: &BigUint,
    );

    #[event("control_variable_adjustment")]
    fn control_variable_adjustment_event(
        &self,
        #[indexed] initial_bcv: &BigUint,
        #[indexed] new_bcv: &BigUint,
        #[indexed] adjustment: &BigUint,
        #[indexed] addition: bool,
    );

    #[event("bond_terms_set")]
    fn bond_terms_set_event(&self, #[indexed] total_debt: &BigUint, terms: &BondTerms<Self::Api>);

    // Fee on redemption (BTRFLY) and tithe on deposit (principal)
    #[event("partner_share_paid")]
    fn partner_share_paid_event(
        &self,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        #[indexed] amount: &BigUint,
    );

    #[event("treasury_deposit")]
    fn treasury_deposit_event(
        &self,
        #[indexed] token: &TokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] value: &BigUint,
    );

    #[event("reserves_managed")]
    fn reserves_managed_event(
        &self,
        #[indexed] token: &TokenIdentifier,
        #[indexed] amount: &BigUint,
    );

    #[event("reserves_withdrawn")]
    fn reserves_withdrawn_event(
        &self,
        #[indexed] token: &TokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] value: &BigUint,
    );

    #[event("reserves_updated")]
    fn reserves_updated_event(&self, #[indexed] total_reserves: &BigUint);

    #[event("rewards_minted")]
    fn rewards_minted_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("native_burned")]
    fn native_burned_event(&self, #[indexed] caller: &ManagedAddress, #[indexed] amount: &BigUint);

    #[event("permission_queued")]
    fn permission_queued_event(
        &self,
        #[indexed] kind: PermissionKind,
        #[indexed] target: &PermissionTarget<Self::Api>,
        #[indexed] queued_block: u64,
    );

    #[event("permission_toggled")]
    fn permission_toggled_event(
        &self,
        #[indexed] kind: PermissionKind,
        #[indexed] target: &PermissionTarget<Self::Api>,
        #[indexed] active: bool,
    );

    #[event("floor_set")]
    fn floor_set_event(&self, #[indexed] token: &TokenIdentifier, #[indexed] floor: &BigUint);

    #[event("stake")]
    fn stake_event(
        &self,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] warmup_expiry: u64,
    );

    #[event("unstake")]
    fn unstake_event(&self, #[indexed] caller: &ManagedAddress, #[indexed] amount: &BigUint);

    #[event("rebase")]
    fn rebase_event(
        &self,
        #[indexed] epoch: u64,
        #[indexed] distribute: &BigUint,
        #[indexed] total_supply: &BigUint,
        #[indexed] index: &BigUint,
    );

    #[event("wrap")]
    fn wrap_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] wrapped: &BigUint,
        #[indexed] index: &BigUint,
    );

    #[event("unwrap")]
    fn unwrap_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] wrapped: &BigUint,
        #[indexed] amount: &BigUint,
        #[indexed] index: &BigUint,
    );

    #[event("add_liquidity")]
    fn add_liquidity_event(
        &self,
        #[indexed] eth_amount: &BigUint,
        #[indexed] btrfly_amount: &BigUint,
        #[indexed] unused_btrfly: &BigUint,
    );

    #[event("liquidity_fee_paid")]
    fn liquidity_fee_paid_event(&self, #[indexed] fee: &BigUint, #[indexed] lp_minted: &BigUint);

    #[event("set_debt_fee")]
    fn set_debt_fee_event(&self, #[indexed] fee: &BigUint);
}
