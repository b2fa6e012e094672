multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{Adjustment, Bond, BondTerms};

#[multiversx_sc::module]
pub trait Storage {
    #[view(getNativeToken)]
    #[storage_mapper("native_token")]
    fn native_token(&self) -> SingleValueMapper<TokenIdentifier>;

    /// Token accepted by `deposit`, a reserve or an LP token.
    #[view(getPrincipalToken)]
    #[storage_mapper("principal_token")]
    fn principal_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getTreasury)]
    #[storage_mapper("treasury")]
    fn treasury(&self) -> SingleValueMapper<ManagedAddress>;

    /// Receiver of tokens recovered by `recoverLostToken`.
    #[view(getDao)]
    #[storage_mapper("dao")]
    fn dao(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getFeeRecipient)]
    #[storage_mapper("fee_recipient")]
    fn fee_recipient(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getTitheRecipient)]
    #[storage_mapper("tithe_recipient")]
    fn tithe_recipient(&self) -> SingleValueMapper<ManagedAddress>;

    /// Set for LP bonds only.
    #[view(getBondCalculator)]
    #[storage_mapper("bond_calculator")]
    fn bond_calculator(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getStaking)]
    #[storage_mapper("staking")]
    fn staking(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getTerms)]
    #[storage_mapper("terms")]
    fn terms(&self) -> SingleValueMapper<BondTerms<Self::Api>>;

    #[view(getAdjustment)]
    #[storage_mapper("adjustment")]
    fn adjustment(&self) -> SingleValueMapper<Adjustment<Self::Api>>;

    /// Value of outstanding bonds, in native units, as of `last_decay`.
    #[view(getTotalDebt)]
    #[storage_mapper("total_debt")]
    fn total_debt(&self) -> SingleValueMapper<BigUint>;

    #[view(getLastDecay)]
    #[storage_mapper("last_decay")]
    fn last_decay(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("bond_info")]
    fn bond_info(&self, depositor: &ManagedAddress) -> SingleValueMapper<Bond<Self::Api>>;
}
