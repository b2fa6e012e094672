multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{Epoch, WarmupClaim};

#[multiversx_sc::module]
pub trait Storage {
    #[view(getNativeToken)]
    #[storage_mapper("native_token")]
    fn native_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getEpoch)]
    #[storage_mapper("epoch")]
    fn epoch(&self) -> SingleValueMapper<Epoch<Self::Api>>;

    /// Epochs a stake waits before it can be claimed
    #[view(getWarmupPeriod)]
    #[storage_mapper("warmup_period")]
    fn warmup_period(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("warmup_info")]
    fn warmup_info(&self, account: &ManagedAddress) -> SingleValueMapper<WarmupClaim<Self::Api>>;

    /// Rebasing (xBTRFLY) supply, grows on every profitable rebase.
    #[view(totalSupply)]
    #[storage_mapper("total_supply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[view(getGonsPerFragment)]
    #[storage_mapper("gons_per_fragment")]
    fn gons_per_fragment(&self) -> SingleValueMapper<BigUint>;

    #[view(gonsBalanceOf)]
    #[storage_mapper("gon_balance")]
    fn gon_balance(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(allowance)]
    #[storage_mapper("allowance")]
    fn allowance(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    /// The initial index expressed in gons.
    #[storage_mapper("index_gons")]
    fn index_gons(&self) -> SingleValueMapper<BigUint>;
}
