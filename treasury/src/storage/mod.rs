multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{PermissionKind, PermissionTarget};

#[multiversx_sc::module]
pub trait Storage {
    /// BTRFLY, minted and burned exclusively by the treasury.
    #[view(getNativeToken)]
    #[storage_mapper("native_token")]
    fn native_token(&self) -> FungibleTokenMapper;

    /// Native supply minted through the treasury minus what was burned through it.
    #[view(getNativeSupply)]
    #[storage_mapper("native_supply")]
    fn native_supply(&self) -> SingleValueMapper<BigUint>;

    /// Reserves valued in native units, refreshed by deposits, withdrawals and audits.
    #[view(getTotalReserves)]
    #[storage_mapper("total_reserves")]
    fn total_reserves(&self) -> SingleValueMapper<BigUint>;

    #[view(getBlocksNeededForQueue)]
    #[storage_mapper("blocks_needed_for_queue")]
    fn blocks_needed_for_queue(&self) -> SingleValueMapper<u64>;

    #[view(isPermitted)]
    #[storage_mapper("permission")]
    fn permission(
        &self,
        kind: PermissionKind,
        target: &PermissionTarget<Self::Api>,
    ) -> SingleValueMapper<bool>;

    /// Block from which a queued permission can be toggled on.
    #[view(getQueuedBlock)]
    #[storage_mapper("queued_block")]
    fn queued_block(
        &self,
        kind: PermissionKind,
        target: &PermissionTarget<Self::Api>,
    ) -> SingleValueMapper<u64>;

    #[view(getReserveTokens)]
    #[storage_mapper("reserve_tokens")]
    fn reserve_tokens(&self) -> UnorderedSetMapper<TokenIdentifier>;

    #[view(getLiquidityTokens)]
    #[storage_mapper("liquidity_tokens")]
    fn liquidity_tokens(&self) -> UnorderedSetMapper<TokenIdentifier>;

    /// Contract valuing a liquidity token.
    #[view(bondCalculator)]
    #[storage_mapper("bond_calculator")]
    fn bond_calculator(&self, token: &TokenIdentifier) -> SingleValueMapper<ManagedAddress>;

    /// Native units (9 decimals) per whole reserve token.
    #[view(getFloor)]
    #[storage_mapper("floor")]
    fn floor(&self, token: &TokenIdentifier) -> SingleValueMapper<BigUint>;

    #[view(getAssetDecimals)]
    #[storage_mapper("asset_decimals")]
    fn asset_decimals(&self, token: &TokenIdentifier) -> SingleValueMapper<u32>;
}
