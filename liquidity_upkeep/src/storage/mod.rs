multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::UpkeepCapacity;

#[multiversx_sc::module]
pub trait Storage {
    #[view(getNativeToken)]
    #[storage_mapper("native_token")]
    fn native_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getWethToken)]
    #[storage_mapper("weth_token")]
    fn weth_token(&self) -> SingleValueMapper<TokenIdentifier>;

    /// BTRFLY/WETH pool liquidity is added to
    #[view(getPool)]
    #[storage_mapper("pool")]
    fn pool(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getTreasury)]
    #[storage_mapper("treasury")]
    fn treasury(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getFeeRecipient)]
    #[storage_mapper("fee_recipient")]
    fn fee_recipient(&self) -> SingleValueMapper<ManagedAddress>;

    /// Share of minted LP owed to the fee recipient, out of 1_000_000
    #[view(getDebtFee)]
    #[storage_mapper("debt_fee")]
    fn debt_fee(&self) -> SingleValueMapper<BigUint>;

    #[view(getDebtCeiling)]
    #[storage_mapper("debt_ceiling")]
    fn debt_ceiling(&self) -> SingleValueMapper<UpkeepCapacity<Self::Api>>;
}
