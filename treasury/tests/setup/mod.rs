use crate::constants::*;

use common_proxies::proxy_treasury;
use common_structs::{PermissionKind, PermissionTarget};
use multiversx_sc::{
    imports::OptionalValue,
    types::{
        BigUint, EsdtLocalRole, ManagedAddress, ReturnsNewManagedAddress, ReturnsResult,
        TestAddress, TestTokenIdentifier,
    },
};
use multiversx_sc_scenario::{
    api::StaticApi, imports::ExpectMessage, ScenarioTxRun, ScenarioWorld,
};

pub static MINT_BURN_ROLES: &[EsdtLocalRole] = &[EsdtLocalRole::Mint, EsdtLocalRole::Burn];

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(TREASURY_PATH, treasury::ContractBuilder);

    blockchain
}

pub fn whole(amount: u64, decimals: u32) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(decimals)
}

pub fn account(address: &TestAddress) -> PermissionTarget<StaticApi> {
    PermissionTarget::Account(address.to_managed_address())
}

pub fn token(token: TestTokenIdentifier) -> PermissionTarget<StaticApi> {
    PermissionTarget::Token(token.to_token_identifier())
}

pub struct TreasuryTestState {
    pub world: ScenarioWorld,
    pub treasury_sc: ManagedAddress<StaticApi>,
    pub block: u64,
    pub delay: u64,
}

impl TreasuryTestState {
    pub fn new(delay: u64) -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_nonce(START_BLOCK);

        let treasury_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_treasury::TreasuryProxy)
            .init(BTRFLY_TOKEN.to_token_identifier(), delay)
            .code(TREASURY_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        world.set_esdt_local_roles(treasury_sc.clone(), BTRFLY_TOKEN.as_bytes(), MINT_BURN_ROLES);

        Self {
            world,
            treasury_sc,
            block: START_BLOCK,
            delay,
        }
    }

    /// Treasury without queue delay, DAI listed at a floor of 1 BTRFLY.
    pub fn with_dai() -> Self {
        let mut state = Self::new(0);
        state.list_dai();
        state
    }

    pub fn advance_blocks(&mut self, blocks: u64) {
        self.block += blocks;
        self.world.current_block().block_nonce(self.block);
    }

    // Permissions

    pub fn queue(&mut self, kind: PermissionKind, target: PermissionTarget<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .queue(kind, target)
            .run();
    }

    pub fn queue_error(
        &mut self,
        from: &TestAddress,
        kind: PermissionKind,
        target: PermissionTarget<StaticApi>,
        error_message: &str,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .queue(kind, target)
            .returns(ExpectMessage(error_message))
            .run();
    }

    pub fn toggle(
        &mut self,
        kind: PermissionKind,
        target: PermissionTarget<StaticApi>,
        calculator: OptionalValue<ManagedAddress<StaticApi>>,
    ) -> bool {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .toggle(kind, target, calculator)
            .returns(ReturnsResult)
            .run()
    }

    pub fn toggle_error(
        &mut self,
        kind: PermissionKind,
        target: PermissionTarget<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .toggle(kind, target, OptionalValue::<ManagedAddress<StaticApi>>::None)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    /// Queues and activates `kind` for `address`, waiting out the queue delay.
    pub fn grant(&mut self, kind: PermissionKind, address: &TestAddress) {
        self.queue(kind, account(address));
        self.advance_blocks(self.delay * kind.queue_multiplier());
        self.toggle(kind, account(address), OptionalValue::None);
    }

    pub fn list_dai(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .set_asset_decimals(DAI_TOKEN.to_token_identifier(), DAI_DECIMALS)
            .run();

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .set_floor(DAI_TOKEN.to_token_identifier(), BigUint::from(DAI_FLOOR))
            .run();

        self.queue(PermissionKind::ReserveToken, token(DAI_TOKEN));
        self.advance_blocks(self.delay);
        self.toggle(PermissionKind::ReserveToken, token(DAI_TOKEN), OptionalValue::None);
    }

    pub fn is_permitted(&mut self, kind: PermissionKind, target: PermissionTarget<StaticApi>) -> bool {
        self.world
            .query()
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .permission(kind, target)
            .returns(ReturnsResult)
            .run()
    }

    pub fn queued_block(&mut self, kind: PermissionKind, target: PermissionTarget<StaticApi>) -> u64 {
        self.world
            .query()
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .queued_block(kind, target)
            .returns(ReturnsResult)
            .run()
    }

    // Reserves

    pub fn deposit(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        profit: BigUint<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .deposit(profit)
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn deposit_error(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        profit: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .deposit(profit)
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn mint_rewards(&mut self, from: &TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .mint_rewards(RECIPIENT_ADDRESS, amount)
            .run();
    }

    pub fn mint_rewards_error(&mut self, from: &TestAddress, amount: BigUint<StaticApi>, error_message: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .mint_rewards(RECIPIENT_ADDRESS, amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn manage(&mut self, from: &TestAddress, token: TestTokenIdentifier, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .manage(token.to_token_identifier(), amount)
            .run();
    }

    pub fn manage_error(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .manage(token.to_token_identifier(), amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn withdraw(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        native_amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .withdraw(token.to_token_identifier())
            .single_esdt(&BTRFLY_TOKEN.to_token_identifier(), 0, &native_amount)
            .run();
    }

    pub fn withdraw_error(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        native_amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .withdraw(token.to_token_identifier())
            .single_esdt(&BTRFLY_TOKEN.to_token_identifier(), 0, &native_amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn burn(&mut self, from: &TestAddress, token: TestTokenIdentifier, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .burn()
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn burn_error(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .burn()
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn audit_reserves(&mut self) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .audit_reserves()
            .returns(ReturnsResult)
            .run()
    }

    pub fn native_supply(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .native_supply()
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_reserves(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .total_reserves()
            .returns(ReturnsResult)
            .run()
    }

    pub fn excess_reserves(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .excess_reserves()
            .returns(ReturnsResult)
            .run()
    }

    pub fn value_of(&mut self, token: TestTokenIdentifier, amount: BigUint<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .value_of(token.to_token_identifier(), amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn manageable_amount(&mut self, token: TestTokenIdentifier) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .get_manageable_amount(token.to_token_identifier())
            .returns(ReturnsResult)
            .run()
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world.account(OWNER_ADDRESS).nonce(1);

    world
        .account(DEPOSITOR_ADDRESS)
        .nonce(1)
        .esdt_balance(DAI_TOKEN, whole(10_000, DAI_DECIMALS))
        .esdt_balance(UNLISTED_TOKEN, whole(10_000, DAI_DECIMALS));

    for address in [MANAGER_ADDRESS, RECIPIENT_ADDRESS] {
        world.account(address).nonce(1);
    }
}
