use crate::constants::*;

use bond_depository::storage::Storage;
use common_proxies::{
    proxy_bond_depository, proxy_bonding_calculator, proxy_staking, proxy_swap_mock,
    proxy_treasury,
};
use common_structs::{Adjustment, Bond, BondParameter, BondTerms, PermissionKind, PermissionTarget};
use multiversx_sc::{
    imports::OptionalValue,
    types::{
        BigUint, EsdtLocalRole, EsdtTokenPayment, ManagedAddress, ManagedVec,
        ReturnsNewManagedAddress, ReturnsResult, TestAddress, TestTokenIdentifier,
    },
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::ExpectMessage,
    ScenarioTxRun, ScenarioTxWhitebox, ScenarioWorld,
};

pub static MINT_BURN_ROLES: &[EsdtLocalRole] = &[EsdtLocalRole::Mint, EsdtLocalRole::Burn];

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(BOND_DEPOSITORY_PATH, bond_depository::ContractBuilder);
    blockchain.register_contract(TREASURY_PATH, treasury::ContractBuilder);
    blockchain.register_contract(STAKING_PATH, staking::ContractBuilder);
    blockchain.register_contract(BONDING_CALCULATOR_PATH, bonding_calculator::ContractBuilder);
    blockchain.register_contract(SWAP_MOCK_PATH, swap_mock::ContractBuilder);

    blockchain
}

pub fn whole(amount: u64, decimals: u32) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(decimals)
}

pub struct BondTestState {
    pub world: ScenarioWorld,
    pub treasury_sc: ManagedAddress<StaticApi>,
    pub depository_sc: ManagedAddress<StaticApi>,
    pub principal: TestTokenIdentifier<'static>,
}

impl BondTestState {
    /// Treasury without queue delay and no market yet.
    fn with_treasury(principal: TestTokenIdentifier<'static>) -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_nonce(START_BLOCK);

        let treasury_sc = deploy_treasury(&mut world, 0);

        Self {
            world,
            treasury_sc,
            depository_sc: ManagedAddress::zero(),
            principal,
        }
    }

    /// CRV market: 10,000 BTRFLY supply, floor 4.09, terms initialized without debt.
    pub fn crv() -> Self {
        let mut state = Self::with_treasury(CRV_TOKEN);
        state.list_reserve_token(CRV_TOKEN, CRV_DECIMALS, CRV_FLOOR);
        state.bootstrap_supply(CRV_TOKEN, 5_000, CRV_DECIMALS, CRV_FLOOR);

        state.depository_sc = state.deploy_depository(OptionalValue::None);
        state.authorize_depository(PermissionKind::ReserveDepositor);
        state.initialize_bond_terms(
            CONTROL_VARIABLE,
            MINIMUM_PRICE,
            MAX_DEBT,
            0,
        );

        state
    }

    /// CVX market: floor 5.4, no minimum price and 15,000 BTRFLY of initial debt.
    pub fn cvx() -> Self {
        let mut state = Self::with_treasury(CVX_TOKEN);
        state.list_reserve_token(CVX_TOKEN, CVX_DECIMALS, CVX_FLOOR);
        state.bootstrap_supply(CVX_TOKEN, 5_000, CVX_DECIMALS, CVX_FLOOR);

        state.depository_sc = state.deploy_depository(OptionalValue::None);
        state.authorize_depository(PermissionKind::ReserveDepositor);
        state.initialize_bond_terms(CVX_CONTROL_VARIABLE, 0, MAX_DEBT, CVX_INITIAL_DEBT);

        state
    }

    /// BTRFLY/WETH LP market valued through the bonding calculator.
    ///
    /// The pool is seeded with 2 WETH and 10 BTRFLY, all LP stays with the owner.
    pub fn liquidity() -> Self {
        let mut state = Self::with_treasury(LP_TOKEN);
        state.list_reserve_token(WETH_TOKEN, WETH_DECIMALS, WETH_FLOOR);
        state.bootstrap_supply(WETH_TOKEN, 20, WETH_DECIMALS, WETH_FLOOR);

        let pool_sc = deploy_pool(&mut state.world);
        let calculator_sc = deploy_calculator(&mut state.world, &pool_sc);
        state.list_liquidity_token(LP_TOKEN, &calculator_sc);

        state.depository_sc = state.deploy_depository(OptionalValue::Some(calculator_sc));
        state.authorize_depository(PermissionKind::LiquidityDepositor);
        state.initialize_bond_terms(CONTROL_VARIABLE, 100, MAX_DEBT, 0);

        state
    }

    pub fn deploy_depository(
        &mut self,
        bond_calculator: OptionalValue<ManagedAddress<StaticApi>>,
    ) -> ManagedAddress<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .init(
                BTRFLY_TOKEN.to_token_identifier(),
                self.principal.to_token_identifier(),
                self.treasury_sc.clone(),
                DAO_ADDRESS,
                FEE_RECIPIENT_ADDRESS,
                TITHE_RECIPIENT_ADDRESS,
                bond_calculator,
            )
            .code(BOND_DEPOSITORY_PATH)
            .returns(ReturnsNewManagedAddress)
            .run()
    }

    pub fn deploy_staking(&mut self) -> ManagedAddress<StaticApi> {
        let staking_sc = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_staking::StakingProxy)
            .init(
                BTRFLY_TOKEN.to_token_identifier(),
                EPOCH_LENGTH,
                1u64,
                FIRST_EPOCH_BLOCK,
            )
            .code(STAKING_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .set_staking(staking_sc.clone())
            .run();

        staking_sc
    }

    // Treasury

    pub fn queue(&mut self, kind: PermissionKind, target: PermissionTarget<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .queue(kind, target)
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

    pub fn grant(&mut self, kind: PermissionKind, account: &ManagedAddress<StaticApi>) {
        let target = PermissionTarget::Account(account.clone());
        self.queue(kind, target.clone());
        self.toggle(kind, target, OptionalValue::None);
    }

    pub fn list_reserve_token(&mut self, token: TestTokenIdentifier, decimals: u32, floor: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .set_asset_decimals(token.to_token_identifier(), decimals)
            .run();

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .set_floor(token.to_token_identifier(), BigUint::from(floor))
            .run();

        let target = PermissionTarget::Token(token.to_token_identifier());
        self.queue(PermissionKind::ReserveToken, target.clone());
        self.toggle(PermissionKind::ReserveToken, target, OptionalValue::None);
    }

    pub fn list_liquidity_token(
        &mut self,
        token: TestTokenIdentifier,
        calculator: &ManagedAddress<StaticApi>,
    ) {
        let target = PermissionTarget::Token(token.to_token_identifier());
        self.queue(PermissionKind::LiquidityToken, target.clone());
        self.toggle(
            PermissionKind::LiquidityToken,
            target,
            OptionalValue::Some(calculator.clone()),
        );
    }

    /// Owner deposits `amount` whole tokens and receives exactly `INITIAL_SUPPLY` BTRFLY.
    pub fn bootstrap_supply(
        &mut self,
        token: TestTokenIdentifier,
        amount: u64,
        decimals: u32,
        floor: u64,
    ) {
        let owner = OWNER_ADDRESS.to_managed_address();
        self.grant(PermissionKind::ReserveDepositor, &owner);

        let value = BigUint::<StaticApi>::from(amount) * BigUint::from(floor);
        let profit = value - BigUint::from(INITIAL_SUPPLY);

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .deposit(profit)
            .single_esdt(&token.to_token_identifier(), 0, &whole(amount, decimals))
            .run();
    }

    pub fn authorize_depository(&mut self, depositor_kind: PermissionKind) {
        let depository = self.depository_sc.clone();
        self.grant(depositor_kind, &depository);
        self.grant(PermissionKind::RewardManager, &depository);
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

    pub fn value_of(&mut self, token: TestTokenIdentifier, amount: &BigUint<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .value_of(token.to_token_identifier(), amount)
            .returns(ReturnsResult)
            .run()
    }

    // Depository

    pub fn initialize_bond_terms(
        &mut self,
        control_variable: u64,
        minimum_price: u64,
        max_debt: u64,
        initial_debt: u64,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .initialize_bond_terms(
                BigUint::from(control_variable),
                VESTING_TERM,
                BigUint::from(minimum_price),
                BigUint::from(MAX_PAYOUT),
                BigUint::from(FEE),
                BigUint::from(max_debt),
                BigUint::from(TITHE),
                BigUint::from(initial_debt),
            )
            .run();
    }

    pub fn initialize_bond_terms_error(&mut self, initial_debt: u64, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .initialize_bond_terms(
                BigUint::from(CONTROL_VARIABLE),
                VESTING_TERM,
                BigUint::from(MINIMUM_PRICE),
                BigUint::from(MAX_PAYOUT),
                BigUint::from(FEE),
                BigUint::from(MAX_DEBT),
                BigUint::from(TITHE),
                BigUint::from(initial_debt),
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_bond_terms(&mut self, parameter: BondParameter, input: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .set_bond_terms(parameter, BigUint::from(input))
            .run();
    }

    pub fn set_bond_terms_error(&mut self, parameter: BondParameter, input: u64, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .set_bond_terms(parameter, BigUint::from(input))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_adjustment(&mut self, addition: bool, increment: u64, target: u64, buffer: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .set_adjustment(addition, BigUint::from(increment), BigUint::from(target), buffer)
            .run();
    }

    pub fn set_adjustment_error(&mut self, increment: u64, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .set_adjustment(true, BigUint::from(increment), BigUint::from(1_000u64), 0u64)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn deposit(
        &mut self,
        from: &TestAddress,
        amount: BigUint<StaticApi>,
        max_price: u64,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .deposit(BigUint::from(max_price), from.to_managed_address())
            .single_esdt(&self.principal.to_token_identifier(), 0, &amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn deposit_error(
        &mut self,
        from: &TestAddress,
        amount: BigUint<StaticApi>,
        max_price: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .deposit(BigUint::from(max_price), from.to_managed_address())
            .single_esdt(&self.principal.to_token_identifier(), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn redeem(&mut self, recipient: &TestAddress, stake: bool) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(recipient.to_managed_address())
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .redeem(recipient.to_managed_address(), stake)
            .returns(ReturnsResult)
            .run()
    }

    pub fn redeem_error(&mut self, recipient: &TestAddress, stake: bool, error_message: &[u8]) {
        self.world
            .tx()
            .from(recipient.to_managed_address())
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .redeem(recipient.to_managed_address(), stake)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn recover_lost_token(&mut self, token: TestTokenIdentifier) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .recover_lost_token(token.to_token_identifier())
            .returns(ReturnsResult)
            .run()
    }

    pub fn recover_lost_token_error(&mut self, token: TestTokenIdentifier, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .recover_lost_token(token.to_token_identifier())
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn bond_price(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .bond_price()
            .returns(ReturnsResult)
            .run()
    }

    pub fn bond_price_in_principal(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .bond_price_in_principal()
            .returns(ReturnsResult)
            .run()
    }

    pub fn debt_ratio(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .debt_ratio()
            .returns(ReturnsResult)
            .run()
    }

    pub fn current_debt(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .current_debt()
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_debt(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .total_debt()
            .returns(ReturnsResult)
            .run()
    }

    pub fn last_decay(&mut self) -> u64 {
        self.world
            .query()
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .last_decay()
            .returns(ReturnsResult)
            .run()
    }

    pub fn max_payout(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .max_payout()
            .returns(ReturnsResult)
            .run()
    }

    pub fn terms(&mut self) -> BondTerms<StaticApi> {
        self.world
            .query()
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .terms()
            .returns(ReturnsResult)
            .run()
    }

    pub fn adjustment(&mut self) -> Adjustment<StaticApi> {
        self.world
            .query()
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .adjustment()
            .returns(ReturnsResult)
            .run()
    }

    pub fn bond_info(&mut self, depositor: &TestAddress) -> Bond<StaticApi> {
        self.world
            .query()
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .get_bond_info(depositor.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn pending_payout_for(&mut self, depositor: &TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .pending_payout_for(depositor.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn percent_vested_for(&mut self, depositor: &TestAddress) -> u64 {
        self.world
            .query()
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .percent_vested_for(depositor.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn has_bond_record(&mut self, depositor: &TestAddress) -> bool {
        let mut has_record = false;
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.depository_sc.clone())
            .whitebox(bond_depository::contract_obj, |sc| {
                has_record = !sc.bond_info(&depositor.to_managed_address()).is_empty();
            });

        has_record
    }
}

pub fn deploy_treasury(world: &mut ScenarioWorld, blocks_needed_for_queue: u64) -> ManagedAddress<StaticApi> {
    let treasury_sc = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_treasury::TreasuryProxy)
        .init(BTRFLY_TOKEN.to_token_identifier(), blocks_needed_for_queue)
        .code(TREASURY_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    world.set_esdt_local_roles(treasury_sc.clone(), BTRFLY_TOKEN.as_bytes(), MINT_BURN_ROLES);

    treasury_sc
}

/// BTRFLY/WETH pool seeded by the owner with 10 BTRFLY and 2 WETH.
pub fn deploy_pool(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let pool_sc = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_swap_mock::SwapMockProxy)
        .init(
            BTRFLY_TOKEN.to_token_identifier(),
            WETH_TOKEN.to_token_identifier(),
            LP_TOKEN.to_token_identifier(),
            BTRFLY_DECIMALS,
            WETH_DECIMALS,
        )
        .code(SWAP_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    world.set_esdt_local_roles(pool_sc.clone(), LP_TOKEN.as_bytes(), MINT_BURN_ROLES);

    let mut payments = ManagedVec::<StaticApi, EsdtTokenPayment<StaticApi>>::new();
    payments.push(EsdtTokenPayment::new(
        BTRFLY_TOKEN.to_token_identifier(),
        0,
        whole(10, BTRFLY_DECIMALS),
    ));
    payments.push(EsdtTokenPayment::new(
        WETH_TOKEN.to_token_identifier(),
        0,
        whole(2, WETH_DECIMALS),
    ));

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(pool_sc.clone())
        .typed(proxy_swap_mock::SwapMockProxy)
        .init_pool()
        .multi_esdt(payments)
        .run();

    pool_sc
}

pub fn deploy_calculator(
    world: &mut ScenarioWorld,
    pool_sc: &ManagedAddress<StaticApi>,
) -> ManagedAddress<StaticApi> {
    let calculator_sc = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_bonding_calculator::BondingCalculatorProxy)
        .init(BTRFLY_TOKEN.to_token_identifier())
        .code(BONDING_CALCULATOR_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(calculator_sc.clone())
        .typed(proxy_bonding_calculator::BondingCalculatorProxy)
        .add_pair(pool_sc.clone())
        .run();

    calculator_sc
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world
        .account(OWNER_ADDRESS)
        .nonce(1)
        .esdt_balance(CRV_TOKEN, whole(100_000, CRV_DECIMALS))
        .esdt_balance(CVX_TOKEN, whole(100_000, CVX_DECIMALS))
        .esdt_balance(WETH_TOKEN, whole(100, WETH_DECIMALS));

    for depositor in [DEPOSITOR_ADDRESS, OTHER_DEPOSITOR_ADDRESS] {
        world
            .account(depositor)
            .nonce(1)
            .esdt_balance(CRV_TOKEN, whole(10_000, CRV_DECIMALS))
            .esdt_balance(CVX_TOKEN, whole(10_000, CVX_DECIMALS));
    }

    for recipient in [DAO_ADDRESS, FEE_RECIPIENT_ADDRESS, TITHE_RECIPIENT_ADDRESS] {
        world.account(recipient).nonce(1);
    }
}

/// Credits `to` with `amount` LP tokens on top of the owner's pool share.
pub fn credit_lp(world: &mut ScenarioWorld, to: &TestAddress, amount: &BigUint<StaticApi>) {
    world.set_esdt_balance(to.to_managed_address(), LP_TOKEN.as_bytes(), amount.clone());
}
