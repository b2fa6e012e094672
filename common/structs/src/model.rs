#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Treasury permission kinds. The discriminants match the order in which the
/// permissions are queued on-chain, callers only ever deal with the variant.
#[type_abi]
#[derive(
    NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum PermissionKind {
    ReserveDepositor,
    ReserveSpender,
    ReserveToken,
    ReserveManager,
    LiquidityDepositor,
    LiquidityToken,
    LiquidityManager,
    Debtor,
    RewardManager,
    Sohm,
}

impl PermissionKind {
    /// Token kinds are keyed by token identifier, every other kind by account.
    pub fn is_token_kind(&self) -> bool {
        matches!(self, PermissionKind::ReserveToken | PermissionKind::LiquidityToken)
    }

    /// Managers and debtors wait twice as long in the queue.
    pub fn queue_multiplier(&self) -> u64 {
        match self {
            PermissionKind::ReserveManager
            | PermissionKind::LiquidityManager
            | PermissionKind::Debtor => 2,
            _ => 1,
        }
    }
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Eq, Debug)]
pub enum PermissionTarget<M: ManagedTypeApi> {
    Account(ManagedAddress<M>),
    Token(TokenIdentifier<M>),
}

impl<M: ManagedTypeApi> PermissionTarget<M> {
    pub fn matches(&self, kind: &PermissionKind) -> bool {
        match self {
            PermissionTarget::Account(_) => !kind.is_token_kind(),
            PermissionTarget::Token(_) => kind.is_token_kind(),
        }
    }
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Eq, Debug)]
pub struct BondTerms<M: ManagedTypeApi> {
    pub control_variable: BigUint<M>,
    pub vesting_term: u64,
    pub minimum_price: BigUint<M>,
    /// Parts of 100_000 of native supply
    pub max_payout: BigUint<M>,
    /// Basis points of the payout owed to the fee recipient
    pub fee: BigUint<M>,
    pub max_debt: BigUint<M>,
    /// Basis points of the principal owed to the tithe recipient
    pub tithe: BigUint<M>,
}

impl<M: ManagedTypeApi> BondTerms<M> {
    pub fn is_initialized(&self) -> bool {
        self.vesting_term > 0
    }
}

/// Per depositor vesting record.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Eq, Debug)]
pub struct Bond<M: ManagedTypeApi> {
    pub payout: BigUint<M>,
    /// Blocks left until the whole payout is vested, counted from `last_block`
    pub vesting: u64,
    pub last_block: u64,
    pub price_paid: BigUint<M>,
}

impl<M: ManagedTypeApi> Bond<M> {
    pub fn new(payout: BigUint<M>, vesting: u64, last_block: u64, price_paid: BigUint<M>) -> Self {
        Bond {
            payout,
            vesting,
            last_block,
            price_paid,
        }
    }

    pub fn is_fully_vested_at(&self, block: u64) -> bool {
        self.vesting == 0 || block.saturating_sub(self.last_block) >= self.vesting
    }
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Eq, Debug)]
pub struct Adjustment<M: ManagedTypeApi> {
    pub add: bool,
    pub rate: BigUint<M>,
    pub target: BigUint<M>,
    /// Minimum blocks between two adjustments
    pub buffer: u64,
    pub last_block: u64,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BondParameter {
    Vesting,
    Payout,
    Fee,
    Debt,
    Tithe,
    MinimumPrice,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Eq, Debug)]
pub struct Epoch<M: ManagedTypeApi> {
    pub length: u64,
    pub number: u64,
    pub end_block: u64,
    /// Profit applied to the rebasing supply on the next rebase
    pub distribute: BigUint<M>,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Eq, Debug)]
pub struct WarmupClaim<M: ManagedTypeApi> {
    pub deposit: BigUint<M>,
    pub gons: BigUint<M>,
    pub expiry: u64,
    pub lock: bool,
}

/// Replenishing WETH allowance of the liquidity upkeep.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Eq, Debug)]
pub struct UpkeepCapacity<M: ManagedTypeApi> {
    pub ceiling: BigUint<M>,
    pub used: BigUint<M>,
    /// Blocks between two refills, zero disables refills
    pub period: u64,
    pub period_start: u64,
}

impl<M: ManagedTypeApi> UpkeepCapacity<M> {
    pub fn is_refill_due(&self, block: u64) -> bool {
        self.period > 0 && block >= self.period_start.saturating_add(self.period)
    }

    pub fn available_at(&self, block: u64) -> BigUint<M> {
        if self.is_refill_due(block) {
            return self.ceiling.clone();
        }
        if self.used >= self.ceiling {
            BigUint::zero()
        } else {
            &self.ceiling - &self.used
        }
    }

    pub fn consume(&mut self, amount: &BigUint<M>, block: u64) {
        if self.is_refill_due(block) {
            self.used = BigUint::zero();
            self.period_start = block;
        }
        self.used += amount;
    }
}
