#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod storage;
pub use common_events::*;

use common_constants::DEBT_FEE_DENOMINATOR;
use common_errors::{ERROR_DEBT_FEE_TOO_HIGH, ERROR_INSUFFICIENT_AMOUNTS};
use common_proxies::{proxy_swap_mock, proxy_treasury};
use common_structs::UpkeepCapacity;

/// Pairs idle BTRFLY with treasury WETH and deposits the minted LP back into
/// the treasury.
///
/// The contract needs the ReserveManager permission for WETH and the
/// LiquidityDepositor permission for the pool's LP token.
#[multiversx_sc::contract]
pub trait LiquidityUpkeep:
    storage::Storage + common_events::EventsModule + common_math::SharedMathModule
{
    /// # Arguments
    /// - `native_token`: BTRFLY token identifier.
    /// - `weth_token`: WETH token identifier, a treasury reserve token.
    /// - `pool`: BTRFLY/WETH pool.
    /// - `treasury`: Treasury supplying WETH and receiving LP.
    /// - `fee_recipient`: Receiver of the debt fee.
    #[init]
    fn init(
        &self,
        native_token: TokenIdentifier,
        weth_token: TokenIdentifier,
        pool: ManagedAddress,
        treasury: ManagedAddress,
        fee_recipient: ManagedAddress,
    ) {
        self.native_token().set(native_token);
        self.weth_token().set(weth_token);
        self.pool().set(pool);
        self.treasury().set(treasury);
        self.fee_recipient().set(fee_recipient);
        self.debt_fee().set(BigUint::zero());
        self.debt_ceiling().set(UpkeepCapacity {
            ceiling: BigUint::zero(),
            used: BigUint::zero(),
            period: 0,
            period_start: self.blockchain().get_block_nonce(),
        });
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// True while the contract holds BTRFLY to pair.
    #[view(checkUpkeep)]
    fn check_upkeep(&self) -> bool {
        self.native_balance() > 0u64
    }

    /// Adds the held BTRFLY to the pool, paired with treasury WETH.
    ///
    /// **Purpose**: Turns idle BTRFLY into protocol owned liquidity without
    /// leaving unbacked supply behind.
    ///
    /// **Process**:
    /// 1. Quotes the WETH matching the whole BTRFLY balance.
    /// 2. Caps it at the remaining capacity and at what the treasury can release,
    ///    shrinking the BTRFLY side to match when capped.
    /// 3. Pulls the WETH from the treasury and adds both sides to the pool.
    /// 4. Pays the debt fee in LP and deposits the rest into the treasury as pure profit.
    /// 5. Burns the BTRFLY left unpaired.
    ///
    /// # Returns
    /// - `(eth, btrfly, unused)`: WETH and BTRFLY added, BTRFLY burned.
    ///
    /// # Errors
    /// - `ERROR_INSUFFICIENT_AMOUNTS`: One side of the liquidity would be zero.
    #[only_owner]
    #[endpoint(performUpkeep)]
    fn perform_upkeep(&self) -> MultiValue3<BigUint, BigUint, BigUint> {
        let native_token = self.native_token().get();
        let weth_token = self.weth_token().get();
        let native_balance = self.native_balance();

        let eth_needed = self.pool_equivalent(&native_token, &native_balance);
        let eth_cap = self.get_min(self.capacity(), self.treasury_manageable(&weth_token));

        let (eth_amount, native_amount) = if eth_needed > eth_cap {
            let native_amount = self.pool_equivalent(&weth_token, &eth_cap);
            (eth_cap, native_amount)
        } else {
            (eth_needed, native_balance.clone())
        };
        require!(
            eth_amount > 0u64 && native_amount > 0u64,
            ERROR_INSUFFICIENT_AMOUNTS
        );

        self.tx()
            .to(self.treasury().get())
            .typed(proxy_treasury::TreasuryProxy)
            .manage(&weth_token, &eth_amount)
            .sync_call();

        let lp = self.add_pool_liquidity(&weth_token, &eth_amount, &native_token, &native_amount);
        self.settle_lp(lp);

        let unused = &native_balance - &native_amount;
        if unused > 0u64 {
            self.tx()
                .to(self.treasury().get())
                .typed(proxy_treasury::TreasuryProxy)
                .burn()
                .single_esdt(&native_token, 0, &unused)
                .sync_call();
        }

        let now = self.blockchain().get_block_nonce();
        self.debt_ceiling()
            .update(|capacity| capacity.consume(&eth_amount, now));

        self.add_liquidity_event(&eth_amount, &native_amount, &unused);

        (eth_amount, native_amount, unused).into()
    }

    /// Sends any held token out.
    #[only_owner]
    #[endpoint(withdraw)]
    fn withdraw(&self, token: TokenIdentifier, amount: BigUint, recipient: ManagedAddress) {
        self.tx()
            .to(&recipient)
            .payment(EsdtTokenPayment::new(token, 0, amount))
            .transfer_if_not_empty();
    }

    /// # Arguments
    /// - `fee`: Share of minted LP paid to the fee recipient, out of 1_000_000.
    #[only_owner]
    #[endpoint(setDebtFee)]
    fn set_debt_fee(&self, fee: BigUint) {
        require!(fee <= DEBT_FEE_DENOMINATOR, ERROR_DEBT_FEE_TOO_HIGH);

        self.debt_fee().set(&fee);
        self.set_debt_fee_event(&fee);
    }

    /// Sets the WETH allowance and how often it refills.
    ///
    /// WETH already used in the running period stays counted.
    ///
    /// # Arguments
    /// - `ceiling`: WETH that can be paired per period.
    /// - `period`: Blocks between refills, zero never refills.
    #[only_owner]
    #[endpoint(setDebtCeiling)]
    fn set_debt_ceiling(&self, ceiling: BigUint, period: u64) {
        let now = self.blockchain().get_block_nonce();
        self.debt_ceiling().update(|capacity| {
            capacity.ceiling = ceiling;
            capacity.period = period;
            capacity.period_start = now;
        });
    }

    #[only_owner]
    #[endpoint(setFeeRecipient)]
    fn set_fee_recipient(&self, recipient: ManagedAddress) {
        self.fee_recipient().set(recipient);
    }

    /// WETH that can still be paired now.
    #[view(getCapacity)]
    fn capacity(&self) -> BigUint {
        self.debt_ceiling()
            .get()
            .available_at(self.blockchain().get_block_nonce())
    }

    fn add_pool_liquidity(
        &self,
        weth_token: &TokenIdentifier,
        eth_amount: &BigUint,
        native_token: &TokenIdentifier,
        native_amount: &BigUint,
    ) -> EsdtTokenPayment {
        let mut payments = ManagedVec::new();
        payments.push(EsdtTokenPayment::new(weth_token.clone(), 0, eth_amount.clone()));
        payments.push(EsdtTokenPayment::new(native_token.clone(), 0, native_amount.clone()));

        self.tx()
            .to(self.pool().get())
            .typed(proxy_swap_mock::SwapMockProxy)
            .add_liquidity()
            .multi_esdt(payments)
            .returns(ReturnsResult)
            .sync_call()
    }

    // Debt fee to the fee recipient, the rest into the treasury minting nothing
    fn settle_lp(&self, lp: EsdtTokenPayment) {
        let fee = self.mul_div_floor(
            &lp.amount,
            &self.debt_fee().get(),
            &BigUint::from(DEBT_FEE_DENOMINATOR),
        );
        if fee > 0u64 {
            self.tx()
                .to(self.fee_recipient().get())
                .single_esdt(&lp.token_identifier, 0, &fee)
                .transfer();
        }

        let deposited = &lp.amount - &fee;
        self.liquidity_fee_paid_event(&fee, &deposited);

        if deposited == 0u64 {
            return;
        }

        let treasury = self.treasury().get();
        let profit = self
            .tx()
            .to(&treasury)
            .typed(proxy_treasury::TreasuryProxy)
            .value_of(&lp.token_identifier, &deposited)
            .returns(ReturnsResult)
            .sync_call_readonly();

        self.tx()
            .to(&treasury)
            .typed(proxy_treasury::TreasuryProxy)
            .deposit(profit)
            .single_esdt(&lp.token_identifier, 0, &deposited)
            .sync_call();
    }

    fn pool_equivalent(&self, token: &TokenIdentifier, amount: &BigUint) -> BigUint {
        self.tx()
            .to(self.pool().get())
            .typed(proxy_swap_mock::SwapMockProxy)
            .get_equivalent(token, amount)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn treasury_manageable(&self, token: &TokenIdentifier) -> BigUint {
        self.tx()
            .to(self.treasury().get())
            .typed(proxy_treasury::TreasuryProxy)
            .get_manageable_amount(token)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn native_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(self.native_token().get()), 0)
    }
}
