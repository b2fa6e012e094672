multiversx_sc::imports!();

use common_constants::{
    BPS, MAX_ADJUSTMENT_DENOMINATOR, MAX_ADJUSTMENT_NUMERATOR, MAX_PAYOUT_LIMIT, MIN_VESTING_TERM,
};
use common_errors::{
    ERROR_DEBT_MUST_BE_ZERO, ERROR_FEE_TOO_HIGH, ERROR_INCREMENT_TOO_LARGE, ERROR_INVALID_VESTING,
    ERROR_PAYOUT_TOO_HIGH, ERROR_PROTECTED_TOKEN, ERROR_TITHE_TOO_HIGH, ERROR_VESTING_TOO_SHORT,
};
use common_structs::{Adjustment, BondParameter, BondTerms};

use crate::{debt, storage};

#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + debt::DebtModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// Sets the market terms and seeds the debt.
    ///
    /// Only allowed while no debt is outstanding.
    ///
    /// # Arguments
    /// - `control_variable`: Scaling of the premium on the debt ratio.
    /// - `vesting_term`: Blocks over which a bond vests.
    /// - `minimum_price`: Price floor, in hundredths.
    /// - `max_payout`: Parts of 100_000 of native supply one deposit may receive.
    /// - `fee`: Basis points of each redemption owed to the fee recipient.
    /// - `max_debt`: Debt ceiling.
    /// - `tithe`: Basis points of each deposit owed to the tithe recipient.
    /// - `initial_debt`: Debt the market starts with.
    #[only_owner]
    #[endpoint(initializeBondTerms)]
    fn initialize_bond_terms(
        &self,
        control_variable: BigUint,
        vesting_term: u64,
        minimum_price: BigUint,
        max_payout: BigUint,
        fee: BigUint,
        max_debt: BigUint,
        tithe: BigUint,
        initial_debt: BigUint,
    ) {
        require!(self.current_debt() == 0u64, ERROR_DEBT_MUST_BE_ZERO);
        require!(vesting_term > 0, ERROR_INVALID_VESTING);
        require!(max_payout <= MAX_PAYOUT_LIMIT, ERROR_PAYOUT_TOO_HIGH);
        require!(fee <= BPS, ERROR_FEE_TOO_HIGH);
        require!(tithe <= BPS, ERROR_TITHE_TOO_HIGH);

        let terms = BondTerms {
            control_variable,
            vesting_term,
            minimum_price,
            max_payout,
            fee,
            max_debt,
            tithe,
        };

        self.total_debt().set(&initial_debt);
        self.last_decay().set(self.blockchain().get_block_nonce());

        self.bond_terms_set_event(&initial_debt, &terms);
        self.terms().set(terms);
    }

    /// Updates a single term.
    #[only_owner]
    #[endpoint(setBondTerms)]
    fn set_bond_terms(&self, parameter: BondParameter, input: BigUint) {
        let mut terms = self.terms().get();

        match parameter {
            BondParameter::Vesting => {
                let vesting_term = match input.to_u64() {
                    Some(vesting_term) => vesting_term,
                    None => sc_panic!(ERROR_INVALID_VESTING),
                };
                require!(vesting_term >= MIN_VESTING_TERM, ERROR_VESTING_TOO_SHORT);
                terms.vesting_term = vesting_term;
            },
            BondParameter::Payout => {
                require!(input <= MAX_PAYOUT_LIMIT, ERROR_PAYOUT_TOO_HIGH);
                terms.max_payout = input;
            },
            BondParameter::Fee => {
                require!(input <= BPS, ERROR_FEE_TOO_HIGH);
                terms.fee = input;
            },
            BondParameter::Debt => terms.max_debt = input,
            BondParameter::Tithe => {
                require!(input <= BPS, ERROR_TITHE_TOO_HIGH);
                terms.tithe = input;
            },
            BondParameter::MinimumPrice => terms.minimum_price = input,
        }

        self.bond_terms_set_event(&self.total_debt().get(), &terms);
        self.terms().set(terms);
    }

    /// Schedules a stepwise control variable change.
    ///
    /// # Arguments
    /// - `addition`: Direction of the change.
    /// - `increment`: Step, at most 2.5% of the current control variable.
    /// - `target`: Value at which the adjustment stops.
    /// - `buffer`: Minimum blocks between two steps.
    #[only_owner]
    #[endpoint(setAdjustment)]
    fn set_adjustment(&self, addition: bool, increment: BigUint, target: BigUint, buffer: u64) {
        let max_increment = self.mul_div_floor(
            &self.terms().get().control_variable,
            &BigUint::from(MAX_ADJUSTMENT_NUMERATOR),
            &BigUint::from(MAX_ADJUSTMENT_DENOMINATOR),
        );
        require!(increment <= max_increment, ERROR_INCREMENT_TOO_LARGE);

        self.adjustment().set(Adjustment {
            add: addition,
            rate: increment,
            target,
            buffer,
            last_block: self.blockchain().get_block_nonce(),
        });
    }

    /// Staking contract used by `redeem` when asked to stake the payout.
    #[only_owner]
    #[endpoint(setStaking)]
    fn set_staking(&self, staking: ManagedAddress) {
        self.staking().set(staking);
    }

    /// Sends the whole balance of a stray token to the DAO.
    ///
    /// Neither the native token owed to bonders nor the principal can be recovered.
    #[endpoint(recoverLostToken)]
    fn recover_lost_token(&self, token: TokenIdentifier) -> BigUint {
        require!(
            token != self.native_token().get() && token != self.principal_token().get(),
            ERROR_PROTECTED_TOKEN
        );

        let amount = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token.clone()), 0);

        let payment = EsdtTokenPayment::new(token, 0, amount);
        self.tx()
            .to(self.dao().get())
            .payment(&payment)
            .transfer_if_not_empty();

        payment.amount
    }
}
