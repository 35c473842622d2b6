//! In-memory balance model for the settlement tests.
//!
//! Plans with `settlement` and moves the planned amounts between the pool's
//! custody and plain wallet balances. A failed plan leaves every balance
//! exactly as it was. Account and signer checks are not modelled here; the
//! program tests in `instructions.rs` cover them.

#![allow(dead_code)]

use anchor_lang::error::Error;
use anchor_lang::prelude::Pubkey;
use fixed_price_swap::pda::PoolAddresses;
use fixed_price_swap::settlement::{self, Custody};
use fixed_price_swap::state::PoolConfig;

pub const RENT_RESERVE: u64 = 890_880;

pub fn error_code(err: Error) -> u32 {
    match err {
        Error::AnchorError(e) => e.error_code_number,
        other => panic!("unexpected error: {other:?}"),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Wallet {
    pub lamports: u64,
    pub tokens: u64,
}

pub struct TestPool {
    pub addrs: PoolAddresses,
    pub config: PoolConfig,
    pub custody: Custody,
}

impl TestPool {
    pub fn new(authority: Pubkey, master_authority: Pubkey, price: u64) -> Self {
        let token_mint = Pubkey::new_unique();
        let addrs = PoolAddresses::derive(&fixed_price_swap::ID, &authority, &token_mint);
        let config = PoolConfig {
            config_bump: addrs.config_bump,
            token_bump: addrs.token_bump,
            native_bump: addrs.native_bump,
            price,
            is_active: true,
            native_reserve: RENT_RESERVE,
            token_mint,
            pool_token_account: addrs.pool_token_account,
            pool_native_account: addrs.pool_native_account,
            master_authority,
            authority,
        };
        Self {
            addrs,
            config,
            custody: Custody::default(),
        }
    }

    pub fn add_liquidity(&mut self, depositor: &mut Wallet, amount: u64) -> Result<(), Error> {
        let plan = settlement::add_liquidity(depositor.tokens, amount)?;
        self.custody = plan.apply(self.custody)?;
        depositor.tokens -= plan.token_in;
        Ok(())
    }

    pub fn swap(&mut self, user: &mut Wallet, lamports: u64) -> Result<u64, Error> {
        let plan = settlement::swap(&self.config, user.lamports, self.custody, lamports)?;
        self.custody = plan.apply(self.custody)?;
        user.lamports -= plan.native_in;
        user.tokens += plan.token_out;
        Ok(plan.token_out)
    }

    pub fn withdraw_token(&mut self, to: &mut Wallet, amount: u64) -> Result<(), Error> {
        let plan = settlement::withdraw_token(self.custody, amount)?;
        self.custody = plan.apply(self.custody)?;
        to.tokens += plan.token_out;
        Ok(())
    }

    pub fn drain_token(&mut self, to: &mut Wallet) -> Result<(), Error> {
        let plan = settlement::drain_token(self.custody);
        self.custody = plan.apply(self.custody)?;
        to.tokens += plan.token_out;
        Ok(())
    }

    pub fn withdraw_native(&mut self, to: &mut Wallet, lamports: u64) -> Result<(), Error> {
        let plan = settlement::withdraw_native(self.custody, lamports)?;
        self.custody = plan.apply(self.custody)?;
        to.lamports += plan.native_out;
        Ok(())
    }

    pub fn drain_native(&mut self, to: &mut Wallet) -> Result<(), Error> {
        let plan = settlement::drain_native(self.custody);
        self.custody = plan.apply(self.custody)?;
        to.lamports += plan.native_out;
        Ok(())
    }

    pub fn set_active(&mut self, active: bool) {
        self.config.is_active = active;
    }
}
