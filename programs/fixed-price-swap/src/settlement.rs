//! Balance planning for pool instructions.
//!
//! Each instruction first asks this module for a [`Settlement`]: the complete
//! set of movements it is about to perform. Planning never touches an account,
//! so a failed precondition leaves every balance untouched, and the handler
//! only starts issuing transfers once the whole batch is known to be valid.
//! [`Settlement::apply`] gives the custody the handler must end up with;
//! [`ensure_settled`] compares it with the reloaded accounts after the CPIs.

use anchor_lang::prelude::*;

use crate::error::SwapError;
use crate::state::PoolConfig;

/// Snapshot of the two custody balances of a pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Custody {
    pub native: u64,
    pub token: u64,
}

/// Movements into (`*_in`) and out of (`*_out`) custody for one instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settlement {
    pub native_in: u64,
    pub native_out: u64,
    pub token_in: u64,
    pub token_out: u64,
}

impl Settlement {
    /// Custody balances after this settlement, or an error with `custody`
    /// left as it was.
    pub fn apply(&self, custody: Custody) -> Result<Custody> {
        let native = custody
            .native
            .checked_add(self.native_in)
            .ok_or(SwapError::MathOverflow)?
            .checked_sub(self.native_out)
            .ok_or(SwapError::InsufficientFunds)?;
        let token = custody
            .token
            .checked_add(self.token_in)
            .ok_or(SwapError::MathOverflow)?
            .checked_sub(self.token_out)
            .ok_or(SwapError::InsufficientFunds)?;
        Ok(Custody { native, token })
    }
}

/// Fails unless the custody accounts hold exactly what the plan predicted.
pub fn ensure_settled(expected: Custody, actual: Custody) -> Result<()> {
    require_eq!(expected.native, actual.native, SwapError::InvalidAccount);
    require_eq!(expected.token, actual.token, SwapError::InvalidAccount);
    Ok(())
}

pub fn ensure_funds(available: u64, amount: u64) -> Result<()> {
    require_gte!(available, amount, SwapError::InsufficientFunds);
    Ok(())
}

pub fn add_liquidity(depositor_tokens: u64, amount: u64) -> Result<Settlement> {
    ensure_funds(depositor_tokens, amount)?;
    Ok(Settlement {
        token_in: amount,
        ..Settlement::default()
    })
}

/// Plans a swap of `lamports` for tokens at the pool's fixed price.
///
/// Checks run in a fixed order: pool activity, the user's lamports, then the
/// pool's token liquidity for the quoted payout.
pub fn swap(pool: &PoolConfig, user_lamports: u64, custody: Custody, lamports: u64) -> Result<Settlement> {
    require!(pool.is_active, SwapError::DeactivatePool);
    ensure_funds(user_lamports, lamports)?;
    let tokens_out = pool.quote_tokens_out(lamports)?;
    ensure_funds(custody.token, tokens_out)?;
    Ok(Settlement {
        native_in: lamports,
        token_out: tokens_out,
        ..Settlement::default()
    })
}

pub fn withdraw_token(custody: Custody, amount: u64) -> Result<Settlement> {
    ensure_funds(custody.token, amount)?;
    Ok(Settlement {
        token_out: amount,
        ..Settlement::default()
    })
}

pub fn drain_token(custody: Custody) -> Settlement {
    Settlement {
        token_out: custody.token,
        ..Settlement::default()
    }
}

pub fn withdraw_native(custody: Custody, amount: u64) -> Result<Settlement> {
    ensure_funds(custody.native, amount)?;
    Ok(Settlement {
        native_out: amount,
        ..Settlement::default()
    })
}

pub fn drain_native(custody: Custody) -> Settlement {
    Settlement {
        native_out: custody.native,
        ..Settlement::default()
    }
}
