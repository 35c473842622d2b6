//! Fixed-price swap pool between SOL and a single SPL token.
//!
//! A pool is owned by the `authority` that created it and is addressed by
//! `[POOL_CONFIG_SEED, authority, token_mint]`. Anyone may add token liquidity
//! or buy tokens with SOL at the configured price; only the recorded
//! `master_authority` may take value out of the pool.

use anchor_lang::prelude::*;

declare_id!("8ZhoEkMgPiQnWmipuBgDYnYiNZDHrgtqKih6qwScv4L1");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod settlement;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::*;

#[program]
pub mod fixed_price_swap {
    use super::*;

    /// Create the pool for (authority, token_mint) and its two custody accounts.
    pub fn initialize(ctx: Context<Initialize>, price: u64) -> Result<()> {
        instructions::initialize(ctx, price)
    }

    /// Deposit tokens into the pool's token custody.
    pub fn add_liquidity(ctx: Context<AddLiquidity>, amount: u64) -> Result<()> {
        instructions::add_liquidity(ctx, amount)
    }

    /// Buy tokens with `lamports` at the pool's fixed price.
    pub fn swap(ctx: Context<Swap>, lamports: u64) -> Result<()> {
        instructions::swap(ctx, lamports)
    }

    /// Master authority only.
    pub fn withdraw_token(ctx: Context<WithdrawToken>, amount: u64) -> Result<()> {
        instructions::withdraw_token(ctx, amount)
    }

    /// Master authority only. Empties the token custody.
    pub fn drain_token(ctx: Context<WithdrawToken>) -> Result<()> {
        instructions::drain_token(ctx)
    }

    /// Master authority only.
    pub fn withdraw_native(ctx: Context<WithdrawNative>, lamports: u64) -> Result<()> {
        instructions::withdraw_native(ctx, lamports)
    }

    /// Master authority only. Empties the native custody down to its rent reserve.
    pub fn drain_native(ctx: Context<WithdrawNative>) -> Result<()> {
        instructions::drain_native(ctx)
    }

    /// Pool authority only. Toggles whether swaps are accepted.
    pub fn update_config(ctx: Context<UpdateConfig>, active: bool) -> Result<()> {
        instructions::update_config(ctx, active)
    }
}
