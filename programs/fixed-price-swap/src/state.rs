use anchor_lang::prelude::*;

use crate::constants::NATIVE_UNIT_SCALE;
use crate::error::SwapError;

/// Configuration of a single fixed-price pool.
///
/// Lives at `[POOL_CONFIG_SEED, authority, token_mint]`, so there is at most
/// one pool per (authority, mint) pair. The two custody accounts are derived
/// from this account's own address and are recorded here so `has_one` can
/// tie them back to the pool.
#[account]
pub struct PoolConfig {
    pub config_bump: u8,
    pub token_bump: u8,
    pub native_bump: u8,
    /// Token base units paid out per `NATIVE_UNIT_SCALE` lamports.
    pub price: u64,
    pub is_active: bool,
    /// Lamports parked in the native custody at creation so the PDA stays
    /// rent exempt. Never counted as pool balance.
    pub native_reserve: u64,
    pub token_mint: Pubkey,
    pub pool_token_account: Pubkey,
    pub pool_native_account: Pubkey,
    /// Only this key may withdraw or drain custody balances.
    pub master_authority: Pubkey,
    pub authority: Pubkey,
}

impl PoolConfig {
    pub const LEN: usize = 8 + // discriminator
        1 + // config_bump
        1 + // token_bump
        1 + // native_bump
        8 + // price
        1 + // is_active
        8 + // native_reserve
        32 * 5; // pubkeys

    /// Token units owed for `lamports` at the configured price, rounded down.
    pub fn quote_tokens_out(&self, lamports: u64) -> Result<u64> {
        let tokens = (self.price as u128)
            .checked_mul(lamports as u128)
            .ok_or(SwapError::MathOverflow)?
            / NATIVE_UNIT_SCALE as u128;
        u64::try_from(tokens).map_err(|_| error!(SwapError::MathOverflow))
    }

    /// Portion of the native custody's lamports that belongs to the pool.
    pub fn native_balance(&self, custody_lamports: u64) -> u64 {
        custody_lamports.saturating_sub(self.native_reserve)
    }
}
