use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::POOL_CONFIG_SEED;
use crate::error::SwapError;
use crate::events::PoolStatusUpdated;
use crate::state::PoolConfig;

/// Opens (`active = true`) or pauses swaps on the pool.
///
/// The config is re-derived from the signer's key, so a signer other than the
/// pool's authority lands on a different address and fails the seeds check.
pub fn update_config(ctx: Context<UpdateConfig>, active: bool) -> Result<()> {
    let pool_config = &mut ctx.accounts.pool_config;
    pool_config.is_active = active;

    msg!("Pool {} active: {}", pool_config.key(), active);

    emit!(PoolStatusUpdated {
        pool_config: pool_config.key(),
        is_active: active,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        constraint = authority.data_is_empty() @ SwapError::InvalidAccount
    )]
    pub authority: Signer<'info>,

    pub token_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [POOL_CONFIG_SEED, authority.key().as_ref(), token_mint.key().as_ref()],
        bump = pool_config.config_bump,
        has_one = authority @ SwapError::InvalidAuthority,
        has_one = token_mint @ SwapError::InvalidAccount
    )]
    pub pool_config: Box<Account<'info, PoolConfig>>,
}
