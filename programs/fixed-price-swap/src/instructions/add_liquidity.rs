use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{POOL_CONFIG_SEED, POOL_TOKEN_SEED};
use crate::error::SwapError;
use crate::events::LiquidityAdded;
use crate::settlement::{self, Custody};
use crate::state::PoolConfig;
use crate::utils::transfer_tokens;

/// Deposits `amount` tokens into the pool's token custody.
///
/// Open to any signer holding the mint; the pool's activity flag does not
/// apply to deposits.
pub fn add_liquidity(ctx: Context<AddLiquidity>, amount: u64) -> Result<()> {
    let plan = settlement::add_liquidity(ctx.accounts.depositor_token_account.amount, amount)?;
    let expected = plan.apply(ctx.accounts.custody())?;

    transfer_tokens(
        ctx.accounts.depositor_token_account.to_account_info(),
        ctx.accounts.pool_token_account.to_account_info(),
        &ctx.accounts.token_mint,
        ctx.accounts.depositor.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        plan.token_in,
        None,
    )?;
    ctx.accounts.pool_token_account.reload()?;
    settlement::ensure_settled(expected, ctx.accounts.custody())?;

    msg!("Added {} tokens to pool {}", plan.token_in, ctx.accounts.pool_config.key());

    emit!(LiquidityAdded {
        pool_config: ctx.accounts.pool_config.key(),
        depositor: ctx.accounts.depositor.key(),
        amount: plan.token_in,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AddLiquidity<'info> {
    #[account(
        mut,
        constraint = depositor.lamports() > 0 && depositor.data_is_empty() @ SwapError::InvalidAccount
    )]
    pub depositor: Signer<'info>,

    /// CHECK: only used as a seed to re-derive the pool accounts
    pub authority: UncheckedAccount<'info>,

    pub token_mint: Box<Account<'info, Mint>>,

    #[account(
        seeds = [POOL_CONFIG_SEED, authority.key().as_ref(), token_mint.key().as_ref()],
        bump = pool_config.config_bump,
        has_one = authority @ SwapError::InvalidAuthority,
        has_one = token_mint @ SwapError::InvalidAccount,
        has_one = pool_token_account @ SwapError::InvalidAccount
    )]
    pub pool_config: Box<Account<'info, PoolConfig>>,

    #[account(
        mut,
        seeds = [
            POOL_TOKEN_SEED,
            authority.key().as_ref(),
            token_mint.key().as_ref(),
            pool_config.key().as_ref(),
        ],
        bump = pool_config.token_bump,
        token::mint = token_mint,
        token::authority = pool_config
    )]
    pub pool_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = token_mint,
        token::authority = depositor
    )]
    pub depositor_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> AddLiquidity<'info> {
    fn custody(&self) -> Custody {
        Custody {
            native: 0,
            token: self.pool_token_account.amount,
        }
    }
}
