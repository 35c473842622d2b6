use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{POOL_CONFIG_SEED, POOL_NATIVE_SEED, POOL_TOKEN_SEED};
use crate::error::SwapError;
use crate::events::TokensSwapped;
use crate::settlement::{self, Custody};
use crate::state::PoolConfig;
use crate::utils::{transfer_native, transfer_tokens};

/// Buys tokens with `lamports` at the pool's fixed price.
///
/// The user pays `lamports` into the native custody and receives
/// `price * lamports / NATIVE_UNIT_SCALE` tokens (rounded down) from the token
/// custody. Both legs are planned before either transfer is issued.
pub fn swap(ctx: Context<Swap>, lamports: u64) -> Result<()> {
    let custody = ctx.accounts.custody();
    let plan = settlement::swap(
        &ctx.accounts.pool_config,
        ctx.accounts.user.lamports(),
        custody,
        lamports,
    )?;
    let expected = plan.apply(custody)?;

    ctx.accounts.collect_native(plan.native_in)?;
    ctx.accounts.pay_tokens(plan.token_out)?;
    ctx.accounts.pool_token_account.reload()?;
    settlement::ensure_settled(expected, ctx.accounts.custody())?;

    msg!(
        "Swapped {} lamports for {} tokens at price {}",
        plan.native_in,
        plan.token_out,
        ctx.accounts.pool_config.price
    );

    emit!(TokensSwapped {
        pool_config: ctx.accounts.pool_config.key(),
        user: ctx.accounts.user.key(),
        lamports_in: plan.native_in,
        tokens_out: plan.token_out,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Swap<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    /// CHECK: only used as a seed to re-derive the pool accounts
    pub authority: UncheckedAccount<'info>,

    pub token_mint: Box<Account<'info, Mint>>,

    #[account(
        seeds = [POOL_CONFIG_SEED, authority.key().as_ref(), token_mint.key().as_ref()],
        bump = pool_config.config_bump,
        has_one = authority @ SwapError::InvalidAuthority,
        has_one = token_mint @ SwapError::InvalidAccount,
        has_one = pool_token_account @ SwapError::InvalidAccount,
        has_one = pool_native_account @ SwapError::InvalidAccount
    )]
    pub pool_config: Box<Account<'info, PoolConfig>>,

    #[account(
        mut,
        seeds = [
            POOL_NATIVE_SEED,
            authority.key().as_ref(),
            token_mint.key().as_ref(),
            pool_config.key().as_ref(),
        ],
        bump = pool_config.native_bump
    )]
    pub pool_native_account: SystemAccount<'info>,

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
        init_if_needed,
        payer = user,
        associated_token::mint = token_mint,
        associated_token::authority = user
    )]
    pub user_token_account: Box<Account<'info, TokenAccount>>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

impl<'info> Swap<'info> {
    fn custody(&self) -> Custody {
        Custody {
            native: self.pool_config.native_balance(self.pool_native_account.lamports()),
            token: self.pool_token_account.amount,
        }
    }

    fn collect_native(&self, lamports: u64) -> Result<()> {
        transfer_native(
            self.user.to_account_info(),
            self.pool_native_account.to_account_info(),
            self.system_program.to_account_info(),
            lamports,
            None,
        )
    }

    fn pay_tokens(&self, amount: u64) -> Result<()> {
        let authority = self.pool_config.authority;
        let mint = self.pool_config.token_mint;
        let bump = [self.pool_config.config_bump];
        let seeds: &[&[u8]] = &[POOL_CONFIG_SEED, authority.as_ref(), mint.as_ref(), &bump];
        let signer_seeds: &[&[&[u8]]] = &[seeds];

        transfer_tokens(
            self.pool_token_account.to_account_info(),
            self.user_token_account.to_account_info(),
            &self.token_mint,
            self.pool_config.to_account_info(),
            self.token_program.to_account_info(),
            amount,
            Some(signer_seeds),
        )
    }
}
