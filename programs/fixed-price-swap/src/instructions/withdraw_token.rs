use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{POOL_CONFIG_SEED, POOL_TOKEN_SEED};
use crate::error::SwapError;
use crate::events::TokenWithdrawn;
use crate::settlement::{self, Custody, Settlement};
use crate::state::PoolConfig;
use crate::utils::transfer_tokens;

/// Pays `amount` tokens from custody to the master authority.
pub fn withdraw_token(ctx: Context<WithdrawToken>, amount: u64) -> Result<()> {
    let plan = settlement::withdraw_token(ctx.accounts.custody(), amount)?;
    ctx.accounts.settle(plan, false)
}

/// Pays the entire token custody to the master authority.
pub fn drain_token(ctx: Context<WithdrawToken>) -> Result<()> {
    let plan = settlement::drain_token(ctx.accounts.custody());
    ctx.accounts.settle(plan, true)
}

#[derive(Accounts)]
pub struct WithdrawToken<'info> {
    #[account(mut)]
    pub master_authority: Signer<'info>,

    /// CHECK: only used as a seed to re-derive the pool accounts
    pub authority: UncheckedAccount<'info>,

    pub token_mint: Box<Account<'info, Mint>>,

    #[account(
        seeds = [POOL_CONFIG_SEED, authority.key().as_ref(), token_mint.key().as_ref()],
        bump = pool_config.config_bump,
        has_one = master_authority @ SwapError::WithdrawPermission,
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
        init_if_needed,
        payer = master_authority,
        associated_token::mint = token_mint,
        associated_token::authority = master_authority
    )]
    pub master_authority_token_account: Box<Account<'info, TokenAccount>>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

impl<'info> WithdrawToken<'info> {
    fn custody(&self) -> Custody {
        Custody {
            native: 0,
            token: self.pool_token_account.amount,
        }
    }

    fn settle(&mut self, plan: Settlement, drained: bool) -> Result<()> {
        let expected = plan.apply(self.custody())?;
        let authority = self.pool_config.authority;
        let mint = self.pool_config.token_mint;
        let bump = [self.pool_config.config_bump];
        let seeds: &[&[u8]] = &[POOL_CONFIG_SEED, authority.as_ref(), mint.as_ref(), &bump];
        let signer_seeds: &[&[&[u8]]] = &[seeds];

        transfer_tokens(
            self.pool_token_account.to_account_info(),
            self.master_authority_token_account.to_account_info(),
            &self.token_mint,
            self.pool_config.to_account_info(),
            self.token_program.to_account_info(),
            plan.token_out,
            Some(signer_seeds),
        )?;
        self.pool_token_account.reload()?;
        settlement::ensure_settled(expected, self.custody())?;

        msg!(
            "Withdrew {} tokens from pool {} to {}",
            plan.token_out,
            self.pool_config.key(),
            self.master_authority_token_account.key()
        );

        emit!(TokenWithdrawn {
            pool_config: self.pool_config.key(),
            recipient: self.master_authority_token_account.key(),
            amount: plan.token_out,
            drained,
        });

        Ok(())
    }
}
