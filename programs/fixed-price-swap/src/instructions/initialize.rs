use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{POOL_CONFIG_SEED, POOL_NATIVE_SEED, POOL_TOKEN_SEED};
use crate::error::SwapError;
use crate::events::PoolInitialized;
use crate::pda::{self, PoolAddresses};
use crate::state::PoolConfig;
use crate::utils::transfer_native;

/// Creates the pool for (authority, token_mint) together with its two custody
/// accounts.
///
/// The config PDA is created with `init`, so a second call for the same pair
/// fails because the account already exists. The native custody is a plain
/// system account; it is topped up to the rent-exempt minimum here and that
/// amount is remembered as `native_reserve`.
pub fn initialize(ctx: Context<Initialize>, price: u64) -> Result<()> {
    let addrs = PoolAddresses::derive(
        ctx.program_id,
        &ctx.accounts.authority.key(),
        &ctx.accounts.token_mint.key(),
    );
    pda::verify_address(&addrs.pool_config, &ctx.accounts.pool_config.key())?;
    pda::verify_address(&addrs.pool_token_account, &ctx.accounts.pool_token_account.key())?;
    pda::verify_address(&addrs.pool_native_account, &ctx.accounts.pool_native_account.key())?;

    let native_reserve = Rent::get()?.minimum_balance(0);
    let top_up = native_reserve.saturating_sub(ctx.accounts.pool_native_account.lamports());
    transfer_native(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.pool_native_account.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        top_up,
        None,
    )?;

    let pool_config = &mut ctx.accounts.pool_config;
    pool_config.config_bump = ctx.bumps.pool_config;
    pool_config.token_bump = ctx.bumps.pool_token_account;
    pool_config.native_bump = ctx.bumps.pool_native_account;
    pool_config.price = price;
    pool_config.is_active = true;
    pool_config.native_reserve = native_reserve;
    pool_config.token_mint = ctx.accounts.token_mint.key();
    pool_config.pool_token_account = ctx.accounts.pool_token_account.key();
    pool_config.pool_native_account = ctx.accounts.pool_native_account.key();
    pool_config.master_authority = ctx.accounts.master_authority.key();
    pool_config.authority = ctx.accounts.authority.key();

    msg!("Pool initialized: {}", pool_config.key());
    msg!("Mint: {}, price: {}", pool_config.token_mint, price);
    msg!("Master authority: {}", pool_config.master_authority);

    emit!(PoolInitialized {
        pool_config: pool_config.key(),
        authority: pool_config.authority,
        master_authority: pool_config.master_authority,
        token_mint: pool_config.token_mint,
        price,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        mut,
        constraint = authority.lamports() > 0 && authority.data_is_empty() @ SwapError::InvalidAccount
    )]
    pub authority: Signer<'info>,

    /// CHECK: recorded as the withdrawal key, never read or signed
    pub master_authority: UncheckedAccount<'info>,

    pub token_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = authority,
        space = PoolConfig::LEN,
        seeds = [POOL_CONFIG_SEED, authority.key().as_ref(), token_mint.key().as_ref()],
        bump
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
        bump
    )]
    pub pool_native_account: SystemAccount<'info>,

    #[account(
        init,
        payer = authority,
        seeds = [
            POOL_TOKEN_SEED,
            authority.key().as_ref(),
            token_mint.key().as_ref(),
            pool_config.key().as_ref(),
        ],
        bump,
        token::mint = token_mint,
        token::authority = pool_config
    )]
    pub pool_token_account: Box<Account<'info, TokenAccount>>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}
