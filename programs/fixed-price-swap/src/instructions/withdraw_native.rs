use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::{POOL_CONFIG_SEED, POOL_NATIVE_SEED};
use crate::error::SwapError;
use crate::events::NativeWithdrawn;
use crate::settlement::{self, Custody, Settlement};
use crate::state::PoolConfig;
use crate::utils::transfer_native;

/// Pays `lamports` from the native custody to the master authority.
pub fn withdraw_native(ctx: Context<WithdrawNative>, lamports: u64) -> Result<()> {
    let plan = settlement::withdraw_native(ctx.accounts.custody(), lamports)?;
    ctx.accounts.settle(plan, false)
}

/// Pays the whole native balance to the master authority. The rent reserve
/// stays behind, so the custody account survives with a zero balance.
pub fn drain_native(ctx: Context<WithdrawNative>) -> Result<()> {
    let plan = settlement::drain_native(ctx.accounts.custody());
    ctx.accounts.settle(plan, true)
}

#[derive(Accounts)]
pub struct WithdrawNative<'info> {
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

    pub system_program: Program<'info, System>,
}

impl<'info> WithdrawNative<'info> {
    fn custody(&self) -> Custody {
        Custody {
            native: self.pool_config.native_balance(self.pool_native_account.lamports()),
            token: 0,
        }
    }

    fn settle(&self, plan: Settlement, drained: bool) -> Result<()> {
        let expected = plan.apply(self.custody())?;
        let authority = self.pool_config.authority;
        let mint = self.pool_config.token_mint;
        let pool_config = self.pool_config.key();
        let bump = [self.pool_config.native_bump];
        let seeds: &[&[u8]] = &[
            POOL_NATIVE_SEED,
            authority.as_ref(),
            mint.as_ref(),
            pool_config.as_ref(),
            &bump,
        ];
        let signer_seeds: &[&[&[u8]]] = &[seeds];

        transfer_native(
            self.pool_native_account.to_account_info(),
            self.master_authority.to_account_info(),
            self.system_program.to_account_info(),
            plan.native_out,
            Some(signer_seeds),
        )?;
        settlement::ensure_settled(expected, self.custody())?;

        msg!(
            "Withdrew {} lamports from pool {} to {}",
            plan.native_out,
            pool_config,
            self.master_authority.key()
        );

        emit!(NativeWithdrawn {
            pool_config,
            recipient: self.master_authority.key(),
            lamports: plan.native_out,
            drained,
        });

        Ok(())
    }
}
