use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Mint, TransferChecked};

/// Moves lamports through the System Program. `signer_seeds` is required when
/// `from` is a PDA of this program.
pub fn transfer_native<'info>(
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    lamports: u64,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    if lamports == 0 {
        return Ok(());
    }

    let cpi_accounts = system_program::Transfer { from, to };
    let cpi_ctx = match signer_seeds {
        Some(seeds) => CpiContext::new_with_signer(system_program, cpi_accounts, seeds),
        None => CpiContext::new(system_program, cpi_accounts),
    };
    system_program::transfer(cpi_ctx, lamports)
}

/// Moves SPL tokens with `transfer_checked`. `signer_seeds` is required when
/// `authority` is a PDA of this program.
pub fn transfer_tokens<'info>(
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    mint: &Account<'info, Mint>,
    authority: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let cpi_accounts = TransferChecked {
        from,
        mint: mint.to_account_info(),
        to,
        authority,
    };
    let cpi_ctx = match signer_seeds {
        Some(seeds) => CpiContext::new_with_signer(token_program, cpi_accounts, seeds),
        None => CpiContext::new(token_program, cpi_accounts),
    };
    token::transfer_checked(cpi_ctx, amount, mint.decimals)
}
