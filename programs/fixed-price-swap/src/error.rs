use anchor_lang::prelude::*;

/// Business errors surfaced by the pool.
///
/// Clients match on the numeric codes (6000 + position), so variants are
/// append-only.
#[error_code]
pub enum SwapError {
    #[msg("user insufficient funds")]
    InsufficientFunds,

    #[msg("Account invalid type expect")]
    InvalidAccount,

    #[msg("Deactive Pool")]
    DeactivatePool,

    #[msg("Invalid pool authority")]
    InvalidAuthority,

    #[msg("without withdraw permission")]
    WithdrawPermission,

    #[msg("Arithmetic overflow")]
    MathOverflow,
}
