//! Program-derived addresses of a pool.
//!
//! Every pool account is bound to its owners through its seeds, so "does the
//! re-derived address match" doubles as the authorization check.

use anchor_lang::prelude::*;
use anchor_lang::error::ErrorCode;

use crate::constants::{POOL_CONFIG_SEED, POOL_NATIVE_SEED, POOL_TOKEN_SEED};

/// Derives `[tag, components...]` under `program_id`.
pub fn derive(program_id: &Pubkey, tag: &[u8], components: &[&[u8]]) -> (Pubkey, u8) {
    let mut seeds = Vec::with_capacity(components.len() + 1);
    seeds.push(tag);
    seeds.extend_from_slice(components);
    Pubkey::find_program_address(&seeds, program_id)
}

pub fn pool_config_address(program_id: &Pubkey, authority: &Pubkey, token_mint: &Pubkey) -> (Pubkey, u8) {
    derive(program_id, POOL_CONFIG_SEED, &[authority.as_ref(), token_mint.as_ref()])
}

pub fn pool_token_address(
    program_id: &Pubkey,
    authority: &Pubkey,
    token_mint: &Pubkey,
    pool_config: &Pubkey,
) -> (Pubkey, u8) {
    derive(
        program_id,
        POOL_TOKEN_SEED,
        &[authority.as_ref(), token_mint.as_ref(), pool_config.as_ref()],
    )
}

pub fn pool_native_address(
    program_id: &Pubkey,
    authority: &Pubkey,
    token_mint: &Pubkey,
    pool_config: &Pubkey,
) -> (Pubkey, u8) {
    derive(
        program_id,
        POOL_NATIVE_SEED,
        &[authority.as_ref(), token_mint.as_ref(), pool_config.as_ref()],
    )
}

/// All three addresses of the pool owned by `authority` for `token_mint`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolAddresses {
    pub pool_config: Pubkey,
    pub config_bump: u8,
    pub pool_token_account: Pubkey,
    pub token_bump: u8,
    pub pool_native_account: Pubkey,
    pub native_bump: u8,
}

impl PoolAddresses {
    pub fn derive(program_id: &Pubkey, authority: &Pubkey, token_mint: &Pubkey) -> Self {
        let (pool_config, config_bump) = pool_config_address(program_id, authority, token_mint);
        let (pool_token_account, token_bump) =
            pool_token_address(program_id, authority, token_mint, &pool_config);
        let (pool_native_account, native_bump) =
            pool_native_address(program_id, authority, token_mint, &pool_config);
        Self {
            pool_config,
            config_bump,
            pool_token_account,
            token_bump,
            pool_native_account,
            native_bump,
        }
    }
}

/// Rejects a caller-supplied address that differs from the derived one.
pub fn verify_address(expected: &Pubkey, supplied: &Pubkey) -> Result<()> {
    require_keys_eq!(*expected, *supplied, ErrorCode::ConstraintSeeds);
    Ok(())
}
