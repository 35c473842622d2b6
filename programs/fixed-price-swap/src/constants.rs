use anchor_lang::prelude::*;

#[constant]
pub const POOL_CONFIG_SEED: &[u8] = b"pool_config_account_seed";

#[constant]
pub const POOL_TOKEN_SEED: &[u8] = b"pool_token_account_seed";

#[constant]
pub const POOL_NATIVE_SEED: &[u8] = b"pool_native_account_seed";

/// Lamports per whole SOL. `PoolConfig::price` is quoted against this unit.
#[constant]
pub const NATIVE_UNIT_SCALE: u64 = 1_000_000_000;
