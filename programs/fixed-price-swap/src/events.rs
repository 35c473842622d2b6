use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub pool_config: Pubkey,
    pub authority: Pubkey,
    pub master_authority: Pubkey,
    pub token_mint: Pubkey,
    pub price: u64,
}

#[event]
pub struct LiquidityAdded {
    pub pool_config: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
}

#[event]
pub struct TokensSwapped {
    pub pool_config: Pubkey,
    pub user: Pubkey,
    pub lamports_in: u64,
    pub tokens_out: u64,
}

#[event]
pub struct TokenWithdrawn {
    pub pool_config: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub drained: bool,
}

#[event]
pub struct NativeWithdrawn {
    pub pool_config: Pubkey,
    pub recipient: Pubkey,
    pub lamports: u64,
    pub drained: bool,
}

#[event]
pub struct PoolStatusUpdated {
    pub pool_config: Pubkey,
    pub is_active: bool,
}
