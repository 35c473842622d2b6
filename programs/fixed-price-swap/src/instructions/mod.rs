pub mod initialize;
pub mod add_liquidity;
pub mod swap;
pub mod withdraw_token;
pub mod withdraw_native;
pub mod update_config;

pub use initialize::*;
pub use add_liquidity::*;
pub use swap::*;
pub use withdraw_token::*;
pub use withdraw_native::*;
pub use update_config::*;
