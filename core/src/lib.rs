pub mod constants;
mod error;
pub mod state;
pub mod support;
pub mod swap;
pub mod types;
pub mod utils;
pub mod wallet;

pub use constants::{ROUTER, TOKENS, TOKEN_MAP};
pub use error::Error;
pub use state::{TokenMap, WalletSignals};

pub use alloy_primitives::{Address, U256};
