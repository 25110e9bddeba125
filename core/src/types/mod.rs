mod swap;
mod token;

pub use swap::{SwapForm, SwapStatus, Tab};
pub use token::{Token, TokenBalance};
