mod erc20;
mod provider;

#[cfg(test)]
pub(crate) mod mock;

pub use erc20::{Erc20, IERC20};
pub use provider::Provider;
