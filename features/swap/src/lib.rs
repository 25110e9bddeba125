mod confirm_swap;
mod swap;

pub use confirm_swap::ConfirmSwap;
pub use swap::Swap;
