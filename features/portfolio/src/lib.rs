mod portfolio;
mod token_row;

pub use portfolio::Portfolio;
pub use token_row::TokenRow;
