use crate::{constants::usd_price, error::Error};
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Token {
    pub symbol: String,
    pub name: String,
    pub address: String,
    pub decimals: u8,
    #[serde(rename = "logoURI")]
    pub logo_uri: String,
}

impl Token {
    pub fn contract_address(&self) -> Result<Address, Error> {
        self.address.parse::<Address>().map_err(Error::generic)
    }
}

/// A token balance as displayed, with the amount already formatted in whole units.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TokenBalance {
    pub symbol: String,
    pub name: String,
    pub balance: String,
    pub address: String,
    pub decimals: u8,
    pub logo_uri: String,
}

impl TokenBalance {
    /// Placeholder entry used when the on-chain query fails.
    pub fn zero(token: &Token) -> Self {
        Self {
            symbol: token.symbol.clone(),
            name: token.name.clone(),
            balance: "0".to_string(),
            address: token.address.clone(),
            decimals: token.decimals,
            logo_uri: token.logo_uri.clone(),
        }
    }

    pub fn amount(&self) -> f64 {
        self.balance.trim().parse::<f64>().unwrap_or(0.0)
    }

    pub fn usd_value(&self) -> f64 {
        self.amount() * usd_price(&self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOKENS;

    #[test]
    fn zero_balance_keeps_static_metadata() {
        let usdc = &TOKENS[1];
        let balance = TokenBalance::zero(usdc);

        assert_eq!(balance.symbol, "USDC");
        assert_eq!(balance.name, "USD Coin");
        assert_eq!(balance.balance, "0");
        assert_eq!(balance.decimals, 6);
        assert_eq!(balance.address, usdc.address);
        assert_eq!(balance.usd_value(), 0.0);
    }

    #[test]
    fn weth_is_valued_at_eth_price() {
        let mut balance = TokenBalance::zero(&TOKENS[0]);
        balance.balance = "1.5".to_string();
        assert_eq!(balance.usd_value(), 3000.0);
    }

    #[test]
    fn every_listed_token_has_a_valid_address() {
        for token in TOKENS.iter() {
            assert!(token.contract_address().is_ok(), "{}", token.symbol);
        }
    }
}
