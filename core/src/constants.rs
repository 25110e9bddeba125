use crate::types::Token;
use alloy_primitives::{address, Address};
use std::{
    collections::HashMap,
    sync::{Arc, LazyLock},
    time::Duration,
};

// Sepolia. Informational only: a mismatch is logged, never enforced.
pub const CHAIN_ID: &str = "0xaa36a7";

/// Uniswap V3 SwapRouter. Only used as the spender for allowance checks and approvals.
pub const ROUTER: Address = address!("E592427A0AEce92De3Edee1F18E0157C05861564");

// NOTE: USD prices are placeholders until a price feed is wired in.
pub const ETH_PRICE_USD: f64 = 2000.0;
pub const STABLECOINS: [&str; 3] = ["USDC", "USDT", "DAI"];

/// Approximate gas used by a single-hop swap.
pub const SWAP_GAS_UNITS: u64 = 150_000;

pub const SIMULATED_SWAP_DELAY: Duration = Duration::from_secs(3);

pub const DEFAULT_SLIPPAGE: &str = "0.5";

pub static TOKENS: LazyLock<Arc<Vec<Token>>> = LazyLock::new(|| {
    let json = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../app/public/tokens_sepolia.json"
    ));
    let tokens: Vec<Token> = serde_json::from_str(json).expect("Failed to deserialize token list");

    Arc::new(tokens)
});

// Keyed by lower-case address
pub static TOKEN_MAP: LazyLock<Arc<HashMap<String, Token>>> = LazyLock::new(|| {
    let token_map = TOKENS
        .iter()
        .map(|token| (token.address.to_lowercase(), token.clone()))
        .collect();

    Arc::new(token_map)
});

pub static SYMBOL_TO_ADDR: LazyLock<HashMap<String, String>> = LazyLock::new(|| {
    TOKENS
        .iter()
        .map(|token| (token.symbol.clone(), token.address.clone()))
        .collect()
});

pub fn usd_price(symbol: &str) -> f64 {
    match symbol {
        "ETH" | "WETH" => ETH_PRICE_USD,
        symbol if STABLECOINS.contains(&symbol) => 1.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_list_is_in_display_order() {
        let symbols: Vec<&str> = TOKENS.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(symbols, ["WETH", "USDC", "DAI", "USDT"]);
    }

    #[test]
    fn token_map_lookup_ignores_case() {
        let weth = SYMBOL_TO_ADDR.get("WETH").expect("WETH is missing!");
        let token = TOKEN_MAP.get(&weth.to_lowercase()).expect("WETH not in map");
        assert_eq!(token.decimals, 18);
        assert_eq!(TOKEN_MAP.len(), TOKENS.len());
    }

    #[test]
    fn prices() {
        assert_eq!(usd_price("WETH"), 2000.0);
        assert_eq!(usd_price("USDT"), 1.0);
        assert_eq!(usd_price("DAI"), 1.0);
        assert_eq!(usd_price("PEPE"), 0.0);
    }
}
