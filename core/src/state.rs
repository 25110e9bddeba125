use crate::{
    constants::{TOKENS, TOKEN_MAP},
    error::Error,
    support::Provider,
    types::{Token, TokenBalance},
    utils::shorten_address,
    wallet::{fetch_token_balances, format_gwei, gas_price, native_balance, portfolio_value},
};
use alloy_primitives::{Address, U256};
use leptos::prelude::*;
use std::{collections::HashMap, ops::Deref, sync::Arc};
use tracing::{debug, error};

#[derive(Clone, Debug)]
pub struct TokenMap(pub Arc<HashMap<String, Token>>);

impl TokenMap {
    pub fn new(token_map: Arc<HashMap<String, Token>>) -> Self {
        Self(token_map)
    }

    /// Case-insensitive lookup by contract address.
    pub fn by_address(&self, address: &str) -> Option<&Token> {
        self.0.get(&address.to_lowercase())
    }
}

impl Default for TokenMap {
    fn default() -> Self {
        Self(Arc::clone(&TOKEN_MAP))
    }
}

impl Deref for TokenMap {
    type Target = HashMap<String, Token>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Everything the dashboard knows about the connected wallet.
#[derive(Copy, Clone)]
pub struct WalletSignals {
    pub connected: RwSignal<bool>,
    pub address: RwSignal<Option<Address>>,
    /// Native balance in ether, as formatted by `format_ether`.
    pub native_balance: RwSignal<String>,
    pub token_balances: RwSignal<Vec<TokenBalance>>,
    /// Gas price in wei.
    pub gas_price: RwSignal<Option<U256>>,
}

impl WalletSignals {
    pub fn new() -> Self {
        Self {
            connected: RwSignal::new(false),
            address: RwSignal::new(None),
            native_balance: RwSignal::new("0".to_string()),
            token_balances: RwSignal::new(Vec::new()),
            gas_price: RwSignal::new(None),
        }
    }

    pub fn reset(&self) {
        self.connected.set(false);
        self.address.set(None);
        self.native_balance.set("0".to_string());
        self.token_balances.set(Vec::new());
        self.gas_price.set(None);
    }

    /// Whether results fetched for `address` still belong on screen. False once the wallet has
    /// switched accounts or been disconnected.
    pub fn is_current(&self, address: Address) -> bool {
        self.connected.get_untracked() && self.address.get_untracked() == Some(address)
    }

    fn is_stale(&self, address: Address) -> bool {
        let stale = !self.is_current(address);
        if stale {
            debug!("dropping results for {address}, wallet has moved on");
        }
        stale
    }

    /// Reloads the native balance, token balances and gas price for `address`, in that order.
    /// A gas price failure is only logged.
    pub async fn refresh<P: Provider + ?Sized>(
        &self,
        provider: &P,
        address: Address,
    ) -> Result<(), Error> {
        let balance = native_balance(provider, address).await?;
        if self.is_stale(address) {
            return Ok(());
        }
        self.native_balance.set(balance);

        self.refresh_tokens(provider, address).await;

        match gas_price(provider).await {
            Ok(_) if self.is_stale(address) => (),
            Ok(gas_price) => self.gas_price.set(Some(gas_price)),
            Err(error) => error!("Error fetching gas price: {error}"),
        }

        Ok(())
    }

    pub async fn refresh_tokens<P: Provider + ?Sized>(&self, provider: &P, address: Address) {
        let balances = fetch_token_balances(provider, address, &TOKENS).await;
        if !self.is_stale(address) {
            self.token_balances.set(balances);
        }
    }

    pub fn short_address(&self) -> Option<String> {
        self.address.get().map(shorten_address)
    }

    pub fn portfolio_value(&self) -> f64 {
        self.token_balances.with(|balances| portfolio_value(balances))
    }

    pub fn gas_price_gwei(&self) -> String {
        self.gas_price
            .get()
            .map(format_gwei)
            .unwrap_or_else(|| "0".to_string())
    }
}

impl Default for WalletSignals {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::mock::{MockProvider, MockToken, ALICE, USDC};
    use futures::executor::block_on;

    fn provider() -> MockProvider {
        MockProvider {
            native_balance: U256::from(1_000_000_000_000_000_000u128),
            gas_price: U256::from(2_000_000_000u64),
            ..Default::default()
        }
        .with_token(
            USDC,
            MockToken::new("USDC", "USD Coin", 6).with_balance(ALICE, U256::from(5_000_000u64)),
        )
    }

    fn connected_as(address: Address) -> WalletSignals {
        let wallet = WalletSignals::new();
        wallet.connected.set(true);
        wallet.address.set(Some(address));
        wallet
    }

    #[test]
    fn reset_clears_wallet_state() {
        let owner = Owner::new();
        owner.set();

        let wallet = WalletSignals::new();
        wallet.connected.set(true);
        wallet.address.set(Some(ALICE));
        wallet.native_balance.set("1.0".to_string());
        wallet.gas_price.set(Some(U256::from(3_000_000_000u64)));

        let short = wallet.short_address().map(|address| address.to_lowercase());
        assert_eq!(short.as_deref(), Some("0x0000...11ce"));
        assert_eq!(wallet.gas_price_gwei(), "3.0");

        wallet.reset();

        assert!(!wallet.connected.get());
        assert_eq!(wallet.short_address(), None);
        assert_eq!(wallet.native_balance.get(), "0");
        assert_eq!(wallet.gas_price_gwei(), "0");
    }

    #[test]
    fn results_for_a_previous_account_are_stale() {
        let owner = Owner::new();
        owner.set();

        let wallet = WalletSignals::new();
        assert!(!wallet.is_current(ALICE));

        wallet.connected.set(true);
        wallet.address.set(Some(ALICE));
        assert!(wallet.is_current(ALICE));

        // accountsChanged
        wallet.address.set(Some(USDC));
        assert!(!wallet.is_current(ALICE));
        assert!(wallet.is_current(USDC));

        wallet.reset();
        assert!(!wallet.is_current(USDC));
    }

    #[test]
    fn refresh_loads_the_current_account() {
        let owner = Owner::new();
        owner.set();

        let wallet = connected_as(ALICE);
        assert_eq!(block_on(wallet.refresh(&provider(), ALICE)), Ok(()));

        assert_eq!(wallet.native_balance.get(), "1.0");
        assert_eq!(wallet.gas_price_gwei(), "2.0");
        let balances = wallet.token_balances.get();
        assert_eq!(balances.len(), TOKENS.len());
        assert_eq!(balances[1].balance, "5.0");
    }

    #[test]
    fn refresh_for_a_replaced_account_writes_nothing() {
        let owner = Owner::new();
        owner.set();

        // the user switched to another account while ALICE's balances were loading
        let wallet = connected_as(USDC);
        assert_eq!(block_on(wallet.refresh(&provider(), ALICE)), Ok(()));

        assert_eq!(wallet.native_balance.get(), "0");
        assert!(wallet.token_balances.get().is_empty());
        assert_eq!(wallet.gas_price.get(), None);

        // and a disconnect must not be undone by a late refresh
        let wallet = connected_as(ALICE);
        wallet.reset();
        block_on(wallet.refresh_tokens(&provider(), ALICE));
        assert!(wallet.token_balances.get().is_empty());
    }

    #[test]
    fn portfolio_value_tracks_balances() {
        let owner = Owner::new();
        owner.set();

        let wallet = WalletSignals::new();
        assert_eq!(wallet.portfolio_value(), 0.0);

        let mut balances: Vec<TokenBalance> = TOKENS.iter().map(TokenBalance::zero).collect();
        balances[0].balance = "2".to_string();
        wallet.token_balances.set(balances);

        assert_eq!(wallet.portfolio_value(), 4000.0);
    }

    #[test]
    fn token_lookup_ignores_case() {
        let tokens = TokenMap::default();
        let dai = tokens
            .by_address("0xff34b3d4aee8ddcd6f9afffb6fe49bd371b8a357")
            .expect("DAI is missing!");
        assert_eq!(dai.symbol, "DAI");
    }
}
