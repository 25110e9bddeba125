use crate::TokenRow;
use leptos::prelude::*;
use swapwallet_components::StatCard;
use swapwallet_core::{
    constants::ETH_PRICE_USD,
    utils::{format_fixed, format_usd},
    WalletSignals,
};
use tracing::info;

#[component]
pub fn Portfolio() -> impl IntoView {
    info!("rendering <Portfolio/>");

    on_cleanup(move || {
        info!("cleaning up <Portfolio/>");
    });

    let wallet = use_context::<WalletSignals>().expect("wallet signals context missing!");

    let total_value = Signal::derive(move || format_usd(wallet.portfolio_value()));

    let eth_balance =
        Signal::derive(move || format!("{} ETH", format_fixed(wallet.native_balance.get(), 4)));
    let eth_value = Signal::derive(move || {
        let eth = wallet
            .native_balance
            .get()
            .parse::<f64>()
            .unwrap_or_default();
        format!("≈ {}", format_usd(eth * ETH_PRICE_USD))
    });

    let gas_price = Signal::derive(move || format!("{} Gwei", wallet.gas_price_gwei()));

    view! {
        <div class="tab-content">
            <div class="card">
                <h2>"Portfolio Overview"</h2>
                <div class="stats-grid">
                    <StatCard
                        label="Total Value"
                        value=total_value
                        help=Signal::stored("↗ 2.5% from last week".to_string())
                    />
                    <StatCard label="ETH Balance" value=eth_balance help=eth_value />
                    <StatCard
                        label="Gas Price"
                        value=gas_price
                        help=Signal::stored("Current network fee".to_string())
                    />
                </div>
            </div>

            <div class="card">
                <h2>"Token Balances"</h2>
                <div class="token-list">
                    <For
                        each=move || wallet.token_balances.get()
                        key=|token| (token.address.clone(), token.balance.clone())
                        children=move |token| view! { <TokenRow token /> }
                    />
                </div>
            </div>
        </div>
    }
}
