use leptos::prelude::*;
use swapwallet_core::{
    types::TokenBalance,
    utils::{format_fixed, format_usd},
};

#[component]
pub fn TokenRow(token: TokenBalance) -> impl IntoView {
    let amount = format_fixed(&token.balance, 6);
    let value = format!("≈ {}", format_usd(token.usd_value()));

    view! {
        <div class="token-item">
            <div class="token-info">
                <img class="token-logo" src=token.logo_uri alt=token.symbol.clone() />
                <div class="token-details">
                    <div class="token-symbol">{token.symbol}</div>
                    <div class="token-name">{token.name}</div>
                </div>
            </div>
            <div class="token-balance">
                <div class="balance-amount">{amount}</div>
                <div class="balance-usd">{value}</div>
            </div>
        </div>
    }
}
