use leptos::prelude::*;
use tracing::info;

#[component]
pub fn History() -> impl IntoView {
    info!("rendering <History/>");

    view! {
        <div class="tab-content">
            <div class="card">
                <h2>"Transaction History"</h2>
                <p class="placeholder-text">
                    "Transaction history will be displayed here using Etherscan API"
                </p>
            </div>
        </div>
    }
}
