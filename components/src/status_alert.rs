use leptos::prelude::*;
use swapwallet_core::types::SwapStatus;

#[component]
pub fn StatusAlert(#[prop(into)] status: Signal<SwapStatus>) -> impl IntoView {
    move || {
        let status = status.get();
        status.message().map(|message| {
            view! { <div class=format!("alert {}", status.alert_class())>{message}</div> }
        })
    }
}
