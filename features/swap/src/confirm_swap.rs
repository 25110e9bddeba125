use leptos::{ev, html, prelude::*};
use lucide_leptos::X;
use swapwallet_components::StatusAlert;
use swapwallet_core::{
    types::{SwapForm, SwapStatus, Token},
    utils::format_ether,
    U256,
};
use tracing::info;

#[component]
pub fn ConfirmSwap(
    open: RwSignal<bool>,
    #[prop(into)] form: Signal<SwapForm>,
    #[prop(into)] fee: Signal<U256>,
    #[prop(into)] status: Signal<SwapStatus>,
    #[prop(into)] pending: Signal<bool>,
    on_confirm: impl Fn(ev::MouseEvent) + 'static,
) -> impl IntoView {
    info!("rendering <ConfirmSwap/>");

    let dialog_ref = NodeRef::<html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            match (open.get(), dialog.open()) {
                (true, false) => {
                    let _ = dialog.show_modal();
                }
                (false, true) => dialog.close(),
                _ => (),
            }
        }
    });

    let symbol = |token: Option<Token>| {
        token.map(|token| token.symbol).unwrap_or_default()
    };

    let from = move || form.with(|form| format!("{} {}", form.amount, symbol(form.from.clone())));
    let to = move || form.with(|form| symbol(form.to.clone()));
    let slippage = move || form.with(|form| format!("{}%", form.slippage));
    let gas_fee = move || format!("{} ETH", format_ether(fee.get()));

    view! {
        // Escape closes the native dialog, so keep the signal in sync
        <dialog node_ref=dialog_ref class="modal" on:close=move |_| open.set(false)>
            <div class="modal-header">
                <h3>"Confirm Swap"</h3>
                <button class="close-btn" aria-label="close" on:click=move |_| open.set(false)>
                    <X size=16 />
                </button>
            </div>
            <div class="modal-body">
                <div class="swap-details">
                    <div class="detail-row">
                        <span>"From:"</span>
                        <span class="detail-value">{from}</span>
                    </div>
                    <div class="detail-row">
                        <span>"To:"</span>
                        <span class="detail-value">{to}</span>
                    </div>
                    <div class="detail-row">
                        <span>"Slippage:"</span>
                        <span class="detail-value">{slippage}</span>
                    </div>
                    <div class="detail-row">
                        <span>"Gas Fee:"</span>
                        <span class="detail-value">{gas_fee}</span>
                    </div>
                </div>

                <StatusAlert status />

                <div class="modal-actions">
                    <button class="btn-secondary" on:click=move |_| open.set(false)>
                        "Cancel"
                    </button>
                    <button class="btn-primary" disabled=move || pending.get() on:click=on_confirm>
                        {move || if pending.get() { "⏳ Processing..." } else { "Confirm Swap" }}
                    </button>
                </div>
            </div>
        </dialog>
    }
}
