use crate::ConfirmSwap;
use codee::string::FromToStringCodec;
use eip1193::{sleep, Ethereum};
use leptos::{ev, html, prelude::*, task::spawn_local};
use leptos_router::{hooks::query_signal_with_options, NavigateOptions};
use leptos_use::storage::use_local_storage;
use lucide_leptos::ArrowDownUp;
use swapwallet_core::{
    constants::{DEFAULT_SLIPPAGE, SIMULATED_SWAP_DELAY, TOKENS},
    swap::execute_swap,
    types::{SwapForm, SwapStatus, Token},
    utils::{alert, format_ether},
    wallet::estimate_swap_fee,
    Error, TokenMap, WalletSignals, U256,
};
use tracing::{debug, info};

async fn run_swap(
    form: SwapForm,
    wallet: WalletSignals,
    status: RwSignal<SwapStatus>,
) -> Result<(), Error> {
    let (ethereum, owner) = match (Ethereum::get(), wallet.address.get_untracked()) {
        (Ok(ethereum), Some(owner)) => (ethereum, owner),
        (Err(error), _) => {
            status.set(SwapStatus::Failed);
            return Err(error.into());
        }
        (_, None) => {
            status.set(SwapStatus::Failed);
            return Err(Error::WalletDisconnected);
        }
    };

    execute_swap(
        &ethereum,
        owner,
        &form,
        sleep(SIMULATED_SWAP_DELAY),
        |next| status.set(next),
    )
    .await?;

    spawn_local(async move { wallet.refresh_tokens(&ethereum, owner).await });

    Ok(())
}

#[component]
pub fn Swap() -> impl IntoView {
    info!("rendering <Swap/>");

    on_cleanup(move || {
        info!("cleaning up <Swap/>");
    });

    let wallet = use_context::<WalletSignals>().expect("wallet signals context missing!");
    let token_map = use_context::<TokenMap>().expect("tokens context missing!");
    let token_map = StoredValue::new(token_map);

    // prevents scrolling to the top of the page each time a query param changes
    let nav_options = NavigateOptions {
        scroll: false,
        ..Default::default()
    };

    let (token_from, set_token_from) =
        query_signal_with_options::<String>("from", nav_options.clone());
    let (token_to, set_token_to) = query_signal_with_options::<String>("to", nav_options);

    let lookup = move |address: Option<String>, fallback: usize| -> Option<Token> {
        address
            .and_then(|address| token_map.with_value(|map| map.by_address(&address).cloned()))
            .or_else(|| TOKENS.get(fallback).cloned())
    };

    let from_info = Signal::derive(move || lookup(token_from.get(), 0));
    let to_info = Signal::derive(move || lookup(token_to.get(), 1));

    let (amount, set_amount) = signal(String::default());

    // slippage is a percentage, kept as typed
    let (slippage, set_slippage, _) =
        use_local_storage::<String, FromToStringCodec>("swap_slippage");

    if slippage.get_untracked().is_empty() {
        set_slippage.set(DEFAULT_SLIPPAGE.to_string());
    }

    let form = Memo::new(move |_| SwapForm {
        from: from_info.get(),
        to: to_info.get(),
        amount: amount.get(),
        slippage: slippage.get(),
    });

    let (estimated_fee, set_estimated_fee) = signal(U256::ZERO);
    let show_modal = RwSignal::new(false);
    let status = RwSignal::new(SwapStatus::Idle);

    let estimate_fee = move |_: ev::FocusEvent| {
        if !form.with_untracked(SwapForm::is_complete) {
            return;
        }
        let fee = estimate_swap_fee();
        debug!("estimated swap fee: {fee} wei");
        set_estimated_fee.set(fee);
    };

    let flip_tokens = move |_: ev::MouseEvent| {
        let mut flipped = form.get_untracked();
        flipped.flip();
        set_token_from.set(flipped.from.map(|token| token.address));
        set_token_to.set(flipped.to.map(|token| token.address));
    };

    // --

    let select_from_ref = NodeRef::<html::Select>::new();
    let select_to_ref = NodeRef::<html::Select>::new();

    Effect::new(move || {
        if let (Some(token), Some(select)) = (from_info.get(), select_from_ref.get()) {
            select.set_value(&token.address)
        }
    });
    Effect::new(move || {
        if let (Some(token), Some(select)) = (to_info.get(), select_to_ref.get()) {
            select.set_value(&token.address)
        }
    });

    let swap: Action<SwapForm, Result<(), Error>, LocalStorage> =
        Action::new_local(move |form: &SwapForm| {
            let form = form.clone();

            async move {
                run_swap(form, wallet, status).await.inspect_err(|error| {
                    if let Error::IncompleteSwap = error {
                        alert(error.to_string());
                    }
                })
            }
        });

    let review_swap = move |_: ev::MouseEvent| {
        status.set(SwapStatus::Idle);
        show_modal.set(true);
    };

    let confirm_swap = move |_: ev::MouseEvent| {
        _ = swap.dispatch(form.get_untracked());
    };

    let token_options = move || {
        TOKENS
            .iter()
            .map(|token| {
                view! { <option value=token.address.clone()>{token.symbol.clone()}</option> }
            })
            .collect_view()
    };

    view! {
        <div class="tab-content">
            <div class="card swap-card">
                <h2>"Token Swap"</h2>
                <div class="swap-form">
                    <div class="form-group">
                        <label for="swap-from">"From"</label>
                        <div class="input-group">
                            <select
                                node_ref=select_from_ref
                                title="Select token to sell"
                                on:change=move |ev| set_token_from.set(Some(event_target_value(&ev)))
                            >
                                {token_options}
                            </select>
                            <input
                                id="swap-from"
                                type="number"
                                placeholder="0.0"
                                autocomplete="off"
                                prop:value=move || amount.get()
                                on:input=move |ev| set_amount.set(event_target_value(&ev))
                                on:blur=estimate_fee
                            />
                        </div>
                    </div>

                    <button
                        type="button"
                        class="swap-arrow"
                        aria-label="change swap direction"
                        on:click=flip_tokens
                    >
                        <ArrowDownUp size=15 />
                    </button>

                    <div class="form-group">
                        <label>"To"</label>
                        <select
                            node_ref=select_to_ref
                            title="Select token to buy"
                            on:change=move |ev| set_token_to.set(Some(event_target_value(&ev)))
                        >
                            {token_options}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="swap-slippage">"Slippage Tolerance (%)"</label>
                        <input
                            id="swap-slippage"
                            type="number"
                            placeholder=DEFAULT_SLIPPAGE
                            prop:value=move || slippage.get()
                            on:input=move |ev| set_slippage.set(event_target_value(&ev))
                        />
                    </div>

                    <Show when=move || !estimated_fee.get().is_zero()>
                        <div class="alert info">
                            "⚠️ Estimated Gas: " {move || format_ether(estimated_fee.get())} " ETH"
                        </div>
                    </Show>

                    <button
                        class="swap-btn"
                        disabled=move || !form.with(SwapForm::is_complete)
                        on:click=review_swap
                    >
                        "Review Swap"
                    </button>
                </div>
            </div>
        </div>
        <ConfirmSwap
            open=show_modal
            form=form
            fee=estimated_fee
            status=status
            pending=swap.pending()
            on_confirm=confirm_swap
        />
    }
}
