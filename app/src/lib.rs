use codee::string::FromToStringCodec;
use eip1193::Ethereum;
use leptos::{ev::MouseEvent, prelude::*, task::spawn_local};
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router_macro::path;
use leptos_use::storage::use_local_storage;
use lucide_leptos::Power;
use send_wrapper::SendWrapper;
use swapwallet_components::LoadingModal;
use swapwallet_core::{utils::alert, wallet, Address, Error, TokenMap, WalletSignals, TOKEN_MAP};
use swapwallet_portfolio::Portfolio;
use swapwallet_swap::Swap;
use tracing::{debug, error, info, warn};

mod routes;

use routes::{history::History, nav::Nav};

async fn connect_wallet(wallet: WalletSignals) -> Result<(), Error> {
    let ethereum = Ethereum::get()?;
    debug!("MetaMask provider?: {}", ethereum.is_metamask());

    let address = wallet::connect(&ethereum).await?;
    wallet.address.set(Some(address));
    wallet.connected.set(true);

    wallet.refresh(&ethereum, address).await
}

fn spawn_refresh(wallet: WalletSignals, address: Address) {
    spawn_local(async move {
        let result = match Ethereum::get() {
            Ok(ethereum) => wallet.refresh(&ethereum, address).await,
            Err(error) => Err(error.into()),
        };
        if let Err(error) = result {
            error!("Error refreshing wallet: {error}");
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    info!("rendering <App/>");

    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Global Contexts

    provide_context(WalletSignals::new());
    provide_context(TokenMap::new(TOKEN_MAP.clone()));

    let wallet = use_context::<WalletSignals>().expect("wallet signals context missing!");
    let token_map = use_context::<TokenMap>().expect("tokens context missing!");

    debug!("{} known tokens", token_map.len());

    let (dark_mode, set_dark_mode, _) = use_local_storage::<bool, FromToStringCodec>("dark_mode");

    Effect::new(move |_| {
        let connected = wallet.connected.get();
        let address = wallet.address.get();
        debug!("\nWallet connected?: {connected}\nAddress: {address:?}")
    });

    // Event Listeners

    if let Ok(ethereum) = Ethereum::get() {
        let accounts_changed = ethereum.on_accounts_changed(move |accounts| {
            warn!("Accounts changed in the wallet. Refetching the account info.");
            match accounts.first().and_then(|account| account.parse::<Address>().ok()) {
                Some(address) if wallet.connected.get_untracked() => {
                    wallet.address.set(Some(address));
                    spawn_refresh(wallet, address);
                }
                Some(_) => (),
                None => wallet.reset(),
            }
        });
        let chain_changed = ethereum.on_chain_changed(move |chain_id| {
            warn!("Wallet switched to chain {chain_id}. Balances may be from a different network.");
            if let Some(address) = wallet.address.get_untracked() {
                spawn_refresh(wallet, address);
            }
        });

        let subscriptions = SendWrapper::new((accounts_changed, chain_changed));

        on_cleanup(move || {
            info!("cleaning up <App/>");
            drop(subscriptions)
        });
    }

    // Actions

    let connect_action: Action<(), Result<(), Error>, LocalStorage> =
        Action::new_local(move |_: &()| async move {
            if !Ethereum::is_available() {
                alert(Error::ProviderUnavailable.to_string());
                return Err(Error::ProviderUnavailable);
            }

            debug!("Trying to connect the wallet...");
            connect_wallet(wallet).await.inspect_err(|error| {
                if error.is_user_rejection() {
                    warn!("Connection request rejected in the wallet");
                } else {
                    error!("Error connecting wallet: {error}");
                }
                alert("Failed to connect wallet");
            })
        });

    // on:click handlers

    let connect = move |_: MouseEvent| {
        _ = connect_action.dispatch(());
    };

    let disconnect = move |_: MouseEvent| {
        info!("Disconnecting wallet");
        wallet.reset();
    };

    let toggle_dark_mode = move |_| set_dark_mode.set(!dark_mode.get_untracked());

    view! {
        <Title text="SwapWallet Pro" />
        <Router>
            <div class=move || if dark_mode.get() { "app dark" } else { "app light" }>
                <div class="container">
                    <header class="header">
                        <h1 class="title">"SwapWallet Pro"</h1>
                        <div class="header-controls">
                            <label class="dark-mode-toggle">
                                <input
                                    type="checkbox"
                                    prop:checked=move || dark_mode.get()
                                    on:change=toggle_dark_mode
                                />
                                "Dark Mode"
                            </label>
                            <Show
                                when=move || wallet.connected.get()
                                fallback=move || {
                                    view! {
                                        <button
                                            class="connect-btn"
                                            on:click=connect
                                            disabled=connect_action.pending()
                                        >
                                            {move || {
                                                if connect_action.pending().get() {
                                                    "Connecting..."
                                                } else {
                                                    "Connect Wallet"
                                                }
                                            }}
                                        </button>
                                    }
                                }
                            >
                                <div class="connected-info">
                                    <span class="status-badge">"Connected"</span>
                                    <span class="address">{move || wallet.short_address()}</span>
                                    <button
                                        class="disconnect-btn"
                                        title="Disconnect"
                                        on:click=disconnect
                                    >
                                        <Power size=14 />
                                    </button>
                                </div>
                            </Show>
                        </div>
                    </header>
                    <Show when=move || wallet.connected.get()>
                        <main class="main-content">
                            <Nav />
                            <Routes fallback=|| "This page could not be found.">
                                <Route path=path!("/") view=Portfolio />
                                <Route path=path!("/swap") view=Swap />
                                <Route path=path!("/history") view=History />
                            </Routes>
                        </main>
                    </Show>
                </div>
            </div>
            <LoadingModal when=connect_action.pending() message="Requesting Connection" />
        </Router>
    }
}
