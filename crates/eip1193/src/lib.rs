use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::{debug, trace};
use wasm_bindgen::{closure::Closure, JsCast};
use wasm_bindgen_futures::JsFuture;
use web_sys::{js_sys, wasm_bindgen::JsValue};

mod error;
mod sys;
mod types;

pub use error::{Error, USER_REJECTED_REQUEST};
pub use sys::EthereumProvider;
pub use types::{CallRequest, TransactionReceipt, TransactionRequest};

use types::RequestArguments;

pub const ACCOUNTS_CHANGED: &str = "accountsChanged";
pub const CHAIN_CHANGED: &str = "chainChanged";

pub const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(1);

const NO_PARAMS: [(); 0] = [];

fn injected() -> Option<JsValue> {
    web_sys::window()
        .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str("ethereum")).ok())
        .filter(|ethereum| !ethereum.is_undefined() && !ethereum.is_null())
}

/// Handle to the injected `window.ethereum` provider.
#[derive(Debug, Clone)]
pub struct Ethereum {
    inner: EthereumProvider,
}

impl Ethereum {
    pub fn is_available() -> bool {
        injected().is_some()
    }

    pub fn get() -> Result<Self, Error> {
        injected()
            .map(|ethereum| Self {
                inner: ethereum.unchecked_into(),
            })
            .ok_or(Error::ProviderUnavailable)
    }

    pub fn is_metamask(&self) -> bool {
        self.inner.is_metamask().unwrap_or(false)
    }

    /// Sends a raw JSON-RPC request through the provider.
    pub async fn request<T, P>(&self, method: &str, params: P) -> Result<T, Error>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        trace!("provider request: {method}");

        // Plain objects, not JS Maps, or the provider rejects the arguments.
        let args = RequestArguments { method, params }
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;

        let value = self.inner.request(&args).await.map_err(Error::js)?;

        Ok(serde_wasm_bindgen::from_value(value)?)
    }

    pub async fn request_accounts(&self) -> Result<Vec<String>, Error> {
        self.request("eth_requestAccounts", NO_PARAMS).await
    }

    pub async fn chain_id(&self) -> Result<String, Error> {
        self.request("eth_chainId", NO_PARAMS).await
    }

    pub async fn get_balance(&self, address: &str) -> Result<String, Error> {
        self.request("eth_getBalance", (address, "latest")).await
    }

    pub async fn gas_price(&self) -> Result<String, Error> {
        self.request("eth_gasPrice", NO_PARAMS).await
    }

    pub async fn call(&self, to: &str, data: &str) -> Result<String, Error> {
        let call = CallRequest {
            to: to.to_string(),
            data: data.to_string(),
        };
        self.request("eth_call", (call, "latest")).await
    }

    /// Hands the transaction to the wallet for signing and broadcast. Returns the tx hash.
    pub async fn send_transaction(&self, tx: TransactionRequest) -> Result<String, Error> {
        self.request("eth_sendTransaction", [tx]).await
    }

    pub async fn transaction_receipt(
        &self,
        hash: &str,
    ) -> Result<Option<TransactionReceipt>, Error> {
        self.request("eth_getTransactionReceipt", [hash]).await
    }

    pub async fn wait_for_transaction(&self, hash: &str) -> Result<TransactionReceipt, Error> {
        loop {
            if let Some(receipt) = self.transaction_receipt(hash).await? {
                debug!("{hash} mined in block {:?}", receipt.block_number);
                return Ok(receipt);
            }
            sleep(RECEIPT_POLL_INTERVAL).await;
        }
    }

    pub fn on(&self, event: &'static str, handler: impl FnMut(JsValue) + 'static) -> Subscription {
        let listener = Closure::<dyn FnMut(JsValue)>::new(handler);
        self.inner.on(event, listener.as_ref().unchecked_ref());

        Subscription {
            provider: self.inner.clone(),
            event,
            listener,
        }
    }

    pub fn on_accounts_changed(&self, mut handler: impl FnMut(Vec<String>) + 'static) -> Subscription {
        self.on(ACCOUNTS_CHANGED, move |value| {
            handler(serde_wasm_bindgen::from_value(value).unwrap_or_default())
        })
    }

    pub fn on_chain_changed(&self, mut handler: impl FnMut(String) + 'static) -> Subscription {
        self.on(CHAIN_CHANGED, move |value| {
            handler(value.as_string().unwrap_or_default())
        })
    }
}

/// A provider event listener. Dropping it removes the listener.
pub struct Subscription {
    provider: EthereumProvider,
    event: &'static str,
    listener: Closure<dyn FnMut(JsValue)>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        trace!("removing {} listener", self.event);
        self.provider
            .remove_listener(self.event, self.listener.as_ref().unchecked_ref());
    }
}

pub async fn sleep(duration: Duration) {
    let millis = duration.as_millis().min(i32::MAX as u128) as i32;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis);
        }
    });
    let _ = JsFuture::from(promise).await;
}
