use serde::{Deserialize, Serialize};
use web_sys::{js_sys, wasm_bindgen::JsValue};

/// EIP-1193 error code for a request the user rejected in the wallet.
pub const USER_REJECTED_REQUEST: i64 = 4001;

#[derive(thiserror::Error, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("No injected Ethereum provider found!")]
    ProviderUnavailable,

    #[error("{0}")]
    Js(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Serialization Error: {0}")]
    Serialization(String),

    #[error("{0}")]
    Generic(String),
}

impl Error {
    pub fn js(value: JsValue) -> Self {
        value.into()
    }
    pub fn generic(value: impl std::fmt::Display) -> Self {
        Self::Generic(value.to_string())
    }
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, Error::Rpc { code, .. } if *code == USER_REJECTED_REQUEST)
    }
}

// Providers reject with a plain object `{ code, message }` rather than an `Error` instance.
impl From<JsValue> for Error {
    fn from(error: JsValue) -> Self {
        let field = |name: &str| js_sys::Reflect::get(&error, &JsValue::from_str(name)).ok();

        let code = field("code").and_then(|code| code.as_f64());
        let message = field("message").and_then(|message| message.as_string());

        match (code, message) {
            (Some(code), Some(message)) => Error::Rpc {
                code: code as i64,
                message,
            },
            (None, Some(message)) => Error::Js(message),
            _ => Error::Js(
                error
                    .as_string()
                    .unwrap_or("unknown JS error".to_string()),
            ),
        }
    }
}

impl From<serde_wasm_bindgen::Error> for Error {
    fn from(error: serde_wasm_bindgen::Error) -> Self {
        let message = error.to_string();
        Error::Serialization(message)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self::Generic(value.to_string())
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Generic(value)
    }
}
