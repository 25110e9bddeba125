// The Serialize and Deserialize traits are derived to ensure that Errors can be
// transmitted to or from a server, which is necessary for them to function as Resources.
#[derive(thiserror::Error, serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Generic(String),

    #[error("Token not found in the list!")]
    UnknownToken,

    #[error("Serde Error: {0}")]
    Serde(String),

    #[error("ABI Error: {0}")]
    Abi(String),

    #[error("Provider error: {0}")]
    Provider(eip1193::Error),

    #[error("MetaMask not detected! Please install MetaMask.")]
    ProviderUnavailable,

    #[error("The wallet returned no accounts")]
    NoAccounts,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Transaction {0} failed")]
    TransactionFailed(String),

    #[error("Wallet is not connected!")]
    WalletDisconnected,

    #[error("Please fill in all swap details")]
    IncompleteSwap,
}

impl Error {
    pub fn generic(message: impl ToString) -> Self {
        let message = message.to_string();
        Error::Generic(message)
    }
    pub fn invalid_amount(amount: impl ToString) -> Self {
        Error::InvalidAmount(amount.to_string())
    }
    /// The user dismissed the request in the wallet.
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, Error::Provider(error) if error.is_user_rejection())
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

impl From<eip1193::Error> for Error {
    fn from(error: eip1193::Error) -> Self {
        match error {
            eip1193::Error::ProviderUnavailable => Error::ProviderUnavailable,
            error => Error::Provider(error),
        }
    }
}

impl From<alloy_sol_types::Error> for Error {
    fn from(error: alloy_sol_types::Error) -> Self {
        Error::Abi(error.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Serde(error.to_string())
    }
}
