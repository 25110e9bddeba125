use crate::{error::Error, utils::parse_quantity};
use alloy_primitives::{hex, Address, U256};
use async_trait::async_trait;
use eip1193::{Ethereum, TransactionReceipt, TransactionRequest};

/// The subset of the injected provider API the wallet needs.
#[async_trait(?Send)]
pub trait Provider {
    async fn request_accounts(&self) -> Result<Vec<String>, Error>;

    async fn chain_id(&self) -> Result<String, Error>;

    /// Native balance in wei.
    async fn get_balance(&self, address: Address) -> Result<U256, Error>;

    /// Gas price in wei.
    async fn gas_price(&self) -> Result<U256, Error>;

    /// Read-only contract call. Returns the raw ABI-encoded result.
    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, Error>;

    /// Asks the wallet to sign and broadcast. Returns the transaction hash.
    async fn send_transaction(
        &self,
        from: Address,
        to: Address,
        data: Vec<u8>,
    ) -> Result<String, Error>;

    async fn wait_for_transaction(&self, hash: &str) -> Result<TransactionReceipt, Error>;
}

#[async_trait(?Send)]
impl Provider for Ethereum {
    async fn request_accounts(&self) -> Result<Vec<String>, Error> {
        Ok(Ethereum::request_accounts(self).await?)
    }

    async fn chain_id(&self) -> Result<String, Error> {
        Ok(Ethereum::chain_id(self).await?)
    }

    async fn get_balance(&self, address: Address) -> Result<U256, Error> {
        let balance = Ethereum::get_balance(self, &address.to_string()).await?;
        parse_quantity(&balance)
    }

    async fn gas_price(&self) -> Result<U256, Error> {
        let gas_price = Ethereum::gas_price(self).await?;
        parse_quantity(&gas_price)
    }

    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, Error> {
        let result = Ethereum::call(self, &to.to_string(), &hex::encode_prefixed(data)).await?;
        hex::decode(&result).map_err(Error::generic)
    }

    async fn send_transaction(
        &self,
        from: Address,
        to: Address,
        data: Vec<u8>,
    ) -> Result<String, Error> {
        let tx = TransactionRequest {
            from: from.to_string(),
            to: to.to_string(),
            data: hex::encode_prefixed(data),
            value: None,
        };

        Ok(Ethereum::send_transaction(self, tx).await?)
    }

    async fn wait_for_transaction(&self, hash: &str) -> Result<TransactionReceipt, Error> {
        Ok(Ethereum::wait_for_transaction(self, hash).await?)
    }
}
