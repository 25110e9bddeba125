use super::{Provider, IERC20};
use crate::error::Error;
use alloy_primitives::{address, Address, U256};
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use eip1193::TransactionReceipt;
use std::{cell::RefCell, collections::HashMap};

pub const ALICE: Address = address!("00000000000000000000000000000000000a11ce");
pub const USDC: Address = address!("94a9D9AC8a22534E3FaCa9F4e7F2E2cf85d5E4C8");

#[derive(Clone, Debug, Default)]
pub struct MockToken {
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    pub balances: HashMap<Address, U256>,
}

impl MockToken {
    pub fn new(symbol: &str, name: &str, decimals: u8) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            decimals,
            balances: HashMap::new(),
        }
    }

    pub fn with_balance(mut self, owner: Address, amount: U256) -> Self {
        self.balances.insert(owner, amount);
        self
    }
}

/// In-memory stand-in for the injected provider.
#[derive(Default)]
pub struct MockProvider {
    pub accounts: Vec<String>,
    pub native_balance: U256,
    pub gas_price: U256,
    pub tokens: HashMap<Address, MockToken>,
    pub revert_approvals: bool,
    /// (token, owner, spender) -> amount
    pub allowances: RefCell<HashMap<(Address, Address, Address), U256>>,
    pub sent: RefCell<Vec<(Address, Address, Vec<u8>)>>,
}

impl MockProvider {
    pub fn with_accounts(mut self, accounts: &[Address]) -> Self {
        self.accounts = accounts.iter().map(|a| a.to_string().to_lowercase()).collect();
        self
    }

    pub fn with_token(mut self, address: Address, token: MockToken) -> Self {
        self.tokens.insert(address, token);
        self
    }

    pub fn with_allowance(self, token: Address, owner: Address, spender: Address, amount: U256) -> Self {
        self.allowances
            .borrow_mut()
            .insert((token, owner, spender), amount);
        self
    }

    fn reverted() -> Error {
        Error::Provider(eip1193::Error::Rpc {
            code: -32000,
            message: "execution reverted".to_string(),
        })
    }
}

#[async_trait(?Send)]
impl Provider for MockProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, Error> {
        Ok(self.accounts.clone())
    }

    async fn chain_id(&self) -> Result<String, Error> {
        Ok("0xaa36a7".to_string())
    }

    async fn get_balance(&self, _address: Address) -> Result<U256, Error> {
        Ok(self.native_balance)
    }

    async fn gas_price(&self) -> Result<U256, Error> {
        Ok(self.gas_price)
    }

    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, Error> {
        let token = self.tokens.get(&to).ok_or_else(Self::reverted)?;
        let selector = data.get(..4).ok_or_else(Self::reverted)?;

        if selector == IERC20::balanceOfCall::SELECTOR {
            let call = IERC20::balanceOfCall::abi_decode(&data, true)?;
            let balance = token.balances.get(&call.owner).copied().unwrap_or_default();
            Ok(IERC20::balanceOfCall::abi_encode_returns(&(balance,)))
        } else if selector == IERC20::decimalsCall::SELECTOR {
            Ok(IERC20::decimalsCall::abi_encode_returns(&(token.decimals,)))
        } else if selector == IERC20::symbolCall::SELECTOR {
            Ok(IERC20::symbolCall::abi_encode_returns(&(token.symbol.clone(),)))
        } else if selector == IERC20::nameCall::SELECTOR {
            Ok(IERC20::nameCall::abi_encode_returns(&(token.name.clone(),)))
        } else if selector == IERC20::allowanceCall::SELECTOR {
            let call = IERC20::allowanceCall::abi_decode(&data, true)?;
            let allowance = self
                .allowances
                .borrow()
                .get(&(to, call.owner, call.spender))
                .copied()
                .unwrap_or_default();
            Ok(IERC20::allowanceCall::abi_encode_returns(&(allowance,)))
        } else {
            Err(Self::reverted())
        }
    }

    async fn send_transaction(
        &self,
        from: Address,
        to: Address,
        data: Vec<u8>,
    ) -> Result<String, Error> {
        let call = IERC20::approveCall::abi_decode(&data, true)?;

        if !self.revert_approvals {
            self.allowances
                .borrow_mut()
                .insert((to, from, call.spender), call.amount);
        }

        let mut sent = self.sent.borrow_mut();
        sent.push((from, to, data));

        Ok(format!("0x{:064x}", sent.len()))
    }

    async fn wait_for_transaction(&self, hash: &str) -> Result<TransactionReceipt, Error> {
        let status = if self.revert_approvals { "0x0" } else { "0x1" };

        Ok(TransactionReceipt {
            transaction_hash: hash.to_string(),
            block_number: Some("0x1".to_string()),
            status: Some(status.to_string()),
        })
    }
}
