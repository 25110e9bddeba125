use super::Provider;
use crate::error::Error;
use alloy_primitives::{Address, U256};
use alloy_sol_types::{sol, SolCall};
use tracing::trace;

sol! {
    #[allow(missing_docs)]
    interface IERC20 {
        function balanceOf(address owner) external view returns (uint256);
        function decimals() external view returns (uint8);
        function symbol() external view returns (string);
        function name() external view returns (string);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
    }
}

/// Typed interface to a single ERC-20 token contract.
pub struct Erc20<'a, P: Provider + ?Sized> {
    pub address: Address,
    provider: &'a P,
}

impl<'a, P: Provider + ?Sized> Erc20<'a, P> {
    pub fn new(address: Address, provider: &'a P) -> Self {
        Self { address, provider }
    }

    async fn query<C: SolCall>(&self, call: C) -> Result<C::Return, Error> {
        trace!("{} on {}", C::SIGNATURE, self.address);

        let data = self.provider.call(self.address, call.abi_encode()).await?;

        C::abi_decode_returns(&data, true).map_err(Into::into)
    }

    pub async fn balance_of(&self, owner: Address) -> Result<U256, Error> {
        self.query(IERC20::balanceOfCall { owner })
            .await
            .map(|response| response._0)
    }

    pub async fn decimals(&self) -> Result<u8, Error> {
        self.query(IERC20::decimalsCall {})
            .await
            .map(|response| response._0)
    }

    pub async fn symbol(&self) -> Result<String, Error> {
        self.query(IERC20::symbolCall {})
            .await
            .map(|response| response._0)
    }

    pub async fn name(&self) -> Result<String, Error> {
        self.query(IERC20::nameCall {})
            .await
            .map(|response| response._0)
    }

    pub async fn allowance(&self, owner: Address, spender: Address) -> Result<U256, Error> {
        self.query(IERC20::allowanceCall { owner, spender })
            .await
            .map(|response| response._0)
    }

    /// Submits `approve(spender, amount)` from `owner`. Returns the transaction hash without
    /// waiting for it to be mined.
    pub async fn approve(
        &self,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> Result<String, Error> {
        let call = IERC20::approveCall { spender, amount };

        self.provider
            .send_transaction(owner, self.address, call.abi_encode())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::mock::{MockProvider, MockToken, ALICE, USDC};
    use futures::executor::block_on;

    #[test]
    fn reads_token_metadata() {
        let provider = MockProvider::default().with_token(
            USDC,
            MockToken::new("USDC", "USD Coin", 6).with_balance(ALICE, U256::from(2_500_000u64)),
        );
        let usdc = Erc20::new(USDC, &provider);

        block_on(async {
            assert_eq!(usdc.balance_of(ALICE).await, Ok(U256::from(2_500_000u64)));
            assert_eq!(usdc.decimals().await, Ok(6));
            assert_eq!(usdc.symbol().await.as_deref(), Ok("USDC"));
            assert_eq!(usdc.name().await.as_deref(), Ok("USD Coin"));
        });
    }

    #[test]
    fn approve_updates_allowance() {
        let provider = MockProvider::default().with_token(USDC, MockToken::new("USDC", "USD Coin", 6));
        let usdc = Erc20::new(USDC, &provider);
        let spender = crate::constants::ROUTER;

        block_on(async {
            assert_eq!(usdc.allowance(ALICE, spender).await, Ok(U256::ZERO));

            let hash = usdc
                .approve(ALICE, spender, U256::from(1_000u64))
                .await
                .expect("approve failed");
            assert!(hash.starts_with("0x"));

            assert_eq!(usdc.allowance(ALICE, spender).await, Ok(U256::from(1_000u64)));
        });
    }

    #[test]
    fn call_to_unknown_contract_fails() {
        let provider = MockProvider::default();
        let usdc = Erc20::new(USDC, &provider);

        assert!(block_on(usdc.decimals()).is_err());
    }
}
