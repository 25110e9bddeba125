//! Wallet operations, written against [`Provider`] so they run the same in the browser and in
//! tests.

use crate::{
    constants::{CHAIN_ID, ROUTER, SWAP_GAS_UNITS},
    error::Error,
    support::{Erc20, Provider},
    types::{Token, TokenBalance},
    utils::{format_ether, format_units, parse_units},
};
use alloy_primitives::{Address, U256};
use tracing::{debug, error, info, warn};

const GWEI_DECIMALS: u8 = 9;

#[derive(Debug, Clone, PartialEq)]
pub enum Approval {
    AlreadySufficient,
    Approved(String),
}

/// Requests access to the wallet and returns the first account.
pub async fn connect<P: Provider + ?Sized>(provider: &P) -> Result<Address, Error> {
    let accounts = provider.request_accounts().await?;
    let account = accounts.first().ok_or(Error::NoAccounts)?;

    let address = account.parse::<Address>().map_err(Error::generic)?;
    info!("connected as {address}");

    match provider.chain_id().await {
        Ok(chain_id) if chain_id.eq_ignore_ascii_case(CHAIN_ID) => {}
        Ok(chain_id) => warn!("wallet is on chain {chain_id}, expected {CHAIN_ID}"),
        Err(error) => warn!("could not read chain id: {error}"),
    }

    Ok(address)
}

pub async fn native_balance<P: Provider + ?Sized>(
    provider: &P,
    address: Address,
) -> Result<String, Error> {
    provider.get_balance(address).await.map(format_ether)
}

async fn token_balance<P: Provider + ?Sized>(
    provider: &P,
    owner: Address,
    token: &Token,
) -> Result<TokenBalance, Error> {
    let contract = Erc20::new(token.contract_address()?, provider);

    let (raw_balance, decimals, symbol, name) = futures::try_join!(
        contract.balance_of(owner),
        contract.decimals(),
        contract.symbol(),
        contract.name(),
    )?;

    Ok(TokenBalance {
        symbol,
        name,
        balance: format_units(raw_balance, decimals),
        address: token.address.clone(),
        decimals,
        logo_uri: token.logo_uri.clone(),
    })
}

/// Queries each token in order. A token whose query fails is reported with a zero balance
/// and its static metadata, so the list always has one entry per token.
pub async fn fetch_token_balances<P: Provider + ?Sized>(
    provider: &P,
    owner: Address,
    tokens: &[Token],
) -> Vec<TokenBalance> {
    let mut balances = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token_balance(provider, owner, token).await {
            Ok(balance) => balances.push(balance),
            Err(error) => {
                error!("Error fetching {} balance: {error}", token.symbol);
                balances.push(TokenBalance::zero(token));
            }
        }
    }

    balances
}

pub async fn gas_price<P: Provider + ?Sized>(provider: &P) -> Result<U256, Error> {
    provider.gas_price().await
}

pub fn format_gwei(wei: U256) -> String {
    format_units(wei, GWEI_DECIMALS)
}

/// Fee shown for a swap, in wei. A flat constant; the live gas price is display-only.
pub fn estimate_swap_fee() -> U256 {
    U256::from(SWAP_GAS_UNITS)
}

/// Makes sure the router may spend `amount` of `token` on behalf of `owner`, approving exactly
/// that amount if the current allowance is short.
pub async fn approve_if_needed<P: Provider + ?Sized>(
    provider: &P,
    owner: Address,
    token: &Token,
    amount: &str,
) -> Result<Approval, Error> {
    let amount = parse_units(amount, token.decimals)?;
    let contract = Erc20::new(token.contract_address()?, provider);

    let allowance = contract.allowance(owner, ROUTER).await?;
    debug!("{} allowance for router: {allowance}, need {amount}", token.symbol);

    if allowance >= amount {
        return Ok(Approval::AlreadySufficient);
    }

    let hash = contract.approve(owner, ROUTER, amount).await?;
    info!("approve {} submitted: {hash}", token.symbol);

    let receipt = provider.wait_for_transaction(&hash).await?;
    if !receipt.is_success() {
        return Err(Error::TransactionFailed(hash));
    }

    Ok(Approval::Approved(hash))
}

pub fn portfolio_value(balances: &[TokenBalance]) -> f64 {
    balances.iter().map(TokenBalance::usd_value).sum()
}
