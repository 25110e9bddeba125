//! The swap flow: allowance check, approval when short, then the router step.

use crate::{
    error::Error,
    support::Provider,
    types::{SwapForm, SwapStatus},
    wallet::{approve_if_needed, Approval},
};
use alloy_primitives::Address;
use std::future::Future;
use tracing::{debug, error, info, warn};

/// Runs a swap for `owner`, reporting progress through `on_status`.
///
/// An incomplete form is rejected before any status is reported. `settle` stands in for the
/// router call and is only awaited once the allowance covers the amount.
pub async fn execute_swap<P, F>(
    provider: &P,
    owner: Address,
    form: &SwapForm,
    settle: F,
    mut on_status: impl FnMut(SwapStatus),
) -> Result<(), Error>
where
    P: Provider + ?Sized,
    F: Future<Output = ()>,
{
    let Some(token_in) = form.from.as_ref().filter(|_| form.is_complete()) else {
        return Err(Error::IncompleteSwap);
    };

    on_status(SwapStatus::Pending);

    let result = async {
        match approve_if_needed(provider, owner, token_in, &form.amount).await? {
            Approval::Approved(hash) => {
                info!("{} approved for router in {hash}", token_in.symbol);
                on_status(SwapStatus::Approved);
            }
            Approval::AlreadySufficient => debug!("allowance already covers {}", form.amount),
        }

        // TODO: submit exactInputSingle to the router once a quote source is integrated
        settle.await;

        Ok::<(), Error>(())
    }
    .await;

    match &result {
        Ok(()) => on_status(SwapStatus::Success),
        Err(error) => {
            if error.is_user_rejection() {
                warn!("Swap rejected in the wallet");
            } else {
                error!("Error executing swap: {error}");
            }
            on_status(SwapStatus::Failed);
        }
    }

    result
}
