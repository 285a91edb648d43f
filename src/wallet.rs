//! Wallet discovery and account authorization.
//!
//! SYSTEM CONTEXT
//! ==============
//! `probe` runs once on load and silently adopts an already-authorized
//! account; `connect` runs on the user's click and opens the wallet prompt.
//! Both take the provider as `Option` because the wallet extension may not
//! be installed at all.
//!
//! ERROR HANDLING
//! ==============
//! Both flows return [`WalletError`] instead of logging and swallowing, so
//! the caller decides what the user sees. Neither flow retries.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use serde_json::json;

use crate::net::provider::{ETH_ACCOUNTS, ETH_REQUEST_ACCOUNTS, Eip1193, ProviderError, parse_accounts};

/// Error returned by wallet flows.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("no Ethereum wallet found; install MetaMask")]
    MissingProvider,
    #[error("wallet returned no accounts")]
    NoAccounts,
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Look for an account the wallet has already authorized for this page.
///
/// Never prompts the user. `Ok(None)` means a wallet is present but has
/// not authorized this page yet.
///
/// # Errors
///
/// Returns [`WalletError::MissingProvider`] without a provider, or the
/// provider's error.
pub async fn probe<P: Eip1193>(provider: Option<&P>) -> Result<Option<String>, WalletError> {
    let Some(provider) = provider else {
        log::info!("Make sure you have metamask!");
        return Err(WalletError::MissingProvider);
    };
    log::debug!("wallet provider detected");

    let accounts = parse_accounts(provider.request(ETH_ACCOUNTS, json!([])).await?)?;
    match accounts.into_iter().next() {
        Some(account) => {
            log::info!("Found an authorized account: {account}");
            Ok(Some(account))
        }
        None => {
            log::info!("No authorized account found");
            Ok(None)
        }
    }
}

/// Ask the wallet to authorize this page and return the chosen account.
///
/// # Errors
///
/// Returns [`WalletError::MissingProvider`] without a provider,
/// [`WalletError::NoAccounts`] if the wallet authorizes nothing, or the
/// provider's error (including a user rejection).
pub async fn connect<P: Eip1193>(provider: Option<&P>) -> Result<String, WalletError> {
    let provider = provider.ok_or(WalletError::MissingProvider)?;
    let accounts = parse_accounts(provider.request(ETH_REQUEST_ACCOUNTS, json!([])).await?)?;
    let account = accounts.into_iter().next().ok_or(WalletError::NoAccounts)?;
    log::info!("Connected {account}");
    Ok(account)
}
