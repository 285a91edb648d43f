//! EIP-1193 request seam between the client and a wallet provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every wallet and contract interaction goes through a single
//! `request({ method, params })` call. The browser implementation lives in
//! `net::injected`; tests drive the same code with a scripted provider.
//!
//! ERROR HANDLING
//! ==============
//! Provider rejections are normalized into [`ProviderError`]. The EIP-1193
//! user-rejection code (4001) gets its own variant so flows can tell a
//! declined prompt apart from a failing node.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use async_trait::async_trait;
use serde_json::Value;

/// Non-interactive list of already-authorized accounts.
pub const ETH_ACCOUNTS: &str = "eth_accounts";
/// Interactive authorization prompt.
pub const ETH_REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
pub const ETH_CALL: &str = "eth_call";
pub const ETH_SEND_TRANSACTION: &str = "eth_sendTransaction";
pub const ETH_GET_TRANSACTION_RECEIPT: &str = "eth_getTransactionReceipt";

/// EIP-1193 code for "the user rejected the request".
pub const USER_REJECTED_CODE: i64 = 4001;

/// Error returned by an [`Eip1193`] request.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProviderError {
    /// No injected provider in this environment.
    #[error("no wallet provider available")]
    Unavailable,
    /// The user declined the wallet prompt.
    #[error("request rejected by user: {message}")]
    Rejected { message: String },
    /// The provider or node answered with a JSON-RPC error.
    #[error("provider error {code}: {message}")]
    Rpc { code: i64, message: String },
    /// The call never produced a response (bridge or promise failure).
    #[error("provider transport failed: {0}")]
    Transport(String),
    /// The response arrived but had an unexpected shape.
    #[error("unexpected provider response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Build an error from an EIP-1193 `{ code, message }` rejection payload.
    ///
    /// Payloads without a numeric `code` are treated as transport failures.
    #[must_use]
    pub fn from_rpc_payload(payload: &Value) -> Self {
        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .map_or_else(|| payload.to_string(), str::to_owned);
        match payload.get("code").and_then(Value::as_i64) {
            Some(USER_REJECTED_CODE) => Self::Rejected { message },
            Some(code) => Self::Rpc { code, message },
            None => Self::Transport(message),
        }
    }

    /// Whether the user explicitly declined the request.
    #[must_use]
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// A wallet provider speaking the EIP-1193 `request` protocol.
///
/// Futures are `!Send` because the browser provider is a JS object bound to
/// the main thread.
#[async_trait(?Send)]
pub trait Eip1193 {
    /// Issue `request({ method, params })` and return the decoded result.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] if the provider rejects or fails the call.
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError>;
}

#[async_trait(?Send)]
impl<P: Eip1193 + ?Sized> Eip1193 for &P {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        (**self).request(method, params).await
    }
}

/// Parse an `eth_accounts` / `eth_requestAccounts` result.
///
/// # Errors
///
/// Returns [`ProviderError::InvalidResponse`] unless the value is an array of
/// strings.
pub fn parse_accounts(value: Value) -> Result<Vec<String>, ProviderError> {
    serde_json::from_value(value).map_err(|e| ProviderError::InvalidResponse(format!("accounts: {e}")))
}
