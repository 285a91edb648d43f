//! Typed binding to the deployed wave portal contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! Calls are ABI-encoded locally with `alloy-sol-types` and sent through the
//! wallet's EIP-1193 provider: reads as `eth_call`, the wave as
//! `eth_sendTransaction` signed by the connected account. The provider (not
//! this client) picks gas, nonce and chain.
//!
//! The two known deployments differ in interface; [`Variant`] selects which
//! one the configured address speaks.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns [`ContractError`]. Waiting for a receipt has no
//! timeout: a transaction that never mines keeps its flow suspended.

#[cfg(test)]
#[path = "contract_test.rs"]
mod contract_test;

use alloy_primitives::{Bytes, hex};
use alloy_sol_types::{SolCall, sol};
use serde_json::{Value, json};

use super::provider::{ETH_CALL, ETH_GET_TRANSACTION_RECEIPT, ETH_SEND_TRANSACTION, Eip1193, ProviderError};
use super::types::{TransactionReceipt, WaveRecord};
use crate::config::{ContractConfig, Variant};
use crate::util::timer;

sol! {
    /// Portal deployment that stores a message with every wave.
    interface IWavePortal {
        struct Wave {
            address waver;
            string message;
            uint256 timestamp;
        }

        function wave(string _message) external;
        function getTotalWaves() external view returns (uint256);
        function getAllWaves() external view returns (Wave[] memory);
    }

    /// Earlier deployment: anonymous waves, count only.
    interface IWavePortalClassic {
        function wave() external;
        function getTotalWaves() external view returns (uint256);
    }
}

/// Error returned by [`WavePortal`] operations.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// No session account to send from.
    #[error("wallet not connected")]
    NotConnected,
    /// The configured variant has no such entry point.
    #[error("{0} is not supported by this contract")]
    Unsupported(&'static str),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("failed to decode contract response: {0}")]
    Decode(#[from] alloy_sol_types::Error),
    #[error("unexpected contract response: {0}")]
    InvalidResponse(String),
    /// The transaction was mined but reverted.
    #[error("transaction {0} reverted")]
    Reverted(String),
    #[error("value does not fit in 64 bits")]
    Overflow,
}

impl From<IWavePortal::Wave> for WaveRecord {
    fn from(wave: IWavePortal::Wave) -> Self {
        let address = wave.waver.to_checksum(None);
        match u64::try_from(wave.timestamp) {
            Ok(secs) => Self::from_parts(address, secs, wave.message),
            Err(_) => {
                log::warn!("wave from {address} has out-of-range timestamp {}", wave.timestamp);
                Self { address, timestamp: None, message: wave.message }
            }
        }
    }
}

/// Read/write binding for one portal deployment, signing as one account.
pub struct WavePortal<P> {
    provider: P,
    config: ContractConfig,
    from: String,
}

impl<P: Eip1193> WavePortal<P> {
    /// Bind to the configured contract on behalf of the session account.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NotConnected`] when `account` is `None`.
    pub fn connect(provider: P, config: &ContractConfig, account: Option<&str>) -> Result<Self, ContractError> {
        let from = account.ok_or(ContractError::NotConnected)?.to_owned();
        Ok(Self { provider, config: config.clone(), from })
    }

    /// The account transactions are sent from.
    pub fn account(&self) -> &str {
        &self.from
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    /// Total number of waves recorded on-chain.
    ///
    /// # Errors
    ///
    /// Returns a provider, decode or overflow error.
    pub async fn total_waves(&self) -> Result<u64, ContractError> {
        let raw = self.call(IWavePortal::getTotalWavesCall {}.abi_encode()).await?;
        let total = IWavePortal::getTotalWavesCall::abi_decode_returns(&raw)?;
        u64::try_from(total).map_err(|_| ContractError::Overflow)
    }

    /// Every wave the contract has stored, in contract order.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Unsupported`] for the classic variant, or a
    /// provider/decode error.
    pub async fn all_waves(&self) -> Result<Vec<WaveRecord>, ContractError> {
        if !self.config.variant.has_history() {
            return Err(ContractError::Unsupported("getAllWaves"));
        }
        let raw = self.call(IWavePortal::getAllWavesCall {}.abi_encode()).await?;
        let waves = IWavePortal::getAllWavesCall::abi_decode_returns(&raw)?;
        Ok(waves.into_iter().map(WaveRecord::from).collect())
    }

    /// Submit a wave and wait until it is mined.
    ///
    /// The classic variant takes no message; `message` is ignored there.
    ///
    /// # Errors
    ///
    /// Returns a provider error if submission or polling fails and
    /// [`ContractError::Reverted`] if the mined transaction reverted.
    pub async fn wave(&self, message: &str) -> Result<TransactionReceipt, ContractError> {
        let hash = self.send_wave(message).await?;
        log::info!("Mining... {hash}");
        let receipt = self.wait_for_receipt(&hash).await?;
        log::info!("Mined -- {hash}");
        Ok(receipt)
    }

    /// Submit a wave transaction and return its hash without waiting.
    ///
    /// # Errors
    ///
    /// Returns a provider error, or [`ContractError::InvalidResponse`] if the
    /// provider does not answer with a hash string.
    pub async fn send_wave(&self, message: &str) -> Result<String, ContractError> {
        let data = match self.config.variant {
            Variant::Messages => IWavePortal::waveCall { _message: message.to_owned() }.abi_encode(),
            Variant::Classic => IWavePortalClassic::waveCall {}.abi_encode(),
        };
        let tx = json!({
            "from": self.from,
            "to": self.config.address.to_checksum(None),
            "data": hex::encode_prefixed(data),
        });
        let result = self.provider.request(ETH_SEND_TRANSACTION, json!([tx])).await?;
        match result {
            Value::String(hash) => Ok(hash),
            other => Err(ContractError::InvalidResponse(format!("transaction hash: {other}"))),
        }
    }

    /// Poll for the receipt of `hash` until one is available.
    ///
    /// # Errors
    ///
    /// Returns a provider or decode error, or [`ContractError::Reverted`].
    pub async fn wait_for_receipt(&self, hash: &str) -> Result<TransactionReceipt, ContractError> {
        loop {
            let result = self.provider.request(ETH_GET_TRANSACTION_RECEIPT, json!([hash])).await?;
            if !result.is_null() {
                let receipt: TransactionReceipt = serde_json::from_value(result)
                    .map_err(|e| ContractError::InvalidResponse(format!("receipt: {e}")))?;
                if !receipt.succeeded() {
                    return Err(ContractError::Reverted(hash.to_owned()));
                }
                return Ok(receipt);
            }
            log::debug!("receipt for {hash} not yet available");
            timer::pause(self.config.receipt_poll_ms).await;
        }
    }

    async fn call(&self, data: Vec<u8>) -> Result<Bytes, ContractError> {
        let request = json!({
            "from": self.from,
            "to": self.config.address.to_checksum(None),
            "data": hex::encode_prefixed(data),
        });
        let result = self.provider.request(ETH_CALL, json!([request, "latest"])).await?;
        serde_json::from_value(result).map_err(|e| ContractError::InvalidResponse(format!("call result: {e}")))
    }
}
