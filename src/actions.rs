//! User-level flows composed from the wallet and contract layers.
//!
//! Each flow runs as one task per user action and returns a single result
//! for the view to apply; none of them touch reactive state directly.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use crate::config::ContractConfig;
use crate::net::contract::{ContractError, WavePortal};
use crate::net::provider::Eip1193;
use crate::net::types::{TransactionReceipt, WaveRecord};

/// What the page shows about past waves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History {
    pub total: u64,
    /// Full record list; `None` when the contract keeps no history.
    pub waves: Option<Vec<WaveRecord>>,
}

/// Result of a mined wave.
///
/// The wave is on chain once a receipt exists, so a failed re-read of the
/// history is carried alongside it instead of failing the wave.
#[derive(Debug)]
pub struct WaveOutcome {
    pub receipt: TransactionReceipt,
    pub history: Result<History, ContractError>,
}

/// Fetch the wave history for the connected account.
///
/// Uses `getAllWaves` where the contract has it and `getTotalWaves`
/// otherwise, so either variant costs a single read.
///
/// # Errors
///
/// Returns [`ContractError::NotConnected`] without an account, or the
/// failing read's error.
pub async fn load_history<P: Eip1193>(
    provider: P,
    config: &ContractConfig,
    account: Option<&str>,
) -> Result<History, ContractError> {
    let portal = WavePortal::connect(provider, config, account)?;
    read_history(&portal).await
}

/// Submit a wave, wait for it to be mined, then re-read the history.
///
/// `on_submitted` runs with the transaction hash as soon as the wallet has
/// accepted the transaction, before mining completes.
///
/// # Errors
///
/// Returns [`ContractError::NotConnected`] without an account, or the
/// error of the first failing step up to and including the receipt wait.
/// Nothing is retried.
pub async fn submit_wave<P: Eip1193>(
    provider: P,
    config: &ContractConfig,
    account: Option<&str>,
    message: &str,
    on_submitted: impl FnOnce(&str),
) -> Result<WaveOutcome, ContractError> {
    let portal = WavePortal::connect(provider, config, account)?;

    let before = portal.total_waves().await?;
    log::info!("Retrieved total wave count... {before}");

    let hash = portal.send_wave(message).await?;
    log::info!("Mining... {hash}");
    on_submitted(&hash);

    let receipt = portal.wait_for_receipt(&hash).await?;
    log::info!("Mined -- {hash}");

    let history = read_history(&portal).await;
    match &history {
        Ok(h) => log::info!("Retrieved total wave count... {}", h.total),
        Err(e) => log::warn!("wave {hash} mined but history refresh failed: {e}"),
    }
    Ok(WaveOutcome { receipt, history })
}

async fn read_history<P: Eip1193>(portal: &WavePortal<P>) -> Result<History, ContractError> {
    if portal.variant().has_history() {
        let waves = portal.all_waves().await?;
        log::debug!("all waves: {}", waves.len());
        Ok(History { total: waves.len() as u64, waves: Some(waves) })
    } else {
        Ok(History { total: portal.total_waves().await?, waves: None })
    }
}
