//! Wallet session and wave history state.
//!
//! In the Leptos tree both structs live in `RwSignal`s provided via
//! context; the methods here are the only mutations the view performs.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::actions::History;
use crate::net::types::WaveRecord;
use crate::wallet::WalletError;

/// The connected wallet account, if any.
///
/// Set by the load-time probe or an explicit connect. There is no
/// disconnect; a page reload clears it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub account: Option<String>,
    /// A probe or connect request is waiting on the wallet.
    pub requesting: bool,
}

impl SessionState {
    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    /// Claim the wallet for a probe or connect request.
    ///
    /// Returns `false`, leaving the state unchanged, while another request
    /// is still outstanding. The matching `apply_*` call releases it.
    pub fn try_begin_request(&mut self) -> bool {
        if self.requesting {
            return false;
        }
        self.requesting = true;
        true
    }

    /// Adopt `account` as the session account.
    pub fn adopt(&mut self, account: impl Into<String>) {
        self.account = Some(account.into());
    }

    /// Apply the result of the load-time probe.
    ///
    /// Failures are logged and leave the session untouched. Returns `true`
    /// when an account was adopted.
    pub fn apply_probe(&mut self, outcome: Result<Option<String>, WalletError>) -> bool {
        self.requesting = false;
        match outcome {
            Ok(Some(account)) => {
                self.adopt(account);
                true
            }
            Ok(None) => false,
            Err(e) => {
                log::warn!("wallet probe failed: {e}");
                false
            }
        }
    }

    /// Apply the result of an explicit connect.
    ///
    /// On failure the session is left untouched and the error is logged and
    /// handed back so the caller can decide whether the user must be told.
    ///
    /// # Errors
    ///
    /// Returns the connect flow's error unchanged.
    pub fn apply_connect(&mut self, outcome: Result<String, WalletError>) -> Result<(), WalletError> {
        self.requesting = false;
        match outcome {
            Ok(account) => {
                self.adopt(account);
                Ok(())
            }
            Err(e) => {
                log::warn!("wallet connect failed: {e}");
                Err(e)
            }
        }
    }
}

/// Wave history and the status of the current wave, if one is in flight.
///
/// At most one wave runs at a time. `submitting` covers the whole flow from
/// the click until the task settles; `pending_tx` is only set once the
/// wallet has returned a hash.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WavesState {
    pub waves: Vec<WaveRecord>,
    /// Last `getTotalWaves` result.
    pub total: Option<u64>,
    /// A wave flow has started and not yet settled.
    pub submitting: bool,
    /// Hash of a submitted wave that has not been mined yet.
    pub pending_tx: Option<String>,
    /// Last failure shown to the user.
    pub error: Option<String>,
}

impl WavesState {
    /// Apply a history read. A count-only history keeps the current list.
    pub fn apply_history(&mut self, history: History) {
        self.total = Some(history.total);
        if let Some(waves) = history.waves {
            self.waves = waves;
        }
        self.error = None;
    }

    /// Number shown in the "All waves" heading.
    pub fn count(&self) -> u64 {
        self.total.unwrap_or(self.waves.len() as u64)
    }

    /// Claim the single wave slot before any request is made.
    ///
    /// Returns `false`, leaving the state unchanged, while a wave is in
    /// flight.
    pub fn try_begin_wave(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.submitting = true;
        self.error = None;
        true
    }

    /// Mark the claimed wave as submitted and awaiting confirmation.
    pub fn begin_mining(&mut self, hash: impl Into<String>) {
        self.pending_tx = Some(hash.into());
        self.error = None;
    }

    /// Settle the current wave and release the slot.
    pub fn finish_mining(&mut self) {
        self.submitting = false;
        self.pending_tx = None;
    }

    /// Record a failure for display. Settles any in-flight wave.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.finish_mining();
        self.error = Some(message.into());
    }

    pub fn is_mining(&self) -> bool {
        self.pending_tx.is_some()
    }

    /// Whether a wave is anywhere between click and settlement.
    pub fn is_busy(&self) -> bool {
        self.submitting || self.is_mining()
    }
}
