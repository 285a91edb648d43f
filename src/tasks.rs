//! Browser tasks that run the wallet and contract flows against the
//! injected provider and write the outcome into reactive state.
//!
//! ERROR HANDLING
//! ==============
//! This is the only layer that swallows errors: each is logged and, for
//! contract failures, recorded in `WavesState::error` for display.

use leptos::prelude::{GetUntracked, RwSignal, Update};

use crate::actions;
use crate::config::ContractConfig;
use crate::net::injected::InjectedProvider;
use crate::state::session::{SessionState, WavesState};
use crate::util::dom;
use crate::wallet::{self, WalletError};

/// Adopt an already-authorized account on load, then fetch the history.
///
/// The caller claims the wallet with [`SessionState::try_begin_request`]
/// before spawning; the probe outcome releases it.
pub async fn probe_wallet(config: ContractConfig, session: RwSignal<SessionState>, waves: RwSignal<WavesState>) {
    let provider = InjectedProvider::detect();
    let outcome = wallet::probe(provider.as_ref()).await;
    if session.try_update(|s| s.apply_probe(outcome)).unwrap_or(false) {
        refresh_history(config, session, waves).await;
    }
}

/// Ask the wallet for an account; alert when no wallet is installed.
///
/// Claimed and released like [`probe_wallet`].
pub async fn connect_wallet(config: ContractConfig, session: RwSignal<SessionState>, waves: RwSignal<WavesState>) {
    let provider = InjectedProvider::detect();
    let outcome = wallet::connect(provider.as_ref()).await;
    match session.try_update(|s| s.apply_connect(outcome)) {
        Some(Ok(())) => refresh_history(config, session, waves).await,
        Some(Err(WalletError::MissingProvider)) => dom::alert("Get MetaMask!"),
        _ => {}
    }
}

/// Re-read the wave history for the session account.
pub async fn refresh_history(config: ContractConfig, session: RwSignal<SessionState>, waves: RwSignal<WavesState>) {
    let Some(provider) = InjectedProvider::detect() else {
        log::info!("Ethereum object doesn't exist!");
        return;
    };
    let account = session.get_untracked().account;
    match actions::load_history(&provider, &config, account.as_deref()).await {
        Ok(history) => waves.update(|w| w.apply_history(history)),
        Err(e) => {
            log::warn!("failed to load waves: {e}");
            waves.update(|w| w.fail(e.to_string()));
        }
    }
}

/// Submit a wave with `message` and track it until mined.
///
/// The caller claims the wave slot with [`WavesState::try_begin_wave`]
/// before spawning; every exit path here releases it.
pub async fn send_wave(
    config: ContractConfig,
    session: RwSignal<SessionState>,
    waves: RwSignal<WavesState>,
    message: String,
) {
    let Some(provider) = InjectedProvider::detect() else {
        log::info!("Ethereum object doesn't exist!");
        waves.update(WavesState::finish_mining);
        return;
    };
    let account = session.get_untracked().account;
    let result = actions::submit_wave(&provider, &config, account.as_deref(), &message, |hash| {
        waves.update(|w| w.begin_mining(hash));
    })
    .await;
    match result {
        Ok(outcome) => waves.update(|w| {
            w.finish_mining();
            match outcome.history {
                Ok(history) => w.apply_history(history),
                Err(e) => log::warn!("keeping previous waves: {e}"),
            }
        }),
        Err(e) => {
            log::warn!("wave failed: {e}");
            waves.update(|w| w.fail(e.to_string()));
        }
    }
}
