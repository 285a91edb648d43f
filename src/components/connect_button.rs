//! Button that asks the wallet to authorize this page.

use leptos::prelude::*;

use crate::config::ContractConfig;
use crate::state::session::{SessionState, WavesState};

/// Shown while no account is connected. Disabled while the wallet is
/// already answering a probe or connect.
#[component]
pub fn ConnectButton() -> impl IntoView {
    let config = expect_context::<ContractConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let waves = expect_context::<RwSignal<WavesState>>();

    let requesting = move || session.with(|s| s.requesting);

    let on_connect = move |_| {
        if !session.try_update(SessionState::try_begin_request).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(crate::tasks::connect_wallet(config.clone(), session, waves));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&config, waves);
            session.update(|s| s.requesting = false);
        }
    };

    view! {
        <button class="wave-button" on:click=on_connect disabled=requesting>
            "Connect Wallet"
        </button>
    }
}
