//! The portal page: greeting, wallet connection, wave form and history.

use leptos::prelude::*;

use crate::components::connect_button::ConnectButton;
use crate::components::wave_form::WaveForm;
use crate::components::wave_list::WaveList;
use crate::config::ContractConfig;
use crate::state::session::{SessionState, WavesState};

/// Renders the connect affordance until a session account exists, then the
/// wave form and history. Probes the wallet once on mount; Connect stays
/// disabled until the probe settles.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<ContractConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let waves = expect_context::<RwSignal<WavesState>>();

    #[cfg(feature = "csr")]
    if session.try_update(SessionState::try_begin_request).unwrap_or(false) {
        leptos::task::spawn_local(crate::tasks::probe_wallet(config, session, waves));
    }
    #[cfg(not(feature = "csr"))]
    let _ = (config, waves);

    let connected = move || session.with(SessionState::is_connected);

    view! {
        <div class="portal">
            <div class="portal__body">
                <div class="portal__greeting">
                    <span role="img" aria-label="wave">"👋"</span>
                    <span>"Hey there!"</span>
                </div>
                <div class="portal__intro">
                    "I am Vivian. Connect your Ethereum wallet and wave at me!"
                </div>
                <Show when=connected fallback=|| view! { <ConnectButton/> }>
                    <WaveForm/>
                    <WaveList/>
                </Show>
            </div>
        </div>
    }
}
