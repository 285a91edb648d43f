//! Message box and wave button for a connected session.
//!
//! The message is read from the `#message` textarea at click time rather
//! than mirrored into a signal on every keystroke.

use leptos::prelude::*;

use crate::config::ContractConfig;
use crate::state::session::{SessionState, WavesState};
use crate::util::dom::{self, MESSAGE_INPUT_ID};
use crate::util::format::short_address;

#[component]
pub fn WaveForm() -> impl IntoView {
    let config = expect_context::<ContractConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let waves = expect_context::<RwSignal<WavesState>>();
    let takes_message = config.variant.has_history();

    let busy = move || waves.with(WavesState::is_busy);

    let on_wave = move |_| {
        if !waves.try_update(WavesState::try_begin_wave).unwrap_or(false) {
            return;
        }
        let message = if takes_message { dom::read_message_input() } else { String::new() };
        log::info!("message {message}");

        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(crate::tasks::send_wave(config.clone(), session, waves, message));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&config, session);
            waves.update(WavesState::finish_mining);
        }
    };

    let status = move || {
        waves.with(|w| {
            if let Some(hash) = &w.pending_tx {
                Some(format!("Mining {}...", short_address(hash)))
            } else {
                w.error.as_ref().map(|e| format!("Something went wrong: {e}"))
            }
        })
    };

    view! {
        <div class="wave-form">
            <Show when=move || takes_message>
                <div class="wave-form__field">
                    <label for=MESSAGE_INPUT_ID class="wave-form__label">"Message:"</label>
                    <textarea name="message" id=MESSAGE_INPUT_ID cols="30" class="wave-form__input"></textarea>
                </div>
            </Show>
            <button class="wave-button" on:click=on_wave disabled=busy>
                "Wave at Me"
            </button>
            <Show when=move || status().is_some()>
                <p class="wave-form__status">{move || status().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
