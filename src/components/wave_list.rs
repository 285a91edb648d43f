//! Wave history heading and entries.

use leptos::prelude::*;

use crate::components::wave_card::WaveCard;
use crate::state::session::WavesState;

/// "All waves (N):" followed by one card per record, in contract order.
#[component]
pub fn WaveList() -> impl IntoView {
    let waves = expect_context::<RwSignal<WavesState>>();

    let heading = move || format!("All waves ({}):", waves.with(WavesState::count));

    view! {
        <div class="wave-list">
            <div class="wave-list__heading">{heading}</div>
            {move || {
                waves
                    .with(|w| w.waves.clone())
                    .into_iter()
                    .map(|wave| view! { <WaveCard wave=wave/> })
                    .collect_view()
            }}
        </div>
    }
}
