//! One entry of the wave history.

use leptos::prelude::*;

use crate::net::types::WaveRecord;
use crate::util::format::record_time;

#[component]
pub fn WaveCard(wave: WaveRecord) -> impl IntoView {
    let time = record_time(wave.timestamp);

    view! {
        <div class="wave-card">
            <div class="wave-card__row">
                <span class="wave-card__label">"Address:"</span>
                <span class="wave-card__address">{wave.address}</span>
            </div>
            <div class="wave-card__row">
                <span class="wave-card__label">"Time:"</span>
                <span>{time}</span>
            </div>
            <div class="wave-card__row">
                <span class="wave-card__label">"Message:"</span>
                <span>{wave.message}</span>
            </div>
        </div>
    }
}
