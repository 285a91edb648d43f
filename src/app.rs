//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::AppConfig;
use crate::pages::home::HomePage;
use crate::state::session::{SessionState, WavesState};

/// Root application component.
///
/// Provides the contract configuration and shared state to every component.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    provide_context(config.contract);
    provide_context(RwSignal::new(SessionState::default()));
    provide_context(RwSignal::new(WavesState::default()));

    view! {
        <Title text="Wave Portal"/>
        <HomePage/>
    }
}
