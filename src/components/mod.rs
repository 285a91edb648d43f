//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the wallet and wave surfaces while reading shared state
//! from Leptos context providers.

pub mod connect_button;
pub mod wave_card;
pub mod wave_form;
pub mod wave_list;
