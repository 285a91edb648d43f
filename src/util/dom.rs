//! Direct DOM access for the few places that bypass reactive state.
//!
//! Requires a browser environment; native builds get inert fallbacks.

/// Element id of the wave message textarea.
pub const MESSAGE_INPUT_ID: &str = "message";

/// Show a blocking browser alert.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::warn!("alert: {message}");
    }
}

/// Read the current value of the message textarea.
///
/// Returns an empty string if the element is not mounted.
pub fn read_message_input() -> String {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(MESSAGE_INPUT_ID))
            .and_then(|el| el.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
            .map(|el| el.value())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
