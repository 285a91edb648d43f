//! EIP-1193 provider backed by the browser's injected `window.ethereum`.
//!
//! Browser-only; compiled with the `csr` feature.

use async_trait::async_trait;
use js_sys::{Function, JSON, Object, Promise, Reflect};
use serde_json::{Value, json};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::provider::{Eip1193, ProviderError};

/// Handle to the wallet object a browser extension injected into the page.
pub struct InjectedProvider {
    ethereum: Object,
}

impl InjectedProvider {
    /// Look up `window.ethereum`. Returns `None` when no wallet is installed.
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
        if ethereum.is_undefined() || ethereum.is_null() {
            return None;
        }
        ethereum.dyn_into::<Object>().ok().map(|ethereum| Self { ethereum })
    }
}

#[async_trait(?Send)]
impl Eip1193 for InjectedProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        let payload = json!({ "method": method, "params": params });
        let args = JSON::parse(&payload.to_string()).map_err(|e| ProviderError::Transport(format!("{e:?}")))?;

        let request = Reflect::get(&self.ethereum, &JsValue::from_str("request"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or_else(|| ProviderError::Transport("ethereum.request is not a function".to_owned()))?;

        let pending = request.call1(&self.ethereum, &args).map_err(|e| rejection(&e))?;
        let promise = pending
            .dyn_into::<Promise>()
            .map_err(|_| ProviderError::InvalidResponse("request did not return a promise".to_owned()))?;
        let result = JsFuture::from(promise).await.map_err(|e| rejection(&e))?;
        to_json(&result)
    }
}

fn to_json(value: &JsValue) -> Result<Value, ProviderError> {
    if value.is_undefined() {
        return Ok(Value::Null);
    }
    let text: String = JSON::stringify(value)
        .map_err(|e| ProviderError::InvalidResponse(format!("{e:?}")))?
        .into();
    serde_json::from_str(&text).map_err(|e| ProviderError::InvalidResponse(e.to_string()))
}

// Error objects keep `message` non-enumerable, so read the fields directly
// instead of stringifying the whole value.
#[allow(clippy::cast_possible_truncation)]
fn rejection(err: &JsValue) -> ProviderError {
    let code = Reflect::get(err, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|c| c as i64);
    let message = Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| format!("{err:?}"));
    ProviderError::from_rpc_payload(&json!({ "code": code, "message": message }))
}
