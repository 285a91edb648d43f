//! Scripted in-memory provider for native tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use serde_json::Value;

use super::provider::{Eip1193, ProviderError};

/// Replays queued responses per method and records every request.
#[derive(Default)]
pub(crate) struct MockProvider {
    responses: RefCell<HashMap<String, VecDeque<Result<Value, ProviderError>>>>,
    calls: RefCell<Vec<(String, Value)>>,
}

impl MockProvider {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next call to `method`.
    pub(crate) fn respond(self, method: &str, response: Result<Value, ProviderError>) -> Self {
        self.responses
            .borrow_mut()
            .entry(method.to_owned())
            .or_default()
            .push_back(response);
        self
    }

    pub(crate) fn calls(&self) -> Vec<(String, Value)> {
        self.calls.borrow().clone()
    }

    pub(crate) fn methods(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(m, _)| m.clone()).collect()
    }
}

#[async_trait(?Send)]
impl Eip1193 for MockProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        self.calls.borrow_mut().push((method.to_owned(), params));
        self.responses
            .borrow_mut()
            .get_mut(method)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| {
                Err(ProviderError::Rpc { code: -32601, message: format!("unscripted method {method}") })
            })
    }
}
