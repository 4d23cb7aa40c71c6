//! Test dispatchers shared by the form tests

use async_trait::async_trait;
use registration_dispatch::{DispatchError, DispatchOutcome, DispatchResult, SheetDispatcher};
use registration_types::SheetPayload;
use std::sync::Mutex;

/// Dispatcher that records every payload and always succeeds
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    payloads: Mutex<Vec<SheetPayload>>,
}

impl RecordingDispatcher {
    pub fn count(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<SheetPayload> {
        self.payloads.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl SheetDispatcher for RecordingDispatcher {
    async fn submit(&self, payload: &SheetPayload) -> DispatchResult<DispatchOutcome> {
        self.payloads.lock().unwrap().push(payload.clone());
        Ok(DispatchOutcome::Delivered)
    }
}

/// Dispatcher that always fails
#[derive(Debug)]
pub struct FailingDispatcher;

#[async_trait]
impl SheetDispatcher for FailingDispatcher {
    async fn submit(&self, _payload: &SheetPayload) -> DispatchResult<DispatchOutcome> {
        // Any dispatch error will do; the forms collapse them all
        // into the generic error status.
        let err = serde_json::from_str::<serde_json::Value>("").unwrap_err();
        Err(DispatchError::Serialize(err))
    }
}
