use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::VecDeque;

use super::Requester;
use crate::route::Route;
use crate::Result;

/// Records every call and replays queued responses, answering with an empty body once the
/// queue runs dry.
#[derive(Default)]
pub(crate) struct RecordingRequester {
    calls: Mutex<Vec<(Route, Option<Value>)>>,
    responses: Mutex<VecDeque<Result<Option<Value>>>>,
}

impl RecordingRequester {
    pub(crate) fn respond_with(&self, response: Result<Option<Value>>) {
        self.responses.lock().push_back(response);
    }

    pub(crate) fn calls(&self) -> Vec<(Route, Option<Value>)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl Requester for RecordingRequester {
    async fn request(&self, route: &Route, body: Option<&Value>) -> Result<Option<Value>> {
        self.calls.lock().push((route.clone(), body.cloned()));
        self.responses.lock().pop_front().unwrap_or(Ok(None))
    }
}
