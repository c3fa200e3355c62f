mod http_requester;
pub use http_requester::HttpRequester;

#[cfg(test)]
mod recording_requester;
#[cfg(test)]
pub(crate) use recording_requester::RecordingRequester;

use crate::route::Route;
use crate::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Executes a single REST call. Returns the decoded response body, or `None` for empty bodies.
#[async_trait]
pub trait Requester: Send + Sync {
    async fn request(&self, route: &Route, body: Option<&Value>) -> Result<Option<Value>>;
}
