use futures::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::future::IntoFuture;
use std::sync::Arc;
use tracing::debug;

use crate::requester::Requester;
use crate::route::Route;
use crate::Result;

type Decoder<T> = Box<dyn FnOnce(Option<Value>) -> Result<T> + Send>;
type Guard = Box<dyn FnOnce() -> Result<()> + Send>;

/// A REST call that has been prepared but not sent.
///
/// Nothing happens until the action is executed, either through [`RestAction::execute`] or by
/// awaiting it directly.
#[must_use = "rest actions do nothing until executed"]
pub struct RestAction<T> {
    requester: Arc<dyn Requester>,
    route: Route,
    body: Option<Value>,
    guard: Option<Guard>,
    decoder: Decoder<T>,
}

impl<T: Send + 'static> RestAction<T> {
    pub(crate) fn new<F>(requester: Arc<dyn Requester>, route: Route, body: Option<Value>, decoder: F) -> Self
    where
        F: FnOnce(Option<Value>) -> Result<T> + Send + 'static,
    {
        RestAction {
            requester,
            route,
            body,
            guard: None,
            decoder: Box::new(decoder),
        }
    }

    /// Runs `guard` right before the request is sent. An error aborts the request.
    pub(crate) fn with_guard<G>(mut self, guard: G) -> Self
    where
        G: FnOnce() -> Result<()> + Send + 'static,
    {
        self.guard = Some(Box::new(guard));
        self
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn map<U, F>(self, f: F) -> RestAction<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        let decoder = self.decoder;

        RestAction {
            requester: self.requester,
            route: self.route,
            body: self.body,
            guard: self.guard,
            decoder: Box::new(move |value| decoder(value).map(f)),
        }
    }

    /// Keeps the request but ignores whatever the server sends back.
    pub fn discarding(self) -> RestAction<()> {
        RestAction {
            requester: self.requester,
            route: self.route,
            body: self.body,
            guard: self.guard,
            decoder: Box::new(discard),
        }
    }

    pub async fn execute(self) -> Result<T> {
        let RestAction {
            requester,
            route,
            body,
            guard,
            decoder,
        } = self;

        if let Some(guard) = guard {
            guard()?;
        }

        debug!(%route, "executing rest action");
        let res = requester.request(&route, body.as_ref()).await?;
        decoder(res)
    }
}

impl<T: Send + 'static> IntoFuture for RestAction<T> {
    type Output = Result<T>;
    type IntoFuture = BoxFuture<'static, Result<T>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.execute())
    }
}

impl<T> fmt::Debug for RestAction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestAction")
            .field("route", &format_args!("{}", self.route))
            .finish_non_exhaustive()
    }
}

pub(crate) fn decode_json<T: DeserializeOwned>(value: Option<Value>) -> Result<T> {
    Ok(serde_json::from_value(value.unwrap_or(Value::Null))?)
}

pub(crate) fn discard(_: Option<Value>) -> Result<()> {
    Ok(())
}
