use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use super::Requester;
use crate::route::Route;
use crate::{Config, Error, Result};

pub struct HttpRequester {
    config: Config,
    client: reqwest::Client,
}

impl HttpRequester {
    pub fn new(config: Config) -> Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .use_rustls_tls()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()?;

        Ok(Self { config, client })
    }

    fn url(&self, route: &Route) -> String {
        format!(
            "{}/{}",
            self.config.discord_api_base.trim_end_matches('/'),
            route.path()
        )
    }
}

#[async_trait]
impl Requester for HttpRequester {
    #[tracing::instrument(skip(self, route, body), fields(route = %route))]
    async fn request(&self, route: &Route, body: Option<&Value>) -> Result<Option<Value>> {
        let mut req = self
            .client
            .request(route.method(), self.url(route))
            .header(AUTHORIZATION, format!("Bot {}", self.config.discord_token));

        if let Some(body) = body {
            req = req.json(body);
        }

        let res = req.send().await?;
        let status = res.status();

        if !status.is_success() {
            let res_body = res.text().await?;
            warn!(%status, "request rejected");
            return Error::ResponseError(status, res_body).into();
        }

        debug!(%status, "request completed");

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let bytes = res.bytes().await?;
        if bytes.is_empty() {
            Ok(None)
        } else {
            Ok(Some(serde_json::from_slice(&bytes)?))
        }
    }
}
