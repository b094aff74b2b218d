use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use vacfind_engine::SearchCriteria;
use vacfind_types::{Field, LookupResponse};

use super::{CityLookup, LookupError};
use crate::config::{Config, resolve_endpoint};
use crate::{Error, Result};

/// Lookup over HTTP: `GET <endpoint>?minTemp=..&maxTemp=..&month=..&maxRainyDays=..`
pub struct HttpLookup {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpLookup {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("vacfind/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Client)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    pub fn from_config(explicit_url: Option<&str>, config: &Config) -> Result<Self> {
        Self::new(resolve_endpoint(explicit_url, config), config.timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn classify(&self, err: reqwest::Error) -> LookupError {
        if err.is_timeout() {
            LookupError::Timeout(self.timeout)
        } else {
            LookupError::Transport(err.to_string())
        }
    }
}

pub(crate) fn query_params(criteria: &SearchCriteria) -> Vec<(&'static str, String)> {
    vec![
        (Field::MinTemp.wire_name(), criteria.min_temp().to_string()),
        (Field::MaxTemp.wire_name(), criteria.max_temp().to_string()),
        (Field::Month.wire_name(), criteria.month().as_str().to_string()),
        (
            Field::MaxRainyDays.wire_name(),
            criteria.max_rainy_days().to_string(),
        ),
    ]
}

#[async_trait]
impl CityLookup for HttpLookup {
    async fn find_cities(&self, criteria: &SearchCriteria) -> std::result::Result<LookupResponse, LookupError> {
        debug!(endpoint = %self.endpoint, month = %criteria.month(), "requesting cities");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&query_params(criteria))
            .send()
            .await
            .map_err(|err| self.classify(err))?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = %self.endpoint, %status, "lookup rejected request");
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|err| self.classify(err))?;
        LookupResponse::from_json(&body).map_err(|err| LookupError::Decode(err.to_string()))
    }
}
