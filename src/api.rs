//! HTTP client for the statistics API.

use crate::config::{api_url, REQUESTED_WITH, REQUEST_TIMEOUT_MS};
use crate::enrich::DetailSource;
use crate::error::{ApiError, ApiErrorKind};
use crate::model::{
    array_or_empty, normalize_standings, ConstructorStanding, DriverCareerStats,
    DriverStanding, Event, EventDetail, EventKey, Health,
};
use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use log::debug;
use reqwest::StatusCode;
use serde_json::Value;
use std::future::Future;

#[derive(Debug, Clone)]
pub struct StatsClient {
    base_url: String,
    timeout_ms: u32,
    http: reqwest::Client,
}

impl StatsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            timeout_ms: REQUEST_TIMEOUT_MS,
            http: reqwest::Client::new(),
        }
    }

    /// Client for the configured API, falling back to the page origin.
    pub fn from_config() -> Self {
        let configured = api_url();
        if !configured.is_empty() {
            return Self::new(configured);
        }
        let origin = gloo_utils::window().location().origin().unwrap_or_default();
        Self::new(origin)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!("GET {url}");
        let request = async {
            let response = self
                .http
                .get(&url)
                .header("X-Requested-With", REQUESTED_WITH)
                .send()
                .await?;
            let status = response.status();
            if status == StatusCode::NOT_FOUND {
                return Err(ApiError::new(
                    ApiErrorKind::NotFound,
                    Some(status.as_u16()),
                    format!("{path} not found"),
                ));
            }
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(ApiError::new(
                    ApiErrorKind::Status,
                    Some(status.as_u16()),
                    body,
                ));
            }
            Ok(response.json::<Value>().await?)
        };
        with_deadline(request, self.timeout_ms, path).await
    }

    pub async fn driver_standings(&self) -> Result<Vec<DriverStanding>, ApiError> {
        let value = self.get_json("/standings/drivers").await?;
        Ok(normalize_standings(value, "DriverStandings")?)
    }

    pub async fn constructor_standings(&self) -> Result<Vec<ConstructorStanding>, ApiError> {
        let value = self.get_json("/standings/constructors").await?;
        Ok(normalize_standings(value, "ConstructorStandings")?)
    }

    pub async fn schedule(&self) -> Result<Vec<Event>, ApiError> {
        let value = self.get_json("/schedule/current").await?;
        Ok(array_or_empty(value))
    }

    pub async fn all_driver_stats(&self) -> Result<Vec<DriverCareerStats>, ApiError> {
        let value = self.get_json("/drivers/stats").await?;
        Ok(array_or_empty(value))
    }

    pub async fn health(&self) -> Result<Health, ApiError> {
        let value = self.get_json("/health").await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Results of one race. A 404 means the race has no published results.
    pub async fn race_detail(&self, season: u32, round: u32) -> Result<Option<EventDetail>, ApiError> {
        match self.get_json(&format!("/race/{season}/{round}")).await {
            Ok(value) => Ok(Some(serde_json::from_value(value)?)),
            Err(e) if e.kind == ApiErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl DetailSource for StatsClient {
    async fn event_detail(&self, key: EventKey) -> Result<Option<EventDetail>, ApiError> {
        self.race_detail(key.season, key.round).await
    }
}

/// Race `request` against a browser timer.
async fn with_deadline<T>(
    request: impl Future<Output = Result<T, ApiError>>,
    timeout_ms: u32,
    path: &str,
) -> Result<T, ApiError> {
    let request = Box::pin(request);
    match select(request, TimeoutFuture::new(timeout_ms)).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(ApiError::timeout(path, timeout_ms)),
    }
}
