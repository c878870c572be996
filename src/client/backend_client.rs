use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;

use crate::config::BackendConfig;
use crate::constants::{GAME_STATISTICS_PATH, TRAINING_PLANS_PATH};
use crate::error::{CoachError, CoachResult};
use crate::logging::log_error;
use crate::models::{GameStatistics, TrainingPlan};

/// Shared client for the team-management backend. Holds one `reqwest::Client`
/// and the base address resolved at startup; read-only after construction.
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> CoachResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The one resource accessor every endpoint goes through: a single GET
    /// against `{base}{path}`, decoded as JSON. On any failure (transport,
    /// non-2xx status, decode) this logs one diagnostic line naming the
    /// operation and propagates the original failure. No retry, no fallback.
    pub async fn get_resource<T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
    ) -> CoachResult<T> {
        let url = format!("{}{}", self.base_url, path);

        match self.request(&url).await {
            Ok(value) => Ok(value),
            Err(err) => {
                log_error(&format!("{} request failed: {}", operation, err));
                Err(CoachError::RequestError(err))
            }
        }
    }

    async fn request<T: DeserializeOwned>(&self, url: &str) -> Result<T, reqwest::Error> {
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        response.json().await
    }

    /// Game statistics for a team. The identifier is opaque to this layer;
    /// the backend owns validation.
    pub async fn game_statistics(&self, team_id: &str) -> CoachResult<GameStatistics> {
        let path = format!("{}/{}", GAME_STATISTICS_PATH, team_id);
        self.get_resource("game statistics", &path).await
    }

    /// Training plans for a team.
    pub async fn training_plans(&self, team_id: &str) -> CoachResult<Vec<TrainingPlan>> {
        let path = format!("{}/{}", TRAINING_PLANS_PATH, team_id);
        self.get_resource("training plans", &path).await
    }
}
