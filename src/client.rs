use futures::future::try_join3;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{Reading, Snapshot, StatsSummary};

/// Server-side cap on the recent-readings resource.
pub const RECENT_LIMIT: usize = 200;

const STATS_PATH: &str = "/api/stats";
const LATEST_PATH: &str = "/api/readings/latest";
const RECENT_PATH: &str = "/api/readings?limit=200";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to fetch {path}: {status}")]
    Status { path: String, status: u16 },
    #[error("failed to fetch {path}: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Thin JSON client for the telemetry backend. No retries here; the
/// scheduler re-polls on its own cadence.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(|source| FetchError::Transport {
            path: path.to_string(),
            source,
        })
    }

    /// Fetch all three resources concurrently. Fail-fast: any failure
    /// aborts the whole refresh, so partial UI updates never happen.
    pub async fn load_all(&self) -> Result<Snapshot, FetchError> {
        let (stats, latest, recent) = try_join3(
            self.get_json::<StatsSummary>(STATS_PATH),
            self.get_json::<Vec<Reading>>(LATEST_PATH),
            self.get_json::<Vec<Reading>>(RECENT_PATH),
        )
        .await?;

        Ok(Snapshot {
            stats,
            latest,
            recent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_formats_path_and_code() {
        let err = FetchError::Status {
            path: "/api/stats".to_string(),
            status: 500,
        };
        assert_eq!(err.to_string(), "failed to fetch /api/stats: 500");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn recent_path_carries_the_server_limit() {
        assert_eq!(RECENT_PATH, format!("/api/readings?limit={RECENT_LIMIT}"));
    }
}
