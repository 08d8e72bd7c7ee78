use crate::errors::ClientError;
use crate::models::{decode_day_records, DatedRecord, DayRecord};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// The service that persists day records.
pub trait HabitsRemote {
    fn fetch_all(
        &self,
    ) -> impl Future<Output = Result<BTreeMap<String, DayRecord>, ClientError>> + Send;

    fn push(&self, record: &DatedRecord) -> impl Future<Output = Result<(), ClientError>> + Send;
}

/// Talks to `GET /api/habits` and `POST /api/habits` below `base_url`.
#[derive(Debug, Clone)]
pub struct HttpRemote {
    client: Client,
    base_url: String,
}

impl HttpRemote {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn habits_url(&self) -> String {
        format!("{}/habits", self.base_url)
    }
}

impl HabitsRemote for HttpRemote {
    async fn fetch_all(&self) -> Result<BTreeMap<String, DayRecord>, ClientError> {
        let response = self
            .client
            .get(self.habits_url())
            .send()
            .await
            .map_err(|err| ClientError::LoadFailure(err.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(ClientError::LoadFailure(format!(
                "unexpected status {}",
                response.status()
            )));
        }

        let raw: BTreeMap<String, Value> = response
            .json()
            .await
            .map_err(|err| ClientError::LoadFailure(err.to_string()))?;
        let (records, rejected) = decode_day_records(raw);
        for (date, err) in rejected {
            warn!("skipping unreadable record for {date}: {err}");
        }
        Ok(records)
    }

    async fn push(&self, record: &DatedRecord) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.habits_url())
            .json(record)
            .send()
            .await
            .map_err(|err| ClientError::SaveFailure(err.to_string()))?;

        match response.status() {
            StatusCode::OK => Ok(()),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ClientError::SaveFailure(if body.is_empty() {
                    format!("unexpected status {status}")
                } else {
                    format!("unexpected status {status}: {body}")
                }))
            }
        }
    }
}
