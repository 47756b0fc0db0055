//! Channel data source seam.
//!
//! The dashboard service only sees [`ChannelDataSource`], so swapping the
//! synthetic generator for a live metrics API is a config change, not a
//! code change. Both implementations return the same contracts DTOs.

use async_trait::async_trait;
use contracts::dashboards::d100_marketing_overview::{
    LinkedInReport, WebsiteReport, YouTubeReport,
};
use contracts::shared::date_range::DateRange;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::shared::config::{Config, SourceMode};

use super::synthetic;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned HTTP {0}")]
    UpstreamStatus(reqwest::StatusCode),
}

#[async_trait]
pub trait ChannelDataSource: Send + Sync {
    async fn fetch_linkedin(&self, range: DateRange) -> Result<LinkedInReport, SourceError>;
    async fn fetch_youtube(&self, range: DateRange) -> Result<YouTubeReport, SourceError>;
    async fn fetch_website(&self, range: DateRange) -> Result<WebsiteReport, SourceError>;
}

/// Build the data source selected by config.toml
pub fn from_config(config: &Config) -> anyhow::Result<Arc<dyn ChannelDataSource>> {
    match config.data_source.mode {
        SourceMode::Synthetic => Ok(Arc::new(SyntheticSource {
            linkedin_seed: config.seeds.linkedin,
            youtube_seed: config.seeds.youtube,
            website_seed: config.seeds.website,
        })),
        SourceMode::Live => {
            let base_url = config
                .data_source
                .live_base_url
                .clone()
                .ok_or_else(|| anyhow::anyhow!("live mode requires data_source.live_base_url"))?;
            Ok(Arc::new(LiveSource::new(base_url)))
        }
    }
}

// ---------------------------------------------------------------------------
// Synthetic source
// ---------------------------------------------------------------------------

/// Deterministic generator behind the data-source seam.
///
/// Each fetch constructs a fresh stream from the fixed per-channel seed,
/// so output is identical for identical ranges.
pub struct SyntheticSource {
    pub linkedin_seed: u64,
    pub youtube_seed: u64,
    pub website_seed: u64,
}

#[async_trait]
impl ChannelDataSource for SyntheticSource {
    async fn fetch_linkedin(&self, range: DateRange) -> Result<LinkedInReport, SourceError> {
        Ok(synthetic::synthesize_linkedin(range, self.linkedin_seed))
    }

    async fn fetch_youtube(&self, range: DateRange) -> Result<YouTubeReport, SourceError> {
        Ok(synthetic::synthesize_youtube(range, self.youtube_seed))
    }

    async fn fetch_website(&self, range: DateRange) -> Result<WebsiteReport, SourceError> {
        Ok(synthetic::synthesize_website(range, self.website_seed))
    }
}

// ---------------------------------------------------------------------------
// Live source
// ---------------------------------------------------------------------------

/// Adapter for a live metrics API speaking the same DTO shapes.
///
/// Provider-specific retry/auth belongs upstream; here every failure is
/// collapsed into [`SourceError`] and the channel renders as unavailable.
pub struct LiveSource {
    client: reqwest::Client,
    base_url: String,
}

impl LiveSource {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_channel<T: DeserializeOwned>(
        &self,
        channel: &str,
        range: DateRange,
    ) -> Result<T, SourceError> {
        let url = format!(
            "{}/channels/{}?from={}&to={}",
            self.base_url,
            channel,
            range.from.format("%Y-%m-%d"),
            range.to.format("%Y-%m-%d"),
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::UpstreamStatus(response.status()));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ChannelDataSource for LiveSource {
    async fn fetch_linkedin(&self, range: DateRange) -> Result<LinkedInReport, SourceError> {
        self.get_channel("linkedin", range).await
    }

    async fn fetch_youtube(&self, range: DateRange) -> Result<YouTubeReport, SourceError> {
        self.get_channel("youtube", range).await
    }

    async fn fetch_website(&self, range: DateRange) -> Result<WebsiteReport, SourceError> {
        self.get_channel("website", range).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range() -> DateRange {
        let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        DateRange::new(from, to)
    }

    #[tokio::test]
    async fn test_synthetic_source_is_reproducible() {
        let source = SyntheticSource {
            linkedin_seed: 42,
            youtube_seed: 7,
            website_seed: 1337,
        };
        let first = source.fetch_linkedin(range()).await.unwrap();
        let second = source.fetch_linkedin(range()).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.days.len(), 5);
    }

    #[test]
    fn test_from_config_selects_synthetic() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 3000

            [data_source]
            mode = "synthetic"
            "#,
        )
        .unwrap();
        assert!(from_config(&config).is_ok());
    }

    #[test]
    fn test_from_config_live_without_url_fails() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 3000

            [data_source]
            mode = "live"
            "#,
        )
        .unwrap();
        assert!(from_config(&config).is_err());
    }
}
