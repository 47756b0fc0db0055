use contracts::dashboards::d100_marketing_overview::MarketingOverviewResponse;
use contracts::enums::channel::Channel;
use contracts::shared::date_range::DateRange;

use super::source::{ChannelDataSource, SourceError};

/// Fetch all three channels and assemble the combined dashboard response.
///
/// The three fetches are independent, so they fan out concurrently and
/// join before anything is returned. A failed channel becomes `None`
/// rather than failing the whole dashboard.
pub async fn get_overview(
    source: &dyn ChannelDataSource,
    range: DateRange,
) -> MarketingOverviewResponse {
    let (linkedin, youtube, website) = tokio::join!(
        source.fetch_linkedin(range),
        source.fetch_youtube(range),
        source.fetch_website(range),
    );

    MarketingOverviewResponse {
        from: range.from.format("%Y-%m-%d").to_string(),
        to: range.to.format("%Y-%m-%d").to_string(),
        linkedin: ok_or_log(Channel::LinkedIn, linkedin),
        youtube: ok_or_log(Channel::YouTube, youtube),
        website: ok_or_log(Channel::Website, website),
    }
}

fn ok_or_log<T>(channel: Channel, result: Result<T, SourceError>) -> Option<T> {
    match result {
        Ok(report) => Some(report),
        Err(e) => {
            tracing::warn!("D100: {} source failed: {}", channel.display_name(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_marketing_overview::source::SyntheticSource;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use contracts::dashboards::d100_marketing_overview::{
        LinkedInReport, WebsiteReport, YouTubeReport,
    };

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
        )
    }

    fn synthetic() -> SyntheticSource {
        SyntheticSource {
            linkedin_seed: 42,
            youtube_seed: 7,
            website_seed: 1337,
        }
    }

    #[tokio::test]
    async fn test_overview_fills_all_channels() {
        let response = get_overview(&synthetic(), range()).await;
        assert_eq!(response.from, "2024-01-01");
        assert_eq!(response.to, "2024-01-07");
        assert_eq!(response.linkedin.unwrap().days.len(), 7);
        assert_eq!(response.youtube.unwrap().days.len(), 7);
        assert_eq!(response.website.unwrap().days.len(), 7);
    }

    #[tokio::test]
    async fn test_overview_is_reproducible() {
        let source = synthetic();
        let first = get_overview(&source, range()).await;
        let second = get_overview(&source, range()).await;
        assert_eq!(first, second);
    }

    /// Source where only YouTube works, to exercise per-channel fallback
    struct PartialSource;

    #[async_trait]
    impl ChannelDataSource for PartialSource {
        async fn fetch_linkedin(&self, _: DateRange) -> Result<LinkedInReport, SourceError> {
            Err(SourceError::UpstreamStatus(
                reqwest::StatusCode::SERVICE_UNAVAILABLE,
            ))
        }

        async fn fetch_youtube(&self, range: DateRange) -> Result<YouTubeReport, SourceError> {
            synthetic().fetch_youtube(range).await
        }

        async fn fetch_website(&self, _: DateRange) -> Result<WebsiteReport, SourceError> {
            Err(SourceError::UpstreamStatus(
                reqwest::StatusCode::BAD_GATEWAY,
            ))
        }
    }

    #[tokio::test]
    async fn test_failed_channel_becomes_none() {
        let response = get_overview(&PartialSource, range()).await;
        assert!(response.linkedin.is_none());
        assert!(response.youtube.is_some());
        assert!(response.website.is_none());
    }
}
