//! View model for the marketing overview dashboard.
//!
//! Refresh handling is an explicit reducer over an immutable [`ViewState`]
//! instead of ad-hoc signal mutation: a refresh is tagged with a
//! monotonically increasing request id, and a completion is applied only
//! when its id is still the latest one issued. A response from a
//! superseded refresh is discarded, so a slow request can never overwrite
//! newer data.

use contracts::dashboards::d100_marketing_overview::{
    LinkedInReport, MarketingOverviewResponse, WebsiteReport, YouTubeReport,
};

pub type RequestId = u64;

/// One channel's slot in the view state
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelSlot<T> {
    /// No data yet (before the first refresh completes)
    Empty,
    Ready(T),
    /// The data source failed; the message is shown on the channel card
    Unavailable(String),
}

impl<T> ChannelSlot<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            ChannelSlot::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub date_from: String,
    pub date_to: String,
    pub loading: bool,
    pub latest_request: RequestId,
    pub linkedin: ChannelSlot<LinkedInReport>,
    pub youtube: ChannelSlot<YouTubeReport>,
    pub website: ChannelSlot<WebsiteReport>,
}

/// Result of one refresh round-trip
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    Loaded(MarketingOverviewResponse),
    Failed(String),
}

impl ViewState {
    pub fn new(date_from: String, date_to: String) -> Self {
        Self {
            date_from,
            date_to,
            loading: false,
            latest_request: 0,
            linkedin: ChannelSlot::Empty,
            youtube: ChannelSlot::Empty,
            website: ChannelSlot::Empty,
        }
    }

    /// Change the selected period without touching loaded data
    pub fn with_range(&self, date_from: String, date_to: String) -> Self {
        Self {
            date_from,
            date_to,
            ..self.clone()
        }
    }

    /// Start a refresh: bump the request id and raise the loading flag.
    /// The returned id must be passed back to [`ViewState::refresh_completed`].
    pub fn request_refresh(&self) -> (Self, RequestId) {
        let id = self.latest_request + 1;
        let next = Self {
            loading: true,
            latest_request: id,
            ..self.clone()
        };
        (next, id)
    }

    /// Apply a completed refresh.
    ///
    /// All three channel slots are replaced in one transition. A
    /// completion whose id is not the latest issued request is a stale
    /// response and leaves the state untouched.
    pub fn refresh_completed(&self, id: RequestId, outcome: RefreshOutcome) -> Self {
        if id != self.latest_request {
            return self.clone();
        }

        let (linkedin, youtube, website) = match outcome {
            RefreshOutcome::Loaded(response) => (
                slot_from(response.linkedin),
                slot_from(response.youtube),
                slot_from(response.website),
            ),
            RefreshOutcome::Failed(message) => (
                ChannelSlot::Unavailable(message.clone()),
                ChannelSlot::Unavailable(message.clone()),
                ChannelSlot::Unavailable(message),
            ),
        };

        Self {
            loading: false,
            linkedin,
            youtube,
            website,
            ..self.clone()
        }
    }
}

fn slot_from<T>(report: Option<T>) -> ChannelSlot<T> {
    match report {
        Some(report) => ChannelSlot::Ready(report),
        None => ChannelSlot::Unavailable("Channel data source unavailable".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_marketing_overview::{
        LinkedInSummary, WebsiteSummary, YouTubeSummary,
    };

    fn initial() -> ViewState {
        ViewState::new("2024-01-01".into(), "2024-01-07".into())
    }

    fn empty_response() -> MarketingOverviewResponse {
        MarketingOverviewResponse {
            from: "2024-01-01".into(),
            to: "2024-01-07".into(),
            linkedin: Some(LinkedInReport {
                days: vec![],
                summary: LinkedInSummary::default(),
            }),
            youtube: Some(YouTubeReport {
                days: vec![],
                summary: YouTubeSummary::default(),
            }),
            website: Some(WebsiteReport {
                days: vec![],
                summary: WebsiteSummary::default(),
            }),
        }
    }

    #[test]
    fn test_request_refresh_bumps_id_and_sets_loading() {
        let (state, id) = initial().request_refresh();
        assert_eq!(id, 1);
        assert!(state.loading);
        assert_eq!(state.latest_request, 1);

        let (state, id) = state.request_refresh();
        assert_eq!(id, 2);
        assert_eq!(state.latest_request, 2);
    }

    #[test]
    fn test_completion_replaces_all_slots_atomically() {
        let (state, id) = initial().request_refresh();
        let state = state.refresh_completed(id, RefreshOutcome::Loaded(empty_response()));
        assert!(!state.loading);
        assert!(state.linkedin.ready().is_some());
        assert!(state.youtube.ready().is_some());
        assert!(state.website.ready().is_some());
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let (state, first_id) = initial().request_refresh();
        let (state, second_id) = state.request_refresh();

        // The superseded response arrives late and must not apply
        let after_stale =
            state.refresh_completed(first_id, RefreshOutcome::Loaded(empty_response()));
        assert_eq!(after_stale, state);
        assert!(after_stale.loading);

        let after_latest =
            after_stale.refresh_completed(second_id, RefreshOutcome::Loaded(empty_response()));
        assert!(!after_latest.loading);
        assert!(after_latest.linkedin.ready().is_some());
    }

    #[test]
    fn test_missing_channel_becomes_unavailable() {
        let mut response = empty_response();
        response.youtube = None;

        let (state, id) = initial().request_refresh();
        let state = state.refresh_completed(id, RefreshOutcome::Loaded(response));
        assert!(state.linkedin.ready().is_some());
        assert!(matches!(state.youtube, ChannelSlot::Unavailable(_)));
    }

    #[test]
    fn test_failed_refresh_marks_all_channels_unavailable() {
        let (state, id) = initial().request_refresh();
        let state = state.refresh_completed(id, RefreshOutcome::Failed("HTTP error: 500".into()));
        assert!(!state.loading);
        assert!(matches!(state.linkedin, ChannelSlot::Unavailable(_)));
        assert!(matches!(state.youtube, ChannelSlot::Unavailable(_)));
        assert!(matches!(state.website, ChannelSlot::Unavailable(_)));
    }

    #[test]
    fn test_with_range_keeps_loaded_data() {
        let (state, id) = initial().request_refresh();
        let state = state.refresh_completed(id, RefreshOutcome::Loaded(empty_response()));
        let state = state.with_range("2024-02-01".into(), "2024-02-29".into());
        assert_eq!(state.date_from, "2024-02-01");
        assert!(state.linkedin.ready().is_some());
        assert_eq!(state.latest_request, 1);
    }
}
