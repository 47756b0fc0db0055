use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query parameters for dashboard data requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsQuery {
    /// Start date in format "YYYY-MM-DD"
    pub from: String,
    /// End date in format "YYYY-MM-DD"
    pub to: String,
}

// ---------------------------------------------------------------------------
// LinkedIn
// ---------------------------------------------------------------------------

/// One day of LinkedIn ad/post metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedInDaily {
    pub date: NaiveDate,
    pub impressions: u64,
    pub clicks: u64,
    pub reactions: u64,
    pub comments: u64,
    pub shares: u64,
    /// Ad spend for the day
    pub spend: f64,
}

/// Range-level LinkedIn aggregates and derived ratios
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkedInSummary {
    pub impressions: u64,
    pub clicks: u64,
    pub reactions: u64,
    pub comments: u64,
    pub shares: u64,
    pub leads: u64,
    pub spend: f64,
    /// Click-through rate, clicks / impressions (0 when no impressions)
    pub ctr: f64,
    /// Cost per click, spend / clicks (0 when no clicks)
    pub cpc: f64,
    /// Cost per lead, spend / leads (0 when no leads)
    pub cpl: f64,
}

/// Full LinkedIn result for one date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedInReport {
    pub days: Vec<LinkedInDaily>,
    pub summary: LinkedInSummary,
}

// ---------------------------------------------------------------------------
// YouTube
// ---------------------------------------------------------------------------

/// One day of YouTube channel metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YouTubeDaily {
    pub date: NaiveDate,
    pub views: u64,
    pub watch_time_minutes: u64,
    /// Derived: watch time in seconds / views (0 when no views)
    pub average_view_seconds: u64,
    /// Subscribers gained minus lost, may be negative
    pub net_subscriber_delta: i64,
}

/// Range-level YouTube aggregates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YouTubeSummary {
    pub views: u64,
    pub watch_time_minutes: u64,
    /// Mean of the per-day average view durations
    pub average_view_seconds: u64,
    pub net_subscriber_delta: i64,
}

/// Full YouTube result for one date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YouTubeReport {
    pub days: Vec<YouTubeDaily>,
    pub summary: YouTubeSummary,
}

// ---------------------------------------------------------------------------
// Website analytics
// ---------------------------------------------------------------------------

/// One day of website analytics metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteDaily {
    pub date: NaiveDate,
    pub sessions: u64,
    pub users: u64,
    pub pageviews: u64,
    pub conversions: u64,
    pub revenue: f64,
    pub avg_session_seconds: u64,
}

/// Range-level website aggregates and derived ratios
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebsiteSummary {
    pub sessions: u64,
    pub users: u64,
    pub pageviews: u64,
    pub conversions: u64,
    pub revenue: f64,
    /// Mean of the per-day average session durations
    pub avg_session_seconds: u64,
    /// Conversions / sessions (0 when no sessions)
    pub conversion_rate: f64,
    /// Revenue / conversions (0 when no conversions)
    pub revenue_per_conversion: f64,
    /// Fixed design constant, not computed (0 for an empty range)
    pub bounce_rate: f64,
}

/// Full website result for one date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteReport {
    pub days: Vec<WebsiteDaily>,
    pub summary: WebsiteSummary,
}

// ---------------------------------------------------------------------------
// Combined response
// ---------------------------------------------------------------------------

/// Response for the marketing overview dashboard.
///
/// A channel slot is `None` when its data source failed; the dashboard
/// renders an "unavailable" card for it instead of erroring out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketingOverviewResponse {
    /// Echo of the requested period, "YYYY-MM-DD"
    pub from: String,
    pub to: String,
    pub linkedin: Option<LinkedInReport>,
    pub youtube: Option<YouTubeReport>,
    pub website: Option<WebsiteReport>,
}
