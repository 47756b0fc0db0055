//! Synthetic channel metrics standing in for the real provider APIs.
//!
//! Each synthesizer is a pure function of (date range, seed): it expands
//! the range into calendar days, draws from a fresh [`SeededStream`] in a
//! fixed order per day, maps the draws through affine formulas and
//! accumulates the summary in the same pass. Calling a synthesizer twice
//! with the same inputs yields identical output.

use contracts::dashboards::d100_marketing_overview::{
    LinkedInDaily, LinkedInReport, LinkedInSummary, WebsiteDaily, WebsiteReport, WebsiteSummary,
    YouTubeDaily, YouTubeReport, YouTubeSummary,
};
use contracts::shared::date_range::DateRange;

use super::lcg::SeededStream;

/// Placeholder until a real analytics source reports bounces
const BOUNCE_RATE: f64 = 0.47;

/// Roughly one in 25 ad clicks submits a lead form
const LEADS_PER_CLICK: u64 = 25;

/// Zero-guarded division: 0 instead of NaN/inf when the divisor is 0
fn ratio(numerator: f64, divisor: f64) -> f64 {
    if divisor > 0.0 {
        numerator / divisor
    } else {
        0.0
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn synthesize_linkedin(range: DateRange, seed: u64) -> LinkedInReport {
    let mut stream = SeededStream::new(seed);
    let mut days = Vec::with_capacity(range.day_count() as usize);
    let mut summary = LinkedInSummary::default();

    for date in range.iter_days() {
        // Draw order is fixed; reordering breaks reproducibility
        let impressions = (3_500.0 + stream.next() * 4_500.0) as u64;
        let clicks = (80.0 + stream.next() * 240.0) as u64;
        let reactions = (40.0 + stream.next() * 140.0) as u64;
        let comments = (5.0 + stream.next() * 35.0) as u64;
        let shares = (8.0 + stream.next() * 52.0) as u64;
        let spend = round_cents(120.0 + stream.next() * 260.0);

        summary.impressions += impressions;
        summary.clicks += clicks;
        summary.reactions += reactions;
        summary.comments += comments;
        summary.shares += shares;
        summary.spend += spend;

        days.push(LinkedInDaily {
            date,
            impressions,
            clicks,
            reactions,
            comments,
            shares,
            spend,
        });
    }

    summary.spend = round_cents(summary.spend);
    summary.leads = summary.clicks / LEADS_PER_CLICK;
    summary.ctr = ratio(summary.clicks as f64, summary.impressions as f64);
    summary.cpc = ratio(summary.spend, summary.clicks as f64);
    summary.cpl = ratio(summary.spend, summary.leads as f64);

    LinkedInReport { days, summary }
}

pub fn synthesize_youtube(range: DateRange, seed: u64) -> YouTubeReport {
    let mut stream = SeededStream::new(seed);
    let mut days = Vec::with_capacity(range.day_count() as usize);
    let mut summary = YouTubeSummary::default();
    let mut view_seconds_sum: u64 = 0;

    for date in range.iter_days() {
        let views = (1_200.0 + stream.next() * 6_800.0) as u64;
        let watch_time_minutes = (2_400.0 + stream.next() * 9_600.0) as u64;
        // Net of gained and lost subscribers, dips below zero on bad days
        let net_subscriber_delta = (-40.0 + stream.next() * 180.0) as i64;

        let average_view_seconds = if views > 0 {
            watch_time_minutes * 60 / views
        } else {
            0
        };

        summary.views += views;
        summary.watch_time_minutes += watch_time_minutes;
        summary.net_subscriber_delta += net_subscriber_delta;
        view_seconds_sum += average_view_seconds;

        days.push(YouTubeDaily {
            date,
            views,
            watch_time_minutes,
            average_view_seconds,
            net_subscriber_delta,
        });
    }

    if !days.is_empty() {
        summary.average_view_seconds = view_seconds_sum / days.len() as u64;
    }

    YouTubeReport { days, summary }
}

pub fn synthesize_website(range: DateRange, seed: u64) -> WebsiteReport {
    let mut stream = SeededStream::new(seed);
    let mut days = Vec::with_capacity(range.day_count() as usize);
    let mut summary = WebsiteSummary::default();
    let mut session_seconds_sum: u64 = 0;

    for date in range.iter_days() {
        let sessions = (900.0 + stream.next() * 2_100.0) as u64;
        let users = (700.0 + stream.next() * 1_700.0) as u64;
        let pageviews = (2_500.0 + stream.next() * 6_500.0) as u64;
        let conversions = (12.0 + stream.next() * 68.0) as u64;
        let revenue = round_cents(800.0 + stream.next() * 5_200.0);
        let avg_session_seconds = (95.0 + stream.next() * 145.0) as u64;

        summary.sessions += sessions;
        summary.users += users;
        summary.pageviews += pageviews;
        summary.conversions += conversions;
        summary.revenue += revenue;
        session_seconds_sum += avg_session_seconds;

        days.push(WebsiteDaily {
            date,
            sessions,
            users,
            pageviews,
            conversions,
            revenue,
            avg_session_seconds,
        });
    }

    summary.revenue = round_cents(summary.revenue);
    summary.conversion_rate = ratio(summary.conversions as f64, summary.sessions as f64);
    summary.revenue_per_conversion = ratio(summary.revenue, summary.conversions as f64);
    if !days.is_empty() {
        summary.avg_session_seconds = session_seconds_sum / days.len() as u64;
        summary.bounce_rate = BOUNCE_RATE;
    }

    WebsiteReport { days, summary }
}
