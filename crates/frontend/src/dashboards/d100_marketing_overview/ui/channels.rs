//! Per-channel panels: a KPI card grid plus the per-day breakdown table.

use contracts::dashboards::d100_marketing_overview::{
    LinkedInReport, WebsiteReport, YouTubeReport,
};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

use crate::dashboards::d100_marketing_overview::state::{ChannelSlot, ViewState};
use crate::shared::components::stat_card::{format_thousands, StatCard};

fn card(label: &str, value: f64, format: ValueFormat, status: IndicatorStatus) -> impl IntoView {
    view! {
        <StatCard
            label=label.to_string()
            value=Signal::derive(move || Some(value))
            format=format
            status=Signal::derive(move || status)
        />
    }
}

#[component]
fn EmptyPanel() -> impl IntoView {
    view! {
        <div class="channel-panel channel-panel--empty">
            <span>"No data yet"</span>
        </div>
    }
}

#[component]
fn UnavailablePanel(message: String) -> impl IntoView {
    view! {
        <div class="channel-panel channel-panel--unavailable">
            <strong>"⚠ Channel unavailable: "</strong>
            {message}
        </div>
    }
}

// ---------------------------------------------------------------------------
// LinkedIn
// ---------------------------------------------------------------------------

#[component]
pub fn LinkedInPanel(state: RwSignal<ViewState>) -> impl IntoView {
    move || match state.with(|s| s.linkedin.clone()) {
        ChannelSlot::Empty => view! { <EmptyPanel /> }.into_any(),
        ChannelSlot::Unavailable(message) => {
            view! { <UnavailablePanel message=message /> }.into_any()
        }
        ChannelSlot::Ready(report) => linkedin_panel(report).into_any(),
    }
}

fn linkedin_panel(report: LinkedInReport) -> impl IntoView {
    let s = &report.summary;
    let engagements = (s.reactions + s.comments + s.shares) as f64;
    let ctr_status = if s.ctr >= 0.03 {
        IndicatorStatus::Good
    } else {
        IndicatorStatus::Neutral
    };
    let usd = || ValueFormat::Money {
        currency: "USD".to_string(),
    };

    let cards = view! {
        <div class="channel-panel__cards">
            {card("Impressions", s.impressions as f64, ValueFormat::Integer, IndicatorStatus::Neutral)}
            {card("Clicks", s.clicks as f64, ValueFormat::Integer, IndicatorStatus::Neutral)}
            {card("CTR", s.ctr, ValueFormat::Percent { decimals: 2 }, ctr_status)}
            {card("Spend", s.spend, usd(), IndicatorStatus::Neutral)}
            {card("CPC", s.cpc, usd(), IndicatorStatus::Neutral)}
            {card("CPL", s.cpl, usd(), IndicatorStatus::Neutral)}
            {card("Leads", s.leads as f64, ValueFormat::Integer, IndicatorStatus::Good)}
            {card("Engagements", engagements, ValueFormat::Integer, IndicatorStatus::Neutral)}
        </div>
    };

    let rows = report
        .days
        .iter()
        .map(|day| {
            view! {
                <tr>
                    <td>{day.date.format("%Y-%m-%d").to_string()}</td>
                    <td class="num">{format_thousands(day.impressions as i64)}</td>
                    <td class="num">{format_thousands(day.clicks as i64)}</td>
                    <td class="num">{format_thousands(day.reactions as i64)}</td>
                    <td class="num">{format_thousands(day.comments as i64)}</td>
                    <td class="num">{format_thousands(day.shares as i64)}</td>
                    <td class="num">{format!("{:.2}", day.spend)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="channel-panel">
            {cards}
            <table class="channel-panel__table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Impressions"</th>
                        <th>"Clicks"</th>
                        <th>"Reactions"</th>
                        <th>"Comments"</th>
                        <th>"Shares"</th>
                        <th>"Spend, USD"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

// ---------------------------------------------------------------------------
// YouTube
// ---------------------------------------------------------------------------

#[component]
pub fn YouTubePanel(state: RwSignal<ViewState>) -> impl IntoView {
    move || match state.with(|s| s.youtube.clone()) {
        ChannelSlot::Empty => view! { <EmptyPanel /> }.into_any(),
        ChannelSlot::Unavailable(message) => {
            view! { <UnavailablePanel message=message /> }.into_any()
        }
        ChannelSlot::Ready(report) => youtube_panel(report).into_any(),
    }
}

fn youtube_panel(report: YouTubeReport) -> impl IntoView {
    let s = &report.summary;
    let subs_status = if s.net_subscriber_delta >= 0 {
        IndicatorStatus::Good
    } else {
        IndicatorStatus::Bad
    };

    let cards = view! {
        <div class="channel-panel__cards">
            {card("Views", s.views as f64, ValueFormat::Integer, IndicatorStatus::Neutral)}
            {card("Watch time, min", s.watch_time_minutes as f64, ValueFormat::Integer, IndicatorStatus::Neutral)}
            {card("Avg view duration", s.average_view_seconds as f64, ValueFormat::DurationSeconds, IndicatorStatus::Neutral)}
            {card("Net subscribers", s.net_subscriber_delta as f64, ValueFormat::Integer, subs_status)}
        </div>
    };

    let rows = report
        .days
        .iter()
        .map(|day| {
            view! {
                <tr>
                    <td>{day.date.format("%Y-%m-%d").to_string()}</td>
                    <td class="num">{format_thousands(day.views as i64)}</td>
                    <td class="num">{format_thousands(day.watch_time_minutes as i64)}</td>
                    <td class="num">{format!("{}:{:02}", day.average_view_seconds / 60, day.average_view_seconds % 60)}</td>
                    <td class="num">{format_thousands(day.net_subscriber_delta)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="channel-panel">
            {cards}
            <table class="channel-panel__table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Views"</th>
                        <th>"Watch time, min"</th>
                        <th>"Avg view"</th>
                        <th>"Net subs"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

// ---------------------------------------------------------------------------
// Website
// ---------------------------------------------------------------------------

#[component]
pub fn WebsitePanel(state: RwSignal<ViewState>) -> impl IntoView {
    move || match state.with(|s| s.website.clone()) {
        ChannelSlot::Empty => view! { <EmptyPanel /> }.into_any(),
        ChannelSlot::Unavailable(message) => {
            view! { <UnavailablePanel message=message /> }.into_any()
        }
        ChannelSlot::Ready(report) => website_panel(report).into_any(),
    }
}

fn website_panel(report: WebsiteReport) -> impl IntoView {
    let s = &report.summary;
    let conversion_status = if s.conversion_rate >= 0.025 {
        IndicatorStatus::Good
    } else {
        IndicatorStatus::Neutral
    };
    let usd = || ValueFormat::Money {
        currency: "USD".to_string(),
    };

    let cards = view! {
        <div class="channel-panel__cards">
            {card("Sessions", s.sessions as f64, ValueFormat::Integer, IndicatorStatus::Neutral)}
            {card("Users", s.users as f64, ValueFormat::Integer, IndicatorStatus::Neutral)}
            {card("Pageviews", s.pageviews as f64, ValueFormat::Integer, IndicatorStatus::Neutral)}
            {card("Conversions", s.conversions as f64, ValueFormat::Integer, IndicatorStatus::Good)}
            {card("Conversion rate", s.conversion_rate, ValueFormat::Percent { decimals: 2 }, conversion_status)}
            {card("Revenue", s.revenue, usd(), IndicatorStatus::Good)}
            {card("Revenue / conversion", s.revenue_per_conversion, usd(), IndicatorStatus::Neutral)}
            {card("Bounce rate", s.bounce_rate, ValueFormat::Percent { decimals: 0 }, IndicatorStatus::Warning)}
            {card("Avg session", s.avg_session_seconds as f64, ValueFormat::DurationSeconds, IndicatorStatus::Neutral)}
        </div>
    };

    let rows = report
        .days
        .iter()
        .map(|day| {
            view! {
                <tr>
                    <td>{day.date.format("%Y-%m-%d").to_string()}</td>
                    <td class="num">{format_thousands(day.sessions as i64)}</td>
                    <td class="num">{format_thousands(day.users as i64)}</td>
                    <td class="num">{format_thousands(day.pageviews as i64)}</td>
                    <td class="num">{format_thousands(day.conversions as i64)}</td>
                    <td class="num">{format!("{:.2}", day.revenue)}</td>
                    <td class="num">{format!("{}:{:02}", day.avg_session_seconds / 60, day.avg_session_seconds % 60)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="channel-panel">
            {cards}
            <table class="channel-panel__table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Sessions"</th>
                        <th>"Users"</th>
                        <th>"Pageviews"</th>
                        <th>"Conversions"</th>
                        <th>"Revenue, USD"</th>
                        <th>"Avg session"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
