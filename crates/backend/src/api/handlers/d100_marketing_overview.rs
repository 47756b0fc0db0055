use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use contracts::dashboards::d100_marketing_overview::{MarketingOverviewResponse, MetricsQuery};
use contracts::enums::channel::Channel;
use contracts::shared::date_range::DateRange;
use serde::Serialize;

use crate::api::AppState;
use crate::dashboards::d100_marketing_overview::service;
use crate::dashboards::d100_marketing_overview::source::SourceError;

/// GET /api/d100/overview?from=2024-01-01&to=2024-01-31
pub async fn get_overview(
    State(state): State<AppState>,
    Query(query): Query<MetricsQuery>,
) -> Result<Json<MarketingOverviewResponse>, StatusCode> {
    let range = parse_range(&query)?;
    tracing::info!(
        "D100 Dashboard: overview for {}..{} ({} days)",
        query.from,
        query.to,
        range.day_count()
    );

    Ok(Json(
        service::get_overview(state.source.as_ref(), range).await,
    ))
}

/// GET /api/d100/channels/:channel?from=2024-01-01&to=2024-01-31
pub async fn get_channel(
    State(state): State<AppState>,
    Path(channel): Path<String>,
    Query(query): Query<MetricsQuery>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let Some(channel) = Channel::from_code(&channel) else {
        tracing::warn!("D100 Dashboard: unknown channel '{}'", channel);
        return Err(StatusCode::NOT_FOUND);
    };
    let range = parse_range(&query)?;

    let source = state.source.as_ref();
    let body = match channel {
        Channel::LinkedIn => to_body(channel, source.fetch_linkedin(range).await),
        Channel::YouTube => to_body(channel, source.fetch_youtube(range).await),
        Channel::Website => to_body(channel, source.fetch_website(range).await),
    }?;

    Ok(Json(body))
}

/// Malformed dates are a client error; an inverted range is not (it just
/// produces an empty report downstream)
fn parse_range(query: &MetricsQuery) -> Result<DateRange, StatusCode> {
    DateRange::parse(&query.from, &query.to).ok_or_else(|| {
        tracing::warn!(
            "D100 Dashboard: malformed date range '{}'..'{}'",
            query.from,
            query.to
        );
        StatusCode::BAD_REQUEST
    })
}

fn to_body<T: Serialize>(
    channel: Channel,
    result: Result<T, SourceError>,
) -> Result<serde_json::Value, StatusCode> {
    match result {
        Ok(report) => serde_json::to_value(report).map_err(|e| {
            tracing::error!("D100 Dashboard: failed to serialize {} report: {}", channel, e);
            StatusCode::INTERNAL_SERVER_ERROR
        }),
        Err(e) => {
            tracing::error!("D100 Dashboard: {} source failed: {}", channel, e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range_accepts_inverted() {
        let query = MetricsQuery {
            from: "2024-03-07".into(),
            to: "2024-03-01".into(),
        };
        let range = parse_range(&query).unwrap();
        assert_eq!(range.day_count(), 0);
    }

    #[test]
    fn test_parse_range_rejects_malformed() {
        let query = MetricsQuery {
            from: "07.03.2024".into(),
            to: "2024-03-01".into(),
        };
        assert_eq!(parse_range(&query), Err(StatusCode::BAD_REQUEST));
    }
}
