use chrono::{Duration, Utc};
use contracts::enums::channel::Channel;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d100_marketing_overview::api;
use crate::dashboards::d100_marketing_overview::state::{RefreshOutcome, ViewState};
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::theme::theme_select::ThemeSelect;

use super::channels::{LinkedInPanel, WebsitePanel, YouTubePanel};

/// Marketing overview dashboard: KPIs for the three tracked channels
/// over a selected date range.
#[component]
pub fn MarketingOverviewDashboard() -> impl IntoView {
    // Default period: trailing 30 days
    let today = Utc::now().date_naive();
    let state = RwSignal::new(ViewState::new(
        (today - Duration::days(29)).format("%Y-%m-%d").to_string(),
        today.format("%Y-%m-%d").to_string(),
    ));
    let active_channel = RwSignal::new(Channel::LinkedIn);

    // Initial load on mount
    Effect::new(move |_| {
        spawn_refresh(state);
    });

    let on_range_change = Callback::new(move |(from, to): (String, String)| {
        state.update(|s| *s = s.with_range(from, to));
        spawn_refresh(state);
    });

    let date_from = Signal::derive(move || state.with(|s| s.date_from.clone()));
    let date_to = Signal::derive(move || state.with(|s| s.date_to.clone()));
    let loading = move || state.with(|s| s.loading);

    view! {
        <div id="d100_marketing_overview--dashboard" class="d100-dashboard">
            <header class="d100-dashboard__header">
                <h1 class="d100-dashboard__title">"Marketing overview"</h1>
                <ThemeSelect />
            </header>

            <div class="d100-dashboard__controls">
                <DateRangePicker date_from=date_from date_to=date_to on_change=on_range_change />
                <button class="button" on:click=move |_| spawn_refresh(state)>
                    "Refresh"
                </button>
                <Show when=loading>
                    <span class="d100-dashboard__loading">"Loading data…"</span>
                </Show>
            </div>

            <div class="d100-dashboard__tabs">
                <For
                    each=|| Channel::all()
                    key=|channel| channel.code()
                    children=move |channel| {
                        view! {
                            <button
                                class=move || {
                                    if active_channel.get() == channel {
                                        "tab tab--active"
                                    } else {
                                        "tab"
                                    }
                                }
                                on:click=move |_| active_channel.set(channel)
                            >
                                {channel.display_name()}
                            </button>
                        }
                    }
                />
            </div>

            {move || match active_channel.get() {
                Channel::LinkedIn => view! { <LinkedInPanel state=state /> }.into_any(),
                Channel::YouTube => view! { <YouTubePanel state=state /> }.into_any(),
                Channel::Website => view! { <WebsitePanel state=state /> }.into_any(),
            }}
        </div>
    }
}

/// Issue a refresh for the currently selected period.
///
/// The request id handed out by the reducer travels with the async task,
/// so a response that comes back after a newer refresh was issued is
/// dropped inside `refresh_completed`.
fn spawn_refresh(state: RwSignal<ViewState>) {
    let (next, request_id) = state.get_untracked().request_refresh();
    let from = next.date_from.clone();
    let to = next.date_to.clone();
    state.set(next);

    spawn_local(async move {
        let outcome = match api::get_overview(&from, &to).await {
            Ok(response) => RefreshOutcome::Loaded(response),
            Err(e) => {
                log::error!("D100 Dashboard: overview request failed: {}", e);
                RefreshOutcome::Failed(e)
            }
        };
        state.update(|s| *s = s.refresh_completed(request_id, outcome));
    });
}
