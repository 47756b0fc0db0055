use chrono::{Datelike, Duration, NaiveDate, Utc};
use leptos::prelude::*;

/// First and last day of the month containing `date`
fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date);
    let end = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    }
    .map(|d| d - Duration::days(1))
    .unwrap_or(date);
    (start, end)
}

fn fmt(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Reusable date period selector: two date inputs plus quick buttons for
/// the current month, previous month and the last 7 days.
#[component]
pub fn DateRangePicker(
    /// "from" value in yyyy-mm-dd format
    #[prop(into)]
    date_from: Signal<String>,

    /// "to" value in yyyy-mm-dd format
    #[prop(into)]
    date_to: Signal<String>,

    /// Callback when the range changes (from, to)
    on_change: Callback<(String, String)>,
) -> impl IntoView {
    let on_from_change = move |ev| {
        let new_from = event_target_value(&ev);
        let current_to = date_to.get_untracked();
        on_change.run((new_from, current_to));
    };

    let on_to_change = move |ev| {
        let new_to = event_target_value(&ev);
        let current_from = date_from.get_untracked();
        on_change.run((current_from, new_to));
    };

    let on_current_month = move |_| {
        let (start, end) = month_bounds(Utc::now().date_naive());
        on_change.run((fmt(start), fmt(end)));
    };

    // Previous relative to the currently selected "from" date
    let on_previous_month = move |_| {
        let current_from = date_from.get_untracked();
        let anchor = NaiveDate::parse_from_str(&current_from, "%Y-%m-%d")
            .unwrap_or_else(|_| Utc::now().date_naive());
        let (start, _) = month_bounds(anchor);
        let (prev_start, prev_end) = month_bounds(start - Duration::days(1));
        on_change.run((fmt(prev_start), fmt(prev_end)));
    };

    let on_last_week = move |_| {
        let today = Utc::now().date_naive();
        on_change.run((fmt(today - Duration::days(6)), fmt(today)));
    };

    view! {
        <div class="date-range-picker">
            <input
                type="date"
                class="date-range-picker__input"
                prop:value=move || date_from.get()
                on:change=on_from_change
            />
            <span class="date-range-picker__separator">"—"</span>
            <input
                type="date"
                class="date-range-picker__input"
                prop:value=move || date_to.get()
                on:change=on_to_change
            />
            <button class="button button--small" on:click=on_current_month>
                "This month"
            </button>
            <button class="button button--small" on:click=on_previous_month>
                "Previous month"
            </button>
            <button class="button button--small" on:click=on_last_week>
                "Last 7 days"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(
            month_bounds(d("2024-02-15")),
            (d("2024-02-01"), d("2024-02-29"))
        );
        assert_eq!(
            month_bounds(d("2024-12-31")),
            (d("2024-12-01"), d("2024-12-31"))
        );
    }
}
