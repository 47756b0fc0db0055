use crate::dashboards::d100_marketing_overview::ui::MarketingOverviewDashboard;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ThemeProvider>
            <MarketingOverviewDashboard />
        </ThemeProvider>
    }
}
