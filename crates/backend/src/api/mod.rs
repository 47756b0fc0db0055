pub mod handlers;

use std::sync::Arc;

use crate::dashboards::d100_marketing_overview::source::ChannelDataSource;

/// Shared handler state: the configured channel data source
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ChannelDataSource>,
}
