pub mod channels;
pub mod dashboard;

pub use dashboard::MarketingOverviewDashboard;
