mod activity;
mod dashboard;
mod quick_actions;

pub use dashboard::AdminOverviewDashboard;
