mod dashboard;

pub use dashboard::OverviewDashboard;
