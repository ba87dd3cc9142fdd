mod dashboard;
mod device_card;
mod measurement_chart;
mod thresholds_card;

pub use dashboard::Dashboard;
