pub mod dashboard_stats;
pub mod project_filter;
pub mod time_range;
pub mod timeline;
pub mod workload;
pub mod year_month;
