pub mod dates;
pub mod error;
pub mod models;
pub mod validation;
pub mod views;

#[cfg(test)]
mod tests;

pub use dates::date_metrics::{DEFAULT_DISPLAY_FORMAT, DateMetrics};
pub use dates::deadline_urgency::{DeadlineUrgency, ProgressBand};
pub use error::{CoreError, CoreResult};
pub use models::developer::{Developer, UtilizationLevel};
pub use models::developer_role::DeveloperRole;
pub use models::owners::OWNERS;
pub use models::priority::Priority;
pub use models::project::Project;
pub use models::project_form_data::ProjectFormData;
pub use models::project_status::ProjectStatus;
pub use models::seniority::Seniority;
pub use validation::form_errors::FormErrors;
pub use validation::form_field::FormField;
pub use validation::project_validator::ProjectValidator;
pub use validation::validation_message::ValidationMessage;
pub use views::dashboard_stats::{DashboardStats, StatusCount, status_distribution};
pub use views::project_filter::ProjectFilter;
pub use views::time_range::TimeRange;
pub use views::timeline::{TimelineBar, calendar_month, today_marker};
pub use views::workload::{average_workload, developer_workload};
pub use views::year_month::{YearMonth, months_in_range};
