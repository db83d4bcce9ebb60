pub mod developer;
pub mod developer_role;
pub mod owners;
pub mod priority;
pub mod project;
pub mod project_form_data;
pub mod project_status;
pub mod seniority;
