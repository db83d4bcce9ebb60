mod project;
mod project_status;
