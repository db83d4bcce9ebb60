pub mod developer_repository;
pub mod project_repository;
