pub mod backend;
pub mod error;
pub mod ids;
pub mod repositories;
pub mod storage;
pub mod storage_keys;

#[cfg(test)]
mod tests;

pub use backend::KeyValueBackend;
pub use backend::file_backend::FileBackend;
pub use backend::memory_backend::MemoryBackend;
pub use error::{StorageError, StorageResult};
pub use ids::{generate_developer_id, generate_project_id};
pub use repositories::developer_repository::DeveloperRepository;
pub use repositories::project_repository::{ProjectRepository, UpsertOutcome};
pub use storage::Storage;
pub use storage_keys::StorageKeys;
