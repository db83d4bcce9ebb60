
use crate::{KeyValueBackend, MemoryBackend, StorageError, StorageResult};

use pt_core::{Developer, DeveloperRole, Priority, Project, ProjectStatus, Seniority};

/// Backend whose every operation fails, for exercising fallbacks
pub(crate) struct BrokenBackend;

impl BrokenBackend {
    fn failure() -> StorageError {
        StorageError::io(
            "/unavailable",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        )
    }
}

impl KeyValueBackend for BrokenBackend {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(Self::failure())
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(Self::failure())
    }

    fn remove(&self, _key: &str) -> StorageResult<()> {
        Err(Self::failure())
    }

    fn clear(&self) -> StorageResult<()> {
        Err(Self::failure())
    }
}

/// Memory backend that rejects writes to one key
pub(crate) struct ReadOnlyKeyBackend {
    pub(crate) inner: MemoryBackend,
    pub(crate) read_only: &'static str,
}

impl KeyValueBackend for ReadOnlyKeyBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if key == self.read_only {
            return Err(BrokenBackend::failure());
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.inner.remove(key)
    }

    fn clear(&self) -> StorageResult<()> {
        self.inner.clear()
    }
}

pub(crate) fn sample_project(id: &str) -> Project {
    Project {
        id: id.to_string(),
        name: format!("Project {id}"),
        owner: "C.Tedesco".to_string(),
        description: "Stored by the repository tests".to_string(),
        start_date: "2025-01-01".to_string(),
        end_date: "2025-03-01".to_string(),
        status: ProjectStatus::InProgress,
        priority: Priority::High,
        progress: 20,
        estimated_days: 40,
        assigned_devs: Vec::new(),
    }
}

pub(crate) fn sample_developer(id: &str) -> Developer {
    Developer::new(
        id.to_string(),
        format!("Dev {id}"),
        DeveloperRole::Fullstack,
        Seniority::Mid,
        40,
    )
}
