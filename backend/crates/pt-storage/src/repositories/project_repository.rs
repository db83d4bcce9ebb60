//! Project collection persisted as one JSON array under `projects`.

use crate::{KeyValueBackend, Storage, StorageError, StorageKeys, StorageResult};

use pt_core::{Developer, Project};

use log::info;

/// What an upsert did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

pub struct ProjectRepository<'a, B> {
    storage: &'a Storage<B>,
}

impl<'a, B: KeyValueBackend> ProjectRepository<'a, B> {
    pub fn new(storage: &'a Storage<B>) -> Self {
        Self { storage }
    }

    /// All stored projects; empty when nothing was saved yet or the value is corrupt
    pub fn list(&self) -> Vec<Project> {
        self.storage.load(StorageKeys::PROJECTS, Vec::new())
    }

    pub fn find(&self, id: &str) -> Option<Project> {
        self.list().into_iter().find(|p| p.id == id)
    }

    /// All stored projects, failing when the stored collection cannot be read
    pub fn try_list(&self) -> StorageResult<Vec<Project>> {
        Ok(self
            .storage
            .try_load(StorageKeys::PROJECTS)?
            .unwrap_or_default())
    }

    /// Replace the project with the same id in place, or append it
    pub fn upsert(&self, project: Project) -> StorageResult<UpsertOutcome> {
        let mut projects = self.try_list()?;

        let outcome = match projects.iter_mut().find(|p| p.id == project.id) {
            Some(existing) => {
                *existing = project;
                UpsertOutcome::Updated
            }
            None => {
                projects.push(project);
                UpsertOutcome::Created
            }
        };

        self.persist(&projects)?;
        Ok(outcome)
    }

    /// Delete by id and drop it from every developer's project list.
    ///
    /// `Ok(false)` when no project had that id. Developers are written before
    /// the project list.
    pub fn delete(&self, id: &str) -> StorageResult<bool> {
        let mut projects = self.try_list()?;
        let before = projects.len();
        projects.retain(|p| p.id != id);

        if projects.len() == before {
            return Ok(false);
        }

        let mut developers: Vec<Developer> = self
            .storage
            .try_load(StorageKeys::DEVELOPERS)?
            .unwrap_or_default();
        let mut touched = false;
        for developer in developers.iter_mut() {
            let len = developer.projects.len();
            developer.projects.retain(|project_id| project_id != id);
            touched |= developer.projects.len() != len;
        }
        if touched && !self.storage.save(StorageKeys::DEVELOPERS, &developers) {
            return Err(StorageError::write_failed(StorageKeys::DEVELOPERS));
        }
        self.persist(&projects)?;

        info!("Deleted project {id}");
        Ok(true)
    }

    pub(crate) fn persist(&self, projects: &[Project]) -> StorageResult<()> {
        if self.storage.save(StorageKeys::PROJECTS, projects) {
            Ok(())
        } else {
            Err(StorageError::write_failed(StorageKeys::PROJECTS))
        }
    }
}
