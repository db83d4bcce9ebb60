use crate::{
    KeyValueBackend, ProjectRepository, Storage, StorageError, StorageKeys, StorageResult,
    UpsertOutcome,
};

use pt_core::{Developer, Project};

use log::info;

pub struct DeveloperRepository<'a, B> {
    storage: &'a Storage<B>,
}

impl<'a, B: KeyValueBackend> DeveloperRepository<'a, B> {
    pub fn new(storage: &'a Storage<B>) -> Self {
        Self { storage }
    }

    pub fn list(&self) -> Vec<Developer> {
        self.storage.load(StorageKeys::DEVELOPERS, Vec::new())
    }

    pub fn find(&self, id: &str) -> Option<Developer> {
        self.list().into_iter().find(|d| d.id == id)
    }

    /// All stored developers, failing when the stored collection cannot be read
    pub fn try_list(&self) -> StorageResult<Vec<Developer>> {
        Ok(self
            .storage
            .try_load(StorageKeys::DEVELOPERS)?
            .unwrap_or_default())
    }

    pub fn upsert(&self, developer: Developer) -> StorageResult<UpsertOutcome> {
        let mut developers = self.try_list()?;

        let outcome = match developers.iter_mut().find(|d| d.id == developer.id) {
            Some(existing) => {
                *existing = developer;
                UpsertOutcome::Updated
            }
            None => {
                developers.push(developer);
                UpsertOutcome::Created
            }
        };

        self.persist(&developers)?;
        Ok(outcome)
    }

    /// Delete by id and unassign the developer from every project.
    ///
    /// Projects are written before the developer list.
    pub fn delete(&self, id: &str) -> StorageResult<bool> {
        let mut developers = self.try_list()?;
        let before = developers.len();
        developers.retain(|d| d.id != id);

        if developers.len() == before {
            return Ok(false);
        }

        let projects = ProjectRepository::new(self.storage);
        let mut stored = projects.try_list()?;
        let mut touched = false;
        for project in stored.iter_mut().filter(|p| p.is_assigned_to(id)) {
            project.assigned_devs.retain(|dev_id| dev_id != id);
            touched = true;
        }
        if touched {
            projects.persist(&stored)?;
        }
        self.persist(&developers)?;

        info!("Deleted developer {id}");
        Ok(true)
    }

    /// Link a developer and a project on both sides. Repeating it is a no-op.
    pub fn assign(&self, developer_id: &str, project_id: &str) -> StorageResult<()> {
        let projects = ProjectRepository::new(self.storage);

        let mut developer = self
            .try_list()?
            .into_iter()
            .find(|d| d.id == developer_id)
            .ok_or_else(|| StorageError::not_found("Developer", developer_id))?;
        let mut project: Project = projects
            .try_list()?
            .into_iter()
            .find(|p| p.id == project_id)
            .ok_or_else(|| StorageError::not_found("Project", project_id))?;

        if !project.is_assigned_to(developer_id) {
            project.assigned_devs.push(developer_id.to_string());
            projects.upsert(project)?;
        }

        if !developer.projects.iter().any(|id| id == project_id) {
            developer.projects.push(project_id.to_string());
            self.upsert(developer)?;
        }

        info!("Assigned developer {developer_id} to project {project_id}");
        Ok(())
    }

    fn persist(&self, developers: &[Developer]) -> StorageResult<()> {
        if self.storage.save(StorageKeys::DEVELOPERS, developers) {
            Ok(())
        } else {
            Err(StorageError::write_failed(StorageKeys::DEVELOPERS))
        }
    }
}
