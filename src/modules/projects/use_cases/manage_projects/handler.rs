use crate::modules::projects::core::project::{NewProject, Project, ProjectFilter, ProjectPatch};
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::EntityId;
use crate::shared::infrastructure::entity_store::EntityStore;
use std::sync::Arc;

pub struct ProjectsHandler<TStore>
where
    TStore: EntityStore<Project> + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ProjectsHandler<TStore>
where
    TStore: EntityStore<Project> + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<Project>, ApplicationError> {
        Ok(self.store.get_all().await?)
    }

    pub async fn filter(&self, filter: &ProjectFilter) -> Result<Vec<Project>, ApplicationError> {
        let projects = self.store.get_all().await?;
        Ok(projects.into_iter().filter(|p| filter.matches(p)).collect())
    }

    pub async fn get_by_client(&self, client_id: EntityId) -> Result<Vec<Project>, ApplicationError> {
        let projects = self.store.get_all().await?;
        Ok(projects
            .into_iter()
            .filter(|p| p.client_id == client_id)
            .collect())
    }

    pub async fn get_by_id(&self, id: EntityId) -> Result<Project, ApplicationError> {
        Ok(self.store.get_by_id(id).await?)
    }

    #[tracing::instrument(skip_all)]
    pub async fn create(&self, draft: NewProject) -> Result<Project, ApplicationError> {
        let project = self.store.create(draft).await?;
        tracing::info!(project_id = %project.id, client_id = %project.client_id, "project created");
        Ok(project)
    }

    #[tracing::instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: EntityId,
        patch: ProjectPatch,
    ) -> Result<Project, ApplicationError> {
        let project = self.store.update(id, patch).await?;
        tracing::info!(project_id = %id, status = ?project.status, "project updated");
        Ok(project)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: EntityId) -> Result<bool, ApplicationError> {
        let deleted = self.store.delete(id).await?;
        tracing::info!(project_id = %id, "project deleted");
        Ok(deleted)
    }
}
