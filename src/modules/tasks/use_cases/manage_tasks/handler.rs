use crate::modules::tasks::core::task::{NewTask, Task, TaskFilter, TaskPatch, TaskStatus};
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::EntityId;
use crate::shared::infrastructure::entity_store::EntityStore;
use std::sync::Arc;

pub struct TasksHandler<TStore>
where
    TStore: EntityStore<Task> + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> TasksHandler<TStore>
where
    TStore: EntityStore<Task> + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<Task>, ApplicationError> {
        Ok(self.store.get_all().await?)
    }

    pub async fn filter(&self, filter: &TaskFilter) -> Result<Vec<Task>, ApplicationError> {
        let tasks = self.store.get_all().await?;
        Ok(tasks.into_iter().filter(|t| filter.matches(t)).collect())
    }

    pub async fn get_by_project(&self, project_id: EntityId) -> Result<Vec<Task>, ApplicationError> {
        let filter = TaskFilter {
            project_id: Some(project_id),
            ..TaskFilter::default()
        };
        self.filter(&filter).await
    }

    pub async fn get_by_id(&self, id: EntityId) -> Result<Task, ApplicationError> {
        Ok(self.store.get_by_id(id).await?)
    }

    #[tracing::instrument(skip_all)]
    pub async fn create(&self, draft: NewTask) -> Result<Task, ApplicationError> {
        let task = self.store.create(draft).await?;
        tracing::info!(task_id = %task.id, project_id = %task.project_id, "task created");
        Ok(task)
    }

    #[tracing::instrument(skip(self, patch))]
    pub async fn update(&self, id: EntityId, patch: TaskPatch) -> Result<Task, ApplicationError> {
        let task = self.store.update(id, patch).await?;
        tracing::info!(task_id = %id, "task updated");
        Ok(task)
    }

    /// Moves a task to another kanban column.
    #[tracing::instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: EntityId,
        status: TaskStatus,
    ) -> Result<Task, ApplicationError> {
        let task = self.store.update(id, TaskPatch::status(status)).await?;
        tracing::info!(task_id = %id, status = ?status, "task moved");
        Ok(task)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: EntityId) -> Result<bool, ApplicationError> {
        let deleted = self.store.delete(id).await?;
        tracing::info!(task_id = %id, "task deleted");
        Ok(deleted)
    }
}
