use crate::modules::tasks::core::task::Task;
use crate::modules::time_tracking::core::summaries::{
    ProjectTimeSummary, TimeTrackingSummary, summarize_all, summarize_project,
};
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::EntityId;
use crate::shared::infrastructure::entity_store::EntityStore;
use std::sync::Arc;

/// Read side of time tracking. Every call rescans the task store.
pub struct ReportTimeHandler<TStore>
where
    TStore: EntityStore<Task> + 'static,
{
    tasks: Arc<TStore>,
}

impl<TStore> ReportTimeHandler<TStore>
where
    TStore: EntityStore<Task> + 'static,
{
    pub fn new(tasks: Arc<TStore>) -> Self {
        Self { tasks }
    }

    #[tracing::instrument(skip(self))]
    pub async fn project_summary(
        &self,
        project_id: EntityId,
    ) -> Result<ProjectTimeSummary, ApplicationError> {
        let tasks = self.tasks.get_all().await?;
        tracing::debug!(task_count = tasks.len(), "summarizing project time");
        Ok(summarize_project(project_id, &tasks))
    }

    #[tracing::instrument(skip(self))]
    pub async fn summary(&self) -> Result<TimeTrackingSummary, ApplicationError> {
        let tasks = self.tasks.get_all().await?;
        Ok(summarize_all(&tasks))
    }
}
