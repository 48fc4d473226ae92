use crate::modules::clients::core::client::Client;
use crate::modules::dashboard::core::details::{
    ClientDetail, ProjectDetail, client_detail, project_detail,
};
use crate::modules::projects::core::project::Project;
use crate::modules::tasks::core::task::Task;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::{Clock, EntityId};
use crate::shared::infrastructure::entity_store::EntityStore;
use std::sync::Arc;

pub struct DetailsHandler<TClients, TProjects, TTasks>
where
    TClients: EntityStore<Client> + 'static,
    TProjects: EntityStore<Project> + 'static,
    TTasks: EntityStore<Task> + 'static,
{
    clients: Arc<TClients>,
    projects: Arc<TProjects>,
    tasks: Arc<TTasks>,
    clock: Arc<dyn Clock>,
}

impl<TClients, TProjects, TTasks> DetailsHandler<TClients, TProjects, TTasks>
where
    TClients: EntityStore<Client> + 'static,
    TProjects: EntityStore<Project> + 'static,
    TTasks: EntityStore<Task> + 'static,
{
    pub fn new(
        clients: Arc<TClients>,
        projects: Arc<TProjects>,
        tasks: Arc<TTasks>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            clients,
            projects,
            tasks,
            clock,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn client_detail(&self, client_id: EntityId) -> Result<ClientDetail, ApplicationError> {
        let (client, projects) = tokio::try_join!(
            self.clients.get_by_id(client_id),
            self.projects.get_all(),
        )?;
        Ok(client_detail(client, projects))
    }

    /// An unresolvable client is reported as "Unknown Client", not as an error.
    #[tracing::instrument(skip(self))]
    pub async fn project_detail(
        &self,
        project_id: EntityId,
    ) -> Result<ProjectDetail, ApplicationError> {
        let (project, clients, tasks) = tokio::try_join!(
            self.projects.get_by_id(project_id),
            self.clients.get_all(),
            self.tasks.get_all(),
        )?;
        Ok(project_detail(project, &clients, tasks, self.clock.now()))
    }
}
