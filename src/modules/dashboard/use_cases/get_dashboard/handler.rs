use crate::modules::clients::core::client::Client;
use crate::modules::dashboard::core::snapshot::{DashboardSnapshot, build_snapshot};
use crate::modules::invoices::core::invoice::Invoice;
use crate::modules::projects::core::project::Project;
use crate::modules::tasks::core::task::Task;
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::entity_store::EntityStore;
use std::sync::Arc;

pub struct DashboardHandler<TClients, TProjects, TTasks, TInvoices>
where
    TClients: EntityStore<Client> + 'static,
    TProjects: EntityStore<Project> + 'static,
    TTasks: EntityStore<Task> + 'static,
    TInvoices: EntityStore<Invoice> + 'static,
{
    clients: Arc<TClients>,
    projects: Arc<TProjects>,
    tasks: Arc<TTasks>,
    invoices: Arc<TInvoices>,
    clock: Arc<dyn Clock>,
}

impl<TClients, TProjects, TTasks, TInvoices> DashboardHandler<TClients, TProjects, TTasks, TInvoices>
where
    TClients: EntityStore<Client> + 'static,
    TProjects: EntityStore<Project> + 'static,
    TTasks: EntityStore<Task> + 'static,
    TInvoices: EntityStore<Invoice> + 'static,
{
    pub fn new(
        clients: Arc<TClients>,
        projects: Arc<TProjects>,
        tasks: Arc<TTasks>,
        invoices: Arc<TInvoices>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            clients,
            projects,
            tasks,
            invoices,
            clock,
        }
    }

    /// Never fails: when any store cannot be read the empty snapshot is returned instead.
    #[tracing::instrument(skip(self))]
    pub async fn get_dashboard(&self) -> DashboardSnapshot {
        let loaded = tokio::try_join!(
            self.clients.get_all(),
            self.projects.get_all(),
            self.tasks.get_all(),
            self.invoices.get_all(),
        );
        match loaded {
            Ok((clients, projects, tasks, invoices)) => {
                build_snapshot(&clients, &projects, &tasks, &invoices, self.clock.now())
            }
            Err(error) => {
                tracing::warn!(%error, "dashboard stores unavailable, serving empty snapshot");
                DashboardSnapshot::empty()
            }
        }
    }
}
