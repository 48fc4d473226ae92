use crate::modules::clients::core::client::Client;
use crate::modules::clients::use_cases::manage_clients::handler::ClientsHandler;
use crate::modules::dashboard::use_cases::get_dashboard::handler::DashboardHandler;
use crate::modules::dashboard::use_cases::view_details::handler::DetailsHandler;
use crate::modules::invoices::core::invoice::Invoice;
use crate::modules::invoices::use_cases::manage_invoices::handler::InvoicesHandler;
use crate::modules::projects::core::project::Project;
use crate::modules::projects::use_cases::manage_projects::handler::ProjectsHandler;
use crate::modules::tasks::core::task::Task;
use crate::modules::tasks::use_cases::manage_tasks::handler::TasksHandler;
use crate::modules::time_tracking::use_cases::report_time::handler::ReportTimeHandler;
use crate::modules::time_tracking::use_cases::track_time::handler::TrackTimeHandler;
use crate::shared::core::primitives::{Clock, Sequence};
use crate::shared::infrastructure::entity_store::in_memory::InMemoryEntityStore;
use std::sync::Arc;

pub type ClientStore = InMemoryEntityStore<Client>;
pub type ProjectStore = InMemoryEntityStore<Project>;
pub type TaskStore = InMemoryEntityStore<Task>;
pub type InvoiceStore = InMemoryEntityStore<Invoice>;

/// The four entity collections, shared by every handler that reads them.
#[derive(Clone, Default)]
pub struct Stores {
    pub clients: Arc<ClientStore>,
    pub projects: Arc<ProjectStore>,
    pub tasks: Arc<TaskStore>,
    pub invoices: Arc<InvoiceStore>,
}

impl Stores {
    pub fn set_delay_ms(&self, ms: u64) {
        self.clients.set_delay_ms(ms);
        self.projects.set_delay_ms(ms);
        self.tasks.set_delay_ms(ms);
        self.invoices.set_delay_ms(ms);
    }
}

#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<ClientsHandler<ClientStore>>,
    pub projects: Arc<ProjectsHandler<ProjectStore>>,
    pub tasks: Arc<TasksHandler<TaskStore>>,
    pub invoices: Arc<InvoicesHandler<InvoiceStore, ProjectStore>>,
    pub track_time: Arc<TrackTimeHandler<TaskStore>>,
    pub report_time: Arc<ReportTimeHandler<TaskStore>>,
    pub dashboard: Arc<DashboardHandler<ClientStore, ProjectStore, TaskStore, InvoiceStore>>,
    pub details: Arc<DetailsHandler<ClientStore, ProjectStore, TaskStore>>,
}

impl AppState {
    pub fn new(stores: &Stores, clock: Arc<dyn Clock>, log_ids: Arc<Sequence>) -> Self {
        Self {
            clients: Arc::new(ClientsHandler::new(stores.clients.clone(), clock.clone())),
            projects: Arc::new(ProjectsHandler::new(stores.projects.clone())),
            tasks: Arc::new(TasksHandler::new(stores.tasks.clone())),
            invoices: Arc::new(InvoicesHandler::new(
                stores.invoices.clone(),
                stores.projects.clone(),
            )),
            track_time: Arc::new(TrackTimeHandler::new(
                stores.tasks.clone(),
                clock.clone(),
                log_ids,
            )),
            report_time: Arc::new(ReportTimeHandler::new(stores.tasks.clone())),
            dashboard: Arc::new(DashboardHandler::new(
                stores.clients.clone(),
                stores.projects.clone(),
                stores.tasks.clone(),
                stores.invoices.clone(),
                clock.clone(),
            )),
            details: Arc::new(DetailsHandler::new(
                stores.clients.clone(),
                stores.projects.clone(),
                stores.tasks.clone(),
                clock,
            )),
        }
    }
}
