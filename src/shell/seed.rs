use crate::modules::clients::core::client::Client;
use crate::modules::invoices::core::invoice::Invoice;
use crate::modules::projects::core::project::Project;
use crate::modules::tasks::core::task::Task;
use crate::shared::infrastructure::entity_store::in_memory::InMemoryEntityStore;
use crate::shell::state::Stores;
use serde::de::DeserializeOwned;
use std::sync::Arc;

const CLIENTS: &str = include_str!("fixtures/clients.json");
const PROJECTS: &str = include_str!("fixtures/projects.json");
const TASKS: &str = include_str!("fixtures/tasks.json");
const INVOICES: &str = include_str!("fixtures/invoices.json");

#[derive(Debug, thiserror::Error)]
#[error("invalid {entity} fixture: {source}")]
pub struct SeedError {
    entity: &'static str,
    #[source]
    source: serde_json::Error,
}

#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    pub clients: Vec<Client>,
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub invoices: Vec<Invoice>,
}

impl Fixtures {
    /// The demo data set compiled into the binary.
    pub fn bundled() -> Result<Self, SeedError> {
        Ok(Self {
            clients: parse("client", CLIENTS)?,
            projects: parse("project", PROJECTS)?,
            tasks: parse("task", TASKS)?,
            invoices: parse("invoice", INVOICES)?,
        })
    }

    /// Highest time log id in the data set; new log ids continue after it.
    pub fn last_log_id(&self) -> u64 {
        self.tasks
            .iter()
            .filter_map(|task| task.time_tracking.as_ref())
            .map(|tracking| tracking.highest_log_id())
            .max()
            .unwrap_or(0)
    }

    pub fn into_stores(self) -> Stores {
        Stores {
            clients: Arc::new(InMemoryEntityStore::with_records(self.clients)),
            projects: Arc::new(InMemoryEntityStore::with_records(self.projects)),
            tasks: Arc::new(InMemoryEntityStore::with_records(self.tasks)),
            invoices: Arc::new(InMemoryEntityStore::with_records(self.invoices)),
        }
    }
}

fn parse<R: DeserializeOwned>(entity: &'static str, raw: &str) -> Result<Vec<R>, SeedError> {
    serde_json::from_str(raw).map_err(|source| SeedError { entity, source })
}
