use crate::modules::clients::core::client::Client;
use crate::modules::invoices::core::invoice::{Invoice, InvoiceStatus};
use crate::modules::projects::core::project::{Project, ProjectStatus};
use crate::modules::tasks::core::task::{Task, TaskStatus};
use crate::shared::core::primitives::EntityId;
use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

pub const UNKNOWN_CLIENT: &str = "Unknown Client";

/// Relative-time labels handed out to feed entries by position. Stored records carry no
/// completion timestamps, so the feed cannot compute real ones.
pub const ACTIVITY_TIME_LABELS: [&str; 5] = [
    "2 hours ago",
    "4 hours ago",
    "6 hours ago",
    "1 day ago",
    "2 days ago",
];

const COMPLETED_PROJECTS_IN_FEED: usize = 2;
const DONE_TASKS_IN_FEED: usize = 2;
const SENT_INVOICES_IN_FEED: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Project,
    Task,
    Invoice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: usize,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    pub client: String,
    pub time: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub total_clients: usize,
    pub active_projects: usize,
    pub pending_tasks: usize,
    pub completed_tasks: usize,
    pub overdue_items: usize,
    pub monthly_revenue: Decimal,
    pub recent_activity: Vec<Activity>,
}

impl DashboardSnapshot {
    /// All counters zero, no activity.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Everything the landing page shows, computed from the current store contents.
pub fn build_snapshot(
    clients: &[Client],
    projects: &[Project],
    tasks: &[Task],
    invoices: &[Invoice],
    now: DateTime<Utc>,
) -> DashboardSnapshot {
    let today = now.date_naive();
    DashboardSnapshot {
        total_clients: clients.len(),
        active_projects: projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Active)
            .count(),
        pending_tasks: tasks.iter().filter(|t| t.status.is_pending()).count(),
        completed_tasks: tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Done)
            .count(),
        overdue_items: tasks
            .iter()
            .filter(|t| t.status != TaskStatus::Done && t.due_date.is_some_and(|due| due < today))
            .count(),
        monthly_revenue: invoices
            .iter()
            .filter(|i| i.paid_in(now.year(), now.month()))
            .map(|i| i.amount)
            .sum(),
        recent_activity: recent_activity(clients, projects, tasks, invoices),
    }
}

pub fn client_name(clients: &[Client], client_id: Option<EntityId>) -> String {
    client_id
        .and_then(|id| clients.iter().find(|c| c.id == id))
        .map_or_else(|| UNKNOWN_CLIENT.to_string(), |c| c.name.clone())
}

fn client_of_project(projects: &[Project], project_id: EntityId) -> Option<EntityId> {
    projects
        .iter()
        .find(|p| p.id == project_id)
        .map(|p| p.client_id)
}

fn recent_activity(
    clients: &[Client],
    projects: &[Project],
    tasks: &[Task],
    invoices: &[Invoice],
) -> Vec<Activity> {
    let completed_projects = projects
        .iter()
        .filter(|p| p.status == ProjectStatus::Completed)
        .take(COMPLETED_PROJECTS_IN_FEED)
        .map(|p| {
            (
                ActivityKind::Project,
                format!("Project '{}' marked as completed", p.name),
                Some(p.client_id),
            )
        });

    let done_tasks = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Done)
        .take(DONE_TASKS_IN_FEED)
        .map(|t| {
            (
                ActivityKind::Task,
                format!("Task '{}' completed", t.title),
                client_of_project(projects, t.project_id),
            )
        });

    let sent_invoices = invoices
        .iter()
        .filter(|i| i.status == InvoiceStatus::Sent)
        .take(SENT_INVOICES_IN_FEED)
        .map(|i| {
            (
                ActivityKind::Invoice,
                format!("Invoice #{} sent to client", i.id),
                i.client_id.or_else(|| client_of_project(projects, i.project_id)),
            )
        });

    completed_projects
        .chain(done_tasks)
        .chain(sent_invoices)
        .zip(ACTIVITY_TIME_LABELS)
        .enumerate()
        .map(|(index, ((kind, title, client_id), time))| Activity {
            id: index + 1,
            kind,
            title,
            client: client_name(clients, client_id),
            time,
        })
        .collect()
}
