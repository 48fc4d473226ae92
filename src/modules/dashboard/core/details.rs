use crate::modules::clients::core::client::Client;
use crate::modules::dashboard::core::snapshot::client_name;
use crate::modules::projects::core::project::{Project, ProjectStatus};
use crate::modules::tasks::core::task::{Task, TaskStatus};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Share of the budget shown as spent until real expense tracking exists.
pub fn estimated_spend_ratio() -> Decimal {
    Decimal::new(7, 1)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetail {
    pub client: Client,
    pub projects: Vec<Project>,
    pub total_projects: usize,
    pub active_projects: usize,
    /// Sum of the client's project budgets.
    pub total_revenue: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCounts {
    pub todo: usize,
    pub in_progress: usize,
    pub review: usize,
    pub done: usize,
}

impl TaskCounts {
    fn tally(tasks: &[Task]) -> Self {
        tasks.iter().fold(Self::default(), |mut counts, task| {
            match task.status {
                TaskStatus::Todo => counts.todo += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Review => counts.review += 1,
                TaskStatus::Done => counts.done += 1,
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.todo + self.in_progress + self.review + self.done
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub project: Project,
    pub client_name: String,
    pub tasks: Vec<Task>,
    pub task_counts: TaskCounts,
    /// Percentage of tasks done.
    pub progress: u32,
    /// Percentage of the scheduled time span already elapsed.
    pub time_progress: u32,
    pub days_remaining: Option<i64>,
    pub hours_tracked: Decimal,
    /// Placeholder: a fixed share of the budget, see [`estimated_spend_ratio`].
    pub estimated_spend: Decimal,
}

pub fn client_detail(client: Client, projects: Vec<Project>) -> ClientDetail {
    let projects: Vec<Project> = projects
        .into_iter()
        .filter(|p| p.client_id == client.id)
        .collect();
    ClientDetail {
        total_projects: projects.len(),
        active_projects: projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Active)
            .count(),
        total_revenue: projects.iter().map(|p| p.budget).sum(),
        client,
        projects,
    }
}

pub fn project_detail(
    project: Project,
    clients: &[Client],
    tasks: Vec<Task>,
    now: DateTime<Utc>,
) -> ProjectDetail {
    let tasks: Vec<Task> = tasks
        .into_iter()
        .filter(|t| t.project_id == project.id)
        .collect();
    let task_counts = TaskCounts::tally(&tasks);
    let tracked_ms: i64 = tasks.iter().map(Task::total_time).sum();

    ProjectDetail {
        client_name: client_name(clients, Some(project.client_id)),
        progress: rounded_percent(task_counts.done as i64, task_counts.total() as i64),
        time_progress: time_progress(project.start_date, project.end_date, now),
        days_remaining: project.end_date.map(|end| days_until(end, now)),
        hours_tracked: (Decimal::from(tracked_ms) / Decimal::from(MS_PER_HOUR))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero),
        estimated_spend: (project.budget * estimated_spend_ratio())
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        task_counts,
        tasks,
        project,
    }
}

/// round(part / whole * 100), halves rounded up; 0 for an empty whole.
fn rounded_percent(part: i64, whole: i64) -> u32 {
    if whole <= 0 {
        return 0;
    }
    let percent = (part * 200 + whole).div_euclid(2 * whole);
    percent.clamp(0, 100) as u32
}

fn midnight_ms(date: NaiveDate) -> i64 {
    date.and_time(chrono::NaiveTime::MIN)
        .and_utc()
        .timestamp_millis()
}

fn time_progress(start: Option<NaiveDate>, end: Option<NaiveDate>, now: DateTime<Utc>) -> u32 {
    let (Some(start), Some(end)) = (start, end) else {
        return 0;
    };
    let now_ms = now.timestamp_millis();
    let total = midnight_ms(end) - midnight_ms(start);
    if total <= 0 {
        return if now_ms >= midnight_ms(end) { 100 } else { 0 };
    }
    rounded_percent((now_ms - midnight_ms(start)).clamp(0, total), total)
}

/// Whole days until the end date, rounded up; negative once the date has passed.
fn days_until(end: NaiveDate, now: DateTime<Utc>) -> i64 {
    let remaining = midnight_ms(end) - now.timestamp_millis();
    let days = remaining.div_euclid(MS_PER_DAY);
    if remaining.rem_euclid(MS_PER_DAY) > 0 {
        days + 1
    } else {
        days
    }
}
