use crate::modules::tasks::core::task::Task;
use crate::modules::time_tracking::core::state::TimeLog;
use crate::shared::core::primitives::EntityId;
use serde::Serialize;
use std::cmp::Reverse;

pub const RECENT_LOG_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTimeLog {
    #[serde(flatten)]
    pub log: TimeLog,
    pub task_id: EntityId,
    pub task_title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTimeSummary {
    pub total_time: i64,
    pub active_timers: usize,
    pub total_entries: usize,
    /// Most recently ended first, at most [`RECENT_LOG_LIMIT`].
    pub time_logs: Vec<ProjectTimeLog>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTimeBreakdown {
    pub task_id: EntityId,
    pub task_title: String,
    pub project_id: EntityId,
    pub total_time: i64,
    pub has_active_timer: bool,
    pub entry_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeTrackingSummary {
    pub total_time: i64,
    pub active_timers: usize,
    pub total_entries: usize,
    /// Tasks with tracked time or a running timer, largest total first.
    pub task_breakdown: Vec<TaskTimeBreakdown>,
}

pub fn summarize_project(project_id: EntityId, tasks: &[Task]) -> ProjectTimeSummary {
    let mut summary = ProjectTimeSummary::default();
    for task in tasks.iter().filter(|t| t.project_id == project_id) {
        let Some(tracking) = task.time_tracking.as_ref() else {
            continue;
        };
        summary.total_time += tracking.total_time;
        summary.active_timers += usize::from(tracking.active_timer.is_some());
        summary.total_entries += tracking.time_logs.len();
        summary
            .time_logs
            .extend(tracking.time_logs.iter().map(|log| ProjectTimeLog {
                log: log.clone(),
                task_id: task.id,
                task_title: task.title.clone(),
            }));
    }
    summary.time_logs.sort_by_key(|entry| Reverse(entry.log.end_time));
    summary.time_logs.truncate(RECENT_LOG_LIMIT);
    summary
}

pub fn summarize_all(tasks: &[Task]) -> TimeTrackingSummary {
    let mut summary = TimeTrackingSummary::default();
    for task in tasks {
        let Some(tracking) = task.time_tracking.as_ref() else {
            continue;
        };
        let running = tracking.active_timer.is_some();
        summary.total_time += tracking.total_time;
        summary.active_timers += usize::from(running);
        summary.total_entries += tracking.time_logs.len();

        if tracking.total_time > 0 || running {
            summary.task_breakdown.push(TaskTimeBreakdown {
                task_id: task.id,
                task_title: task.title.clone(),
                project_id: task.project_id,
                total_time: tracking.total_time,
                has_active_timer: running,
                entry_count: tracking.time_logs.len(),
            });
        }
    }
    summary
        .task_breakdown
        .sort_by_key(|row| Reverse(row.total_time));
    summary
}
