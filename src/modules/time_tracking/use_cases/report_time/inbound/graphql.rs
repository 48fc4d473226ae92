use async_graphql::{Context, Object, Result as GqlResult};
use chrono::{DateTime, NaiveDate, Utc};

use crate::modules::time_tracking::core::summaries::{
    ProjectTimeLog, ProjectTimeSummary, TaskTimeBreakdown, TimeTrackingSummary,
};
use crate::modules::time_tracking::use_cases::track_time::inbound::graphql::entity_id;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlProjectTimeLog {
    pub id: u64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration: i64,
    pub date: NaiveDate,
    pub task_id: u64,
    pub task_title: String,
}

impl From<ProjectTimeLog> for GqlProjectTimeLog {
    fn from(v: ProjectTimeLog) -> Self {
        Self {
            id: v.log.id,
            start_time: v.log.start_time,
            end_time: v.log.end_time,
            duration: v.log.duration,
            date: v.log.date,
            task_id: v.task_id.get(),
            task_title: v.task_title,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlProjectTimeSummary {
    pub total_time: i64,
    pub active_timers: i32,
    pub total_entries: i32,
    pub time_logs: Vec<GqlProjectTimeLog>,
}

impl From<ProjectTimeSummary> for GqlProjectTimeSummary {
    fn from(v: ProjectTimeSummary) -> Self {
        Self {
            total_time: v.total_time,
            active_timers: v.active_timers as i32,
            total_entries: v.total_entries as i32,
            time_logs: v.time_logs.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTaskTimeBreakdown {
    pub task_id: u64,
    pub task_title: String,
    pub project_id: u64,
    pub total_time: i64,
    pub has_active_timer: bool,
    pub entry_count: i32,
}

impl From<TaskTimeBreakdown> for GqlTaskTimeBreakdown {
    fn from(v: TaskTimeBreakdown) -> Self {
        Self {
            task_id: v.task_id.get(),
            task_title: v.task_title,
            project_id: v.project_id.get(),
            total_time: v.total_time,
            has_active_timer: v.has_active_timer,
            entry_count: v.entry_count as i32,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTimeTrackingSummary {
    pub total_time: i64,
    pub active_timers: i32,
    pub total_entries: i32,
    pub task_breakdown: Vec<GqlTaskTimeBreakdown>,
}

impl From<TimeTrackingSummary> for GqlTimeTrackingSummary {
    fn from(v: TimeTrackingSummary) -> Self {
        Self {
            total_time: v.total_time,
            active_timers: v.active_timers as i32,
            total_entries: v.total_entries as i32,
            task_breakdown: v.task_breakdown.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct TimeTrackingQuery;

#[Object]
impl TimeTrackingQuery {
    async fn time_tracking(&self, context: &Context<'_>) -> GqlResult<GqlTimeTrackingSummary> {
        let state = context.data_unchecked::<AppState>();
        let summary = state
            .report_time
            .summary()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(summary.into())
    }

    async fn project_time_tracking(
        &self,
        context: &Context<'_>,
        project_id: u64,
    ) -> GqlResult<GqlProjectTimeSummary> {
        let state = context.data_unchecked::<AppState>();
        let summary = state
            .report_time
            .project_summary(entity_id(project_id)?)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(summary.into())
    }
}
