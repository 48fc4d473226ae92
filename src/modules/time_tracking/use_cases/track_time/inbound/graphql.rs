use async_graphql::{Context, Object, Result as GqlResult};
use chrono::{DateTime, NaiveDate, Utc};

use crate::modules::time_tracking::core::state::{ActiveTimer, TimeLog};
use crate::shared::core::primitives::EntityId;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlActiveTimer {
    pub task_id: u64,
    pub start_time: DateTime<Utc>,
}

impl From<ActiveTimer> for GqlActiveTimer {
    fn from(v: ActiveTimer) -> Self {
        Self {
            task_id: v.id.get(),
            start_time: v.start_time,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTimeLog {
    pub id: u64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration: i64,
    pub date: NaiveDate,
}

impl From<TimeLog> for GqlTimeLog {
    fn from(v: TimeLog) -> Self {
        Self {
            id: v.id,
            start_time: v.start_time,
            end_time: v.end_time,
            duration: v.duration,
            date: v.date,
        }
    }
}

pub(crate) fn entity_id(raw: u64) -> GqlResult<EntityId> {
    EntityId::new(raw).ok_or_else(|| async_graphql::Error::new("id must be a positive integer"))
}

#[derive(Default)]
pub struct TimeTrackingMutation;

#[Object]
impl TimeTrackingMutation {
    async fn start_timer(&self, context: &Context<'_>, task_id: u64) -> GqlResult<GqlActiveTimer> {
        let state = context.data_unchecked::<AppState>();
        let timer = state
            .track_time
            .start_timer(entity_id(task_id)?)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(timer.into())
    }

    async fn stop_timer(&self, context: &Context<'_>, task_id: u64) -> GqlResult<GqlTimeLog> {
        let state = context.data_unchecked::<AppState>();
        let log = state
            .track_time
            .stop_timer(entity_id(task_id)?)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(log.into())
    }
}
