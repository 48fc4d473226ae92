use crate::modules::tasks::core::task::Task;
use crate::modules::time_tracking::core::decide::{decide_start, decide_stop};
use crate::modules::time_tracking::core::state::{ActiveTimer, TimeLog};
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::{Clock, EntityId, Sequence};
use crate::shared::infrastructure::entity_store::EntityStore;
use std::sync::Arc;

pub struct TrackTimeHandler<TStore>
where
    TStore: EntityStore<Task> + 'static,
{
    tasks: Arc<TStore>,
    clock: Arc<dyn Clock>,
    log_ids: Arc<Sequence>,
}

impl<TStore> TrackTimeHandler<TStore>
where
    TStore: EntityStore<Task> + 'static,
{
    pub fn new(tasks: Arc<TStore>, clock: Arc<dyn Clock>, log_ids: Arc<Sequence>) -> Self {
        Self {
            tasks,
            clock,
            log_ids,
        }
    }

    /// Fails with `VersionConflict` when another transition on the same task won the race.
    #[tracing::instrument(skip(self))]
    pub async fn start_timer(&self, task_id: EntityId) -> Result<ActiveTimer, ApplicationError> {
        let loaded = self.tasks.load(task_id).await?;
        let mut task = loaded.record;

        let (tracking, timer) =
            decide_start(task_id, task.time_tracking.as_ref(), self.clock.now())?;
        task.time_tracking = Some(tracking);
        self.tasks.replace(task_id, loaded.version, task).await?;

        tracing::info!(%task_id, start_time = %timer.start_time, "timer started");
        Ok(timer)
    }

    #[tracing::instrument(skip(self))]
    pub async fn stop_timer(&self, task_id: EntityId) -> Result<TimeLog, ApplicationError> {
        let loaded = self.tasks.load(task_id).await?;
        let mut task = loaded.record;

        let (tracking, log) = decide_stop(
            task.time_tracking.as_ref(),
            self.log_ids.next(),
            self.clock.now(),
        )?;
        task.time_tracking = Some(tracking);
        self.tasks.replace(task_id, loaded.version, task).await?;

        tracing::info!(%task_id, log_id = log.id, duration_ms = log.duration, "timer stopped");
        Ok(log)
    }

    pub async fn get_active_timer(
        &self,
        task_id: EntityId,
    ) -> Result<Option<ActiveTimer>, ApplicationError> {
        let task = self.tasks.get_by_id(task_id).await?;
        Ok(task.time_tracking.and_then(|t| t.active_timer))
    }

    pub async fn get_time_logs(&self, task_id: EntityId) -> Result<Vec<TimeLog>, ApplicationError> {
        let task = self.tasks.get_by_id(task_id).await?;
        Ok(task.time_tracking.map(|t| t.time_logs).unwrap_or_default())
    }
}

#[cfg(test)]
mod track_time_handler_tests {
    use super::*;
    use crate::modules::time_tracking::core::state::TimeTracking;
    use crate::shared::core::errors::ValidationError;
    use crate::shared::infrastructure::entity_store::in_memory::InMemoryEntityStore;
    use crate::tests::fixtures::{FixedClock, TaskBuilder, id};
    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};

    type Store = InMemoryEntityStore<Task>;
    type BeforeEachReturn = (Arc<Store>, Arc<FixedClock>, TrackTimeHandler<Store>);

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let store = Arc::new(Store::with_records(vec![
            TaskBuilder::new(5).title("Landing page").build(),
        ]));
        let clock = Arc::new(FixedClock::at(Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap()));
        let handler = TrackTimeHandler::new(store.clone(), clock.clone(), Arc::new(Sequence::default()));
        (store, clock, handler)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_start_a_timer_on_a_missing_task() {
        let handler = TrackTimeHandler::new(
            Arc::new(Store::new()),
            Arc::new(FixedClock::at(Utc::now())),
            Arc::new(Sequence::default()),
        );
        assert_eq!(
            handler.start_timer(id(1)).await,
            Err(ApplicationError::NotFound {
                entity: "task",
                id: id(1)
            })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_track_one_minute(before_each: BeforeEachReturn) {
        let (store, clock, handler) = before_each;
        let t0 = clock.now();

        let timer = handler.start_timer(id(5)).await.unwrap();
        assert_eq!(timer, ActiveTimer { id: id(5), start_time: t0 });
        let started = store.get_by_id(id(5)).await.unwrap();
        assert_eq!(
            started.time_tracking,
            Some(TimeTracking {
                total_time: 0,
                active_timer: Some(timer),
                time_logs: vec![],
            })
        );

        clock.advance_ms(60_000);
        let log = handler.stop_timer(id(5)).await.unwrap();
        assert_eq!(log.duration, 60_000);
        assert_eq!(log.id, 1);

        let tracking = store.get_by_id(id(5)).await.unwrap().time_tracking.unwrap();
        assert_eq!(tracking.total_time, 60_000);
        assert_eq!(tracking.active_timer, None);
        assert_eq!(handler.get_time_logs(id(5)).await.unwrap(), vec![log]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_double_start_without_touching_the_task(before_each: BeforeEachReturn) {
        let (store, clock, handler) = before_each;
        handler.start_timer(id(5)).await.unwrap();
        let before = store.load(id(5)).await.unwrap();

        clock.advance_ms(1_000);
        assert_eq!(
            handler.start_timer(id(5)).await,
            Err(ApplicationError::Validation(ValidationError::TimerAlreadyRunning))
        );
        assert_eq!(store.load(id(5)).await.unwrap(), before);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_stop_without_a_timer(before_each: BeforeEachReturn) {
        let (_, _, handler) = before_each;
        assert_eq!(
            handler.stop_timer(id(5)).await,
            Err(ApplicationError::Validation(ValidationError::NoActiveTimer))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_hand_out_increasing_log_ids(before_each: BeforeEachReturn) {
        let (_, clock, handler) = before_each;
        for _ in 0..3 {
            handler.start_timer(id(5)).await.unwrap();
            clock.advance_ms(5_000);
            handler.stop_timer(id(5)).await.unwrap();
        }
        let ids: Vec<u64> = handler
            .get_time_logs(id(5))
            .await
            .unwrap()
            .iter()
            .map(|log| log.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_expose_the_running_timer(before_each: BeforeEachReturn) {
        let (_, _, handler) = before_each;
        assert_eq!(handler.get_active_timer(id(5)).await.unwrap(), None);
        let timer = handler.start_timer(id(5)).await.unwrap();
        assert_eq!(handler.get_active_timer(id(5)).await.unwrap(), Some(timer));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_the_task_store_is_offline() {
        let mut store = Store::with_records(vec![TaskBuilder::new(5).build()]);
        store.toggle_offline();
        let handler = TrackTimeHandler::new(
            Arc::new(store),
            Arc::new(FixedClock::at(Utc::now())),
            Arc::new(Sequence::default()),
        );
        assert_eq!(
            handler.start_timer(id(5)).await,
            Err(ApplicationError::Upstream("task store offline".into()))
        );
    }
}
