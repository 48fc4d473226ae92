use crate::modules::tasks::core::task::Task;
use crate::modules::time_tracking::use_cases::report_time::handler::ReportTimeHandler;
use crate::modules::time_tracking::use_cases::track_time::handler::TrackTimeHandler;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::errors::ValidationError;
use crate::shared::core::primitives::Sequence;
use crate::shared::infrastructure::entity_store::in_memory::InMemoryEntityStore;
use crate::tests::fixtures::{FixedClock, TaskBuilder, id};
use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};
use std::sync::Arc;
use tokio::join;

type Store = InMemoryEntityStore<Task>;
type BeforeEachReturn = (Arc<Store>, Arc<FixedClock>, Arc<TrackTimeHandler<Store>>);

#[fixture]
fn before_each() -> BeforeEachReturn {
    let store = Arc::new(Store::with_records(vec![
        TaskBuilder::new(1).project_id(1).title("Checkout flow").build(),
        TaskBuilder::new(2).project_id(1).title("Payment gateway").build(),
    ]));
    store.set_delay_ms(20);
    let clock = Arc::new(FixedClock::at(
        Utc.with_ymd_and_hms(2025, 1, 20, 9, 0, 0).unwrap(),
    ));
    let handler = Arc::new(TrackTimeHandler::new(
        store.clone(),
        clock.clone(),
        Arc::new(Sequence::default()),
    ));
    (store, clock, handler)
}

fn lost_the_race(result: &Result<impl Sized, ApplicationError>) -> bool {
    matches!(
        result,
        Err(ApplicationError::VersionConflict { .. })
            | Err(ApplicationError::Validation(ValidationError::TimerAlreadyRunning))
    )
}

#[rstest]
#[tokio::test]
async fn it_should_let_exactly_one_of_two_concurrent_starts_win(before_each: BeforeEachReturn) {
    let (_, _, handler) = before_each;

    let (first, second) = join!(handler.start_timer(id(1)), handler.start_timer(id(1)));

    assert_eq!(
        [first.is_ok(), second.is_ok()].iter().filter(|ok| **ok).count(),
        1
    );
    assert!(lost_the_race(&first) || lost_the_race(&second));
    assert!(handler.get_active_timer(id(1)).await.unwrap().is_some());
}

#[rstest]
#[tokio::test]
async fn it_should_record_a_single_log_for_two_concurrent_stops(before_each: BeforeEachReturn) {
    let (_, clock, handler) = before_each;
    handler.start_timer(id(1)).await.unwrap();
    clock.advance_ms(90_000);

    let (first, second) = join!(handler.stop_timer(id(1)), handler.stop_timer(id(1)));

    assert_eq!(
        [first.is_ok(), second.is_ok()].iter().filter(|ok| **ok).count(),
        1
    );
    let logs = handler.get_time_logs(id(1)).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].duration, 90_000);
}

#[rstest]
#[tokio::test]
async fn it_should_not_interfere_across_tasks(before_each: BeforeEachReturn) {
    let (store, clock, handler) = before_each;

    let (first, second) = join!(handler.start_timer(id(1)), handler.start_timer(id(2)));
    assert!(first.is_ok() && second.is_ok());

    clock.set(Utc.with_ymd_and_hms(2025, 1, 20, 10, 0, 0).unwrap());
    let (first, second) = join!(handler.stop_timer(id(1)), handler.stop_timer(id(2)));
    assert_eq!(first.unwrap().duration, 3_600_000);
    assert_eq!(second.unwrap().duration, 3_600_000);

    let summary = ReportTimeHandler::new(store)
        .project_summary(id(1))
        .await
        .unwrap();
    assert_eq!(summary.total_time, 7_200_000);
    assert_eq!(summary.active_timers, 0);
    assert_eq!(summary.total_entries, 2);
}
