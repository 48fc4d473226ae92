// Pure timer transitions. Callers load the task, decide here and write the result back with
// the revision they loaded, so a concurrent transition on the same task is rejected.

use crate::modules::time_tracking::core::state::{ActiveTimer, TimeLog, TimeTracking};
use crate::shared::core::errors::ValidationError;
use crate::shared::core::primitives::EntityId;
use chrono::{DateTime, Utc};

/// Idle -> Running. An untracked task starts from an empty tracking record.
pub fn decide_start(
    task_id: EntityId,
    current: Option<&TimeTracking>,
    now: DateTime<Utc>,
) -> Result<(TimeTracking, ActiveTimer), ValidationError> {
    let mut next = current.cloned().unwrap_or_default();
    if next.active_timer.is_some() {
        return Err(ValidationError::TimerAlreadyRunning);
    }
    let timer = ActiveTimer {
        id: task_id,
        start_time: now,
    };
    next.active_timer = Some(timer.clone());
    Ok((next, timer))
}

/// Running -> Idle. Closes the active timer into a new log entry with id `log_id`.
pub fn decide_stop(
    current: Option<&TimeTracking>,
    log_id: u64,
    now: DateTime<Utc>,
) -> Result<(TimeTracking, TimeLog), ValidationError> {
    let Some(current) = current else {
        return Err(ValidationError::NoActiveTimer);
    };
    let Some(timer) = current.active_timer.as_ref() else {
        return Err(ValidationError::NoActiveTimer);
    };

    let log = TimeLog {
        id: log_id,
        start_time: timer.start_time,
        end_time: now,
        duration: timer.elapsed_ms(now),
        date: timer.start_time.date_naive(),
    };

    let mut next = current.clone();
    next.active_timer = None;
    next.total_time += log.duration;
    next.time_logs.push(log.clone());
    Ok((next, log))
}
