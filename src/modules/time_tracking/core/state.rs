use crate::shared::core::primitives::EntityId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveTimer {
    /// Id of the task the timer runs on.
    #[serde(rename = "Id")]
    pub id: EntityId,
    pub start_time: DateTime<Utc>,
}

impl ActiveTimer {
    /// Milliseconds since the timer started, never negative.
    pub fn elapsed_ms(&self, now: DateTime<Utc>) -> i64 {
        (now - self.start_time).num_milliseconds().max(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLog {
    #[serde(rename = "Id")]
    pub id: u64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration: i64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeTracking {
    #[serde(default)]
    pub total_time: i64,
    #[serde(default)]
    pub active_timer: Option<ActiveTimer>,
    #[serde(default)]
    pub time_logs: Vec<TimeLog>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
}

impl TimeTracking {
    pub fn state(&self) -> TimerState {
        match self.active_timer {
            Some(_) => TimerState::Running,
            None => TimerState::Idle,
        }
    }

    pub fn logged_total(&self) -> i64 {
        self.time_logs.iter().map(|log| log.duration).sum()
    }

    pub fn highest_log_id(&self) -> u64 {
        self.time_logs.iter().map(|log| log.id).max().unwrap_or(0)
    }
}

/// Reads an embedded time tracking value. Legacy records carry `null` or an opaque string
/// instead of an object; both mean "never tracked".
pub fn lenient_time_tracking<'de, D>(deserializer: D) -> Result<Option<TimeTracking>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Tracked(TimeTracking),
        Opaque(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Tracked(tracking)) => Some(tracking),
        Some(Raw::Opaque(_)) | None => None,
    })
}
