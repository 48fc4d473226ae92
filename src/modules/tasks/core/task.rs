use crate::modules::time_tracking::core::state::{TimeTracking, lenient_time_tracking};
use crate::shared::core::errors::ValidationError;
use crate::shared::core::primitives::{EntityId, lenient_date};
use crate::shared::core::validation::{contains_ignore_case, require_text};
use crate::shared::infrastructure::entity_store::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// Kanban column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    pub fn is_pending(self) -> bool {
        matches!(self, TaskStatus::Todo | TaskStatus::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "Id")]
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, deserialize_with = "lenient_date")]
    pub due_date: Option<NaiveDate>,
    pub project_id: EntityId,
    #[serde(default, deserialize_with = "lenient_time_tracking")]
    pub time_tracking: Option<TimeTracking>,
}

impl Task {
    pub fn total_time(&self) -> i64 {
        self.time_tracking.as_ref().map_or(0, |t| t.total_time)
    }

    pub fn has_active_timer(&self) -> bool {
        self.time_tracking
            .as_ref()
            .is_some_and(|t| t.active_timer.is_some())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewTask {
    pub title: String,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    #[serde(deserialize_with = "lenient_date")]
    pub due_date: Option<NaiveDate>,
    pub project_id: Option<EntityId>,
}

/// Partial task update. Time tracking is owned by the timer operations and cannot be patched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    #[serde(deserialize_with = "lenient_date")]
    pub due_date: Option<NaiveDate>,
    pub project_id: Option<EntityId>,
}

impl TaskPatch {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl Record for Task {
    const ENTITY: &'static str = "task";
    type Draft = NewTask;
    type Patch = TaskPatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: NewTask) -> Result<Self, ValidationError> {
        require_text(&draft.title, "title")?;
        let project_id = draft.project_id.ok_or(ValidationError::Required("project id"))?;
        Ok(Task {
            id,
            title: draft.title,
            priority: draft.priority.unwrap_or_default(),
            status: draft.status.unwrap_or_default(),
            due_date: draft.due_date,
            project_id,
            time_tracking: None,
        })
    }

    fn apply_patch(&mut self, patch: TaskPatch) -> Result<(), ValidationError> {
        if let Some(title) = patch.title.as_deref() {
            require_text(title, "title")?;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = Some(due_date);
        }
        if let Some(project_id) = patch.project_id {
            self.project_id = project_id;
        }
        Ok(())
    }
}

/// Query string for the task list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskFilter {
    pub search: Option<String>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub project_id: Option<EntityId>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        contains_ignore_case(&task.title, self.search.as_deref().unwrap_or_default())
            && self.priority.is_none_or(|p| task.priority == p)
            && self.status.is_none_or(|s| task.status == s)
            && self.project_id.is_none_or(|id| task.project_id == id)
    }
}
