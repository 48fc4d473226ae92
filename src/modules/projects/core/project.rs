use crate::shared::core::errors::ValidationError;
use crate::shared::core::primitives::{EntityId, lenient_date};
use crate::shared::core::validation::{contains_ignore_case, require_text};
use crate::shared::infrastructure::entity_store::Record;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    Active,
    OnHold,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "Id")]
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub client_id: EntityId,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub budget: Decimal,
    #[serde(default, deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub client_id: Option<EntityId>,
    pub status: Option<ProjectStatus>,
    pub budget: Option<Decimal>,
    #[serde(deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub client_id: Option<EntityId>,
    pub status: Option<ProjectStatus>,
    pub budget: Option<Decimal>,
    #[serde(deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
}

impl Project {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text(&self.name, "name")?;
        if self.budget < Decimal::ZERO {
            return Err(ValidationError::NegativeBudget);
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(ValidationError::EndBeforeStart);
            }
        }
        Ok(())
    }
}

impl Record for Project {
    const ENTITY: &'static str = "project";
    type Draft = NewProject;
    type Patch = ProjectPatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: NewProject) -> Result<Self, ValidationError> {
        let client_id = draft.client_id.ok_or(ValidationError::Required("client id"))?;
        let project = Project {
            id,
            name: draft.name,
            description: draft.description.unwrap_or_default(),
            client_id,
            status: draft.status.unwrap_or_default(),
            budget: draft.budget.unwrap_or_default(),
            start_date: draft.start_date,
            end_date: draft.end_date,
        };
        project.validate()?;
        Ok(project)
    }

    fn apply_patch(&mut self, patch: ProjectPatch) -> Result<(), ValidationError> {
        let mut next = self.clone();
        if let Some(name) = patch.name {
            next.name = name;
        }
        if let Some(description) = patch.description {
            next.description = description;
        }
        if let Some(client_id) = patch.client_id {
            next.client_id = client_id;
        }
        if let Some(status) = patch.status {
            next.status = status;
        }
        if let Some(budget) = patch.budget {
            next.budget = budget;
        }
        if let Some(start_date) = patch.start_date {
            next.start_date = Some(start_date);
        }
        if let Some(end_date) = patch.end_date {
            next.end_date = Some(end_date);
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}

/// Query string for the project list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectFilter {
    pub search: Option<String>,
    pub status: Option<ProjectStatus>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        let term = self.search.as_deref().unwrap_or_default();
        contains_ignore_case(&project.name, term)
            && self.status.is_none_or(|status| project.status == status)
    }
}
