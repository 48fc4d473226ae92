use crate::shared::core::errors::ValidationError;
use crate::shared::core::primitives::{EntityId, lenient_instant};
use crate::shared::core::validation::{contains_ignore_case, require_text, validate_email};
use crate::shared::infrastructure::entity_store::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(rename = "Id")]
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub company: String,
    #[serde(default)]
    pub status: ClientStatus,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub company: String,
    pub status: Option<ClientStatus>,
    pub notes: Option<String>,
    #[serde(deserialize_with = "lenient_instant")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub status: Option<ClientStatus>,
    pub notes: Option<String>,
}

impl Client {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text(&self.name, "name")?;
        validate_email(&self.email)?;
        require_text(&self.company, "company")
    }

    pub fn matches_search(&self, term: &str) -> bool {
        contains_ignore_case(&self.name, term)
            || contains_ignore_case(&self.email, term)
            || contains_ignore_case(&self.company, term)
    }
}

impl Record for Client {
    const ENTITY: &'static str = "client";
    type Draft = NewClient;
    type Patch = ClientPatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: NewClient) -> Result<Self, ValidationError> {
        let created_at = draft.created_at.ok_or(ValidationError::Required("created at"))?;
        let client = Client {
            id,
            name: draft.name,
            email: draft.email,
            company: draft.company,
            status: draft.status.unwrap_or_default(),
            notes: draft.notes.unwrap_or_default(),
            created_at,
        };
        client.validate()?;
        Ok(client)
    }

    fn apply_patch(&mut self, patch: ClientPatch) -> Result<(), ValidationError> {
        let mut next = self.clone();
        if let Some(name) = patch.name {
            next.name = name;
        }
        if let Some(email) = patch.email {
            next.email = email;
        }
        if let Some(company) = patch.company {
            next.company = company;
        }
        if let Some(status) = patch.status {
            next.status = status;
        }
        if let Some(notes) = patch.notes {
            next.notes = notes;
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}

/// Query string for the client list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientSearch {
    #[serde(default)]
    pub search: Option<String>,
}
