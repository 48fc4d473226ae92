// Entity store port: one ordered collection of records of one entity type.
//
// - The store is the only mutator of its collection; every returned record is an owned copy.
// - Ids are assigned as max(existing ids) + 1 and never reused by compaction.
// - Each stored record carries a revision so callers can do load -> decide -> replace with
//   compare-and-swap semantics.

pub mod in_memory;

use crate::shared::core::errors::ValidationError;
use crate::shared::core::primitives::EntityId;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: EntityId },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: u64, actual: u64 },

    #[error("backend error: {0}")]
    Backend(String),
}

/// A storable entity with its create payload (`Draft`) and partial update payload (`Patch`).
pub trait Record: Clone + Send + Sync + 'static {
    const ENTITY: &'static str;

    type Draft: Send + 'static;
    type Patch: Send + 'static;

    fn id(&self) -> EntityId;

    /// Builds the record for a freshly assigned id, enforcing creation rules.
    fn from_draft(id: EntityId, draft: Self::Draft) -> Result<Self, ValidationError>;

    /// Shallow merge: fields present in the patch win. Must leave `id` untouched and must not
    /// partially apply on error.
    fn apply_patch(&mut self, patch: Self::Patch) -> Result<(), ValidationError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<R> {
    pub record: R,
    pub version: u64,
}

#[async_trait]
pub trait EntityStore<R: Record>: Send + Sync {
    async fn get_all(&self) -> Result<Vec<R>, StoreError>;
    async fn get_by_id(&self, id: EntityId) -> Result<R, StoreError>;
    async fn create(&self, draft: R::Draft) -> Result<R, StoreError>;
    async fn update(&self, id: EntityId, patch: R::Patch) -> Result<R, StoreError>;
    async fn delete(&self, id: EntityId) -> Result<bool, StoreError>;

    async fn load(&self, id: EntityId) -> Result<Loaded<R>, StoreError>;
    async fn replace(
        &self,
        id: EntityId,
        expected_version: u64,
        record: R,
    ) -> Result<R, StoreError>;
}
