use crate::shared::core::errors::ValidationError;
use crate::shared::core::primitives::EntityId;
use crate::shared::infrastructure::entity_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ApplicationError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: EntityId },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("conflicting update: expected revision {expected}, found {actual}")]
    VersionConflict { expected: u64, actual: u64 },

    #[error("upstream failure: {0}")]
    Upstream(String),
}

impl From<StoreError> for ApplicationError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { entity, id } => ApplicationError::NotFound { entity, id },
            StoreError::Validation(e) => ApplicationError::Validation(e),
            StoreError::VersionMismatch { expected, actual } => {
                ApplicationError::VersionConflict { expected, actual }
            }
            StoreError::Backend(message) => ApplicationError::Upstream(message),
        }
    }
}
