use super::Error;
use crate::{schema::EntityType, stmt::Value};

/// Error when a lookup by key finds no record in the store.
#[derive(Debug)]
pub(super) struct RecordNotFoundError {
    entity_type: EntityType,
    key: Value,
}

impl std::error::Error for RecordNotFoundError {}

impl core::fmt::Display for RecordNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "record not found: {} key={}", self.entity_type, self.key)
    }
}

impl Error {
    /// Creates a record not found error.
    pub fn record_not_found(entity_type: &EntityType, key: &Value) -> Error {
        Error::from(super::ErrorKind::RecordNotFound(RecordNotFoundError {
            entity_type: entity_type.clone(),
            key: key.clone(),
        }))
    }

    /// Returns `true` if this error is a record not found error.
    pub fn is_record_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RecordNotFound(_))
    }
}
