use super::Error;
use crate::schema::EntityType;

/// Error when the attribute holding a foreign key is unset or null.
#[derive(Debug)]
pub(super) struct MissingKeyError {
    entity_type: EntityType,
    attribute: Box<str>,
}

impl std::error::Error for MissingKeyError {}

impl core::fmt::Display for MissingKeyError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "entity of type `{}` has no value for key attribute `{}`",
            self.entity_type, self.attribute
        )
    }
}

impl Error {
    /// Creates a missing key error.
    pub fn missing_key(entity_type: &EntityType, attribute: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingKey(MissingKeyError {
            entity_type: entity_type.clone(),
            attribute: attribute.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing key error.
    pub fn is_missing_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingKey(_))
    }
}
