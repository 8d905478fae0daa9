use super::Error;
use crate::schema::EntityType;

/// Error when the attribute resolver has no attribute by the requested name.
#[derive(Debug)]
pub(super) struct UnknownAttributeError {
    entity_type: EntityType,
    name: Box<str>,
}

impl std::error::Error for UnknownAttributeError {}

impl core::fmt::Display for UnknownAttributeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown attribute `{}` for entity type `{}`",
            self.name, self.entity_type
        )
    }
}

impl Error {
    /// Creates an unknown attribute error.
    pub fn unknown_attribute(entity_type: &EntityType, name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownAttribute(UnknownAttributeError {
            entity_type: entity_type.clone(),
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown attribute error.
    pub fn is_unknown_attribute(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownAttribute(_))
    }
}
