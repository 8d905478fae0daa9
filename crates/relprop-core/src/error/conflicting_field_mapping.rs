use super::Error;
use crate::schema::EntityType;

/// Error when a schema remaps an external field name that is already mapped
/// to a different internal name, and duplicates are rejected.
#[derive(Debug)]
pub(super) struct ConflictingFieldMappingError {
    entity_type: EntityType,
    external_name: Box<str>,
    existing: Box<str>,
    replacement: Box<str>,
}

impl std::error::Error for ConflictingFieldMappingError {}

impl core::fmt::Display for ConflictingFieldMappingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "conflicting field mapping for `{}.{}`: already mapped to `{}`, cannot remap to `{}`",
            self.entity_type, self.external_name, self.existing, self.replacement
        )
    }
}

impl Error {
    /// Creates a conflicting field mapping error.
    pub fn conflicting_field_mapping(
        entity_type: &EntityType,
        external_name: &str,
        existing: &str,
        replacement: &str,
    ) -> Error {
        Error::from(super::ErrorKind::ConflictingFieldMapping(
            ConflictingFieldMappingError {
                entity_type: entity_type.clone(),
                external_name: external_name.into(),
                existing: existing.into(),
                replacement: replacement.into(),
            },
        ))
    }

    /// Returns `true` if this error is a conflicting field mapping error.
    pub fn is_conflicting_field_mapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConflictingFieldMapping(_))
    }
}
