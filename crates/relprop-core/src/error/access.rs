use super::Error;
use crate::schema::EntityType;

/// Error when a property accessor cannot produce a value for an entity.
///
/// This is always the outermost error returned by accessor invocation. The
/// underlying failure is chained as its cause:
/// - the entity is not of the type the accessor was resolved for
/// - the foreign key used for an indirect lookup is missing
/// - the store has no record for the key
/// - the store itself failed
#[derive(Debug)]
pub(super) struct AccessError {
    entity_type: EntityType,
    property: Box<str>,
}

impl std::error::Error for AccessError {}

impl core::fmt::Display for AccessError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot access `{}.{}`", self.entity_type, self.property)
    }
}

impl Error {
    /// Creates an access error for `entity_type.property`.
    ///
    /// Use it as context on top of the underlying failure:
    ///
    /// ```
    /// # use relprop_core::{Error, EntityType};
    /// const TRIP: EntityType = EntityType::from_static("Trip");
    ///
    /// let err = Error::missing_key(&TRIP, "serviceId").context(Error::access(&TRIP, "calendar"));
    /// assert!(err.is_access());
    /// ```
    pub fn access(entity_type: &EntityType, property: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Access(AccessError {
            entity_type: entity_type.clone(),
            property: property.into().into(),
        }))
    }

    /// Returns `true` if this error is an access error.
    pub fn is_access(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Access(_))
    }
}
