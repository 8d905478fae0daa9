use super::Error;
use crate::schema::EntityType;

/// Error when an accessor is invoked on an entity of a type other than the
/// one it was resolved for.
#[derive(Debug)]
pub(super) struct TypeMismatchError {
    expected: EntityType,
    actual: EntityType,
}

impl std::error::Error for TypeMismatchError {}

impl core::fmt::Display for TypeMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "expected an entity of type `{}`, got `{}`",
            self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates a type mismatch error.
    pub fn type_mismatch(expected: &EntityType, actual: &EntityType) -> Error {
        Error::from(super::ErrorKind::TypeMismatch(TypeMismatchError {
            expected: expected.clone(),
            actual: actual.clone(),
        }))
    }

    /// Returns `true` if this error is a type mismatch error.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeMismatch(_))
    }
}
