use super::Error;

/// Error when a dotted property path cannot be parsed or cannot be followed
/// through the entity graph.
#[derive(Debug)]
pub(super) struct InvalidPropertyPathError {
    path: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for InvalidPropertyPathError {}

impl core::fmt::Display for InvalidPropertyPathError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid property path `{}`: {}", self.path, self.reason)
    }
}

impl Error {
    /// Creates an invalid property path error.
    pub fn invalid_property_path(path: impl Into<String>, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidPropertyPath(
            InvalidPropertyPathError {
                path: path.into().into(),
                reason: reason.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid property path error.
    pub fn is_invalid_property_path(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidPropertyPath(_))
    }
}
