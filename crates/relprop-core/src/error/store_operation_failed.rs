use super::Error;

/// Error when a relational store lookup fails.
///
/// This wraps whatever the store implementation reports: a lost connection,
/// a failed query, a corrupt index.
#[derive(Debug)]
pub(super) struct StoreOperationFailed {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for StoreOperationFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for StoreOperationFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a store failure.
    ///
    /// Store implementations use this to convert their own error types into
    /// relprop errors.
    pub fn store_operation_failed(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::StoreOperationFailed(
            StoreOperationFailed {
                inner: Box::new(err),
            },
        ))
    }

    /// Returns `true` if this error is a store failure.
    pub fn is_store_operation_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::StoreOperationFailed(_))
    }
}
