use super::PropertyResolver;

use std::ops::Deref;

/// A [`PropertyResolver`] whose field mappings can no longer change.
///
/// Dereferences to the resolver for `resolve` and the other read-only
/// operations.
#[derive(Debug)]
pub struct FrozenResolver<R> {
    resolver: PropertyResolver<R>,
}

impl<R> FrozenResolver<R> {
    pub(super) fn new(resolver: PropertyResolver<R>) -> Self {
        Self { resolver }
    }
}

impl<R> Deref for FrozenResolver<R> {
    type Target = PropertyResolver<R>;

    fn deref(&self) -> &Self::Target {
        &self.resolver
    }
}
