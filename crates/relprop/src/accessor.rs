//! Accessors produced by property resolution.
//!
//! An accessor is resolved once per `(entity type, property)` pair and then
//! invoked once per entity instance. Every variant checks the instance's type
//! before doing anything else, so a mismatched entity never reaches the
//! store.

mod attribute;
pub use attribute::Attribute;

mod indirect_reference;
pub use indirect_reference::IndirectReference;

mod related_collection;
pub use related_collection::RelatedCollection;

use relprop_core::{
    stmt::{Entity, Type, Value},
    EntityType, Error, Result,
};

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyAccessor {
    /// One-to-many lookup through the store
    RelatedCollection(RelatedCollection),

    /// Many-to-one lookup through a key stored on the entity
    IndirectReference(IndirectReference),

    /// Plain attribute read, as resolved by the attribute resolver
    Attribute(Attribute),
}

impl PropertyAccessor {
    /// Produces the property value for `entity`.
    ///
    /// Failures are reported as an access error with the underlying cause
    /// chained below it.
    pub fn invoke(&self, entity: &Entity) -> Result<Value> {
        match self {
            Self::RelatedCollection(accessor) => accessor.invoke(entity),
            Self::IndirectReference(accessor) => accessor.invoke(entity),
            Self::Attribute(accessor) => accessor.invoke(entity),
        }
    }

    /// The static type of the values `invoke` produces.
    pub fn return_type(&self) -> &Type {
        match self {
            Self::RelatedCollection(accessor) => accessor.return_type(),
            Self::IndirectReference(accessor) => accessor.return_type(),
            Self::Attribute(accessor) => &accessor.ty,
        }
    }

    /// The entity type the accessor was resolved for.
    pub fn source(&self) -> &EntityType {
        match self {
            Self::RelatedCollection(accessor) => &accessor.source,
            Self::IndirectReference(accessor) => &accessor.source,
            Self::Attribute(accessor) => &accessor.source,
        }
    }

    /// The property name, after translation for attribute accessors.
    pub fn name(&self) -> &str {
        match self {
            Self::RelatedCollection(accessor) => &accessor.property,
            Self::IndirectReference(accessor) => &accessor.property,
            Self::Attribute(accessor) => &accessor.name,
        }
    }

    /// Returns `true` if the value is computed through the store rather than
    /// read from the entity.
    pub fn is_computed(&self) -> bool {
        !matches!(self, Self::Attribute(_))
    }
}

impl From<Attribute> for PropertyAccessor {
    fn from(value: Attribute) -> Self {
        Self::Attribute(value)
    }
}

impl From<RelatedCollection> for PropertyAccessor {
    fn from(value: RelatedCollection) -> Self {
        Self::RelatedCollection(value)
    }
}

impl From<IndirectReference> for PropertyAccessor {
    fn from(value: IndirectReference) -> Self {
        Self::IndirectReference(value)
    }
}

fn expect_entity_type(expected: &EntityType, entity: &Entity) -> Result<()> {
    if entity.is_a(expected) {
        Ok(())
    } else {
        Err(Error::type_mismatch(expected, &entity.ty))
    }
}
