use crate::{IndirectReference, PropertyAccessor, RelatedCollection};
use relprop_core::{
    schema::{BelongsTo, HasMany},
    EntityType, Store,
};

use indexmap::IndexMap;
use std::sync::Arc;

/// A property computed by querying the store instead of reading an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComputedProperty {
    /// All records related to the entity
    RelatedCollection(HasMany),

    /// The record referenced by one of the entity's attributes
    IndirectReference(BelongsTo),
}

/// Computed properties by entity type and property name.
#[derive(Debug, Default, Clone)]
pub struct ComputedProperties {
    entity_types: IndexMap<EntityType, IndexMap<String, ComputedProperty>>,
}

impl ComputedProperty {
    pub fn related_collection(
        target: impl Into<EntityType>,
        foreign_key: impl Into<String>,
    ) -> Self {
        Self::RelatedCollection(HasMany::new(target, foreign_key))
    }

    pub fn indirect_reference(
        target: impl Into<EntityType>,
        foreign_key: impl Into<String>,
    ) -> Self {
        Self::IndirectReference(BelongsTo::new(target, foreign_key))
    }

    /// Builds the accessor for `source.property`, reading through `store`.
    pub fn accessor(
        &self,
        source: &EntityType,
        property: &str,
        store: &Arc<dyn Store>,
    ) -> PropertyAccessor {
        match self {
            Self::RelatedCollection(has_many) => {
                RelatedCollection::new(source.clone(), property, has_many.clone(), store.clone())
                    .into()
            }
            Self::IndirectReference(belongs_to) => {
                IndirectReference::new(source.clone(), property, belongs_to.clone(), store.clone())
                    .into()
            }
        }
    }
}

impl ComputedProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `entity_type.name`, replacing any computed property already
    /// registered under the same name.
    pub fn insert(
        &mut self,
        entity_type: impl Into<EntityType>,
        name: impl Into<String>,
        property: ComputedProperty,
    ) -> &mut Self {
        self.entity_types
            .entry(entity_type.into())
            .or_default()
            .insert(name.into(), property);
        self
    }

    pub fn get(&self, entity_type: &EntityType, name: &str) -> Option<&ComputedProperty> {
        self.entity_types.get(entity_type)?.get(name)
    }

    /// Adds every property of `other`; on a name collision `other` wins.
    pub fn extend(&mut self, other: ComputedProperties) {
        for (entity_type, properties) in other.entity_types {
            self.entity_types
                .entry(entity_type)
                .or_default()
                .extend(properties);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EntityType, &str, &ComputedProperty)> {
        self.entity_types.iter().flat_map(|(entity_type, properties)| {
            properties
                .iter()
                .map(move |(name, property)| (entity_type, &name[..], property))
        })
    }

    /// Number of computed properties across all entity types.
    pub fn len(&self) -> usize {
        self.entity_types.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
