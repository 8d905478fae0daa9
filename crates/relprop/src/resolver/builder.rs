use super::PropertyResolver;
use crate::{
    AttributeResolver, ComputedProperties, ComputedProperty, DuplicateMappings,
    FieldNameTranslationTable, PropertyAccessor,
};
use relprop_core::{EntityType, Store};

use indexmap::IndexMap;
use std::sync::Arc;

pub struct Builder<R> {
    store: Arc<dyn Store>,

    fallback: R,

    computed: ComputedProperties,

    /// Policy for remapped external field names
    duplicate_mappings: DuplicateMappings,
}

impl<R: AttributeResolver> Builder<R> {
    pub(super) fn new(store: Arc<dyn Store>, fallback: R) -> Self {
        Self {
            store,
            fallback,
            computed: ComputedProperties::new(),
            duplicate_mappings: DuplicateMappings::default(),
        }
    }

    /// Registers a computed property for `entity_type.name`.
    pub fn computed(
        mut self,
        entity_type: impl Into<EntityType>,
        name: impl Into<String>,
        property: ComputedProperty,
    ) -> Self {
        self.computed.insert(entity_type, name, property);
        self
    }

    pub fn computed_properties(mut self, properties: ComputedProperties) -> Self {
        self.computed.extend(properties);
        self
    }

    pub fn duplicate_mappings(mut self, policy: DuplicateMappings) -> Self {
        self.duplicate_mappings = policy;
        self
    }

    pub fn build(self) -> PropertyResolver<R> {
        let mut computed: IndexMap<EntityType, IndexMap<String, PropertyAccessor>> =
            IndexMap::new();

        for (entity_type, name, property) in self.computed.iter() {
            computed
                .entry(entity_type.clone())
                .or_default()
                .insert(name.to_string(), property.accessor(entity_type, name, &self.store));
        }

        PropertyResolver {
            computed,
            translations: FieldNameTranslationTable::with_duplicate_mappings(
                self.duplicate_mappings,
            ),
            fallback: self.fallback,
        }
    }
}
