//! Resolution of `(entity type, property name)` pairs to accessors.

mod builder;
pub use builder::Builder;

mod frozen;
pub use frozen::FrozenResolver;

use crate::{
    gtfs, AttributeResolver, DeclaredAttributeResolver, FieldNameTranslationTable,
    PropertyAccessor,
};
use relprop_core::{
    schema::{EntitySchema, FieldMapping},
    EntityType, Result, Store,
};

use indexmap::IndexMap;
use std::sync::Arc;
use tracing::trace;

/// Resolves external property names to accessors.
///
/// Resolution tries, in order:
///
/// 1. the computed properties registered for the entity type,
/// 2. the field name translation table, which may rename the property to its
///    internal attribute name,
/// 3. the fallback [`AttributeResolver`].
///
/// Field mappings are registered through `&mut self` and resolution happens
/// through `&self`, so all registration is done before the resolver is
/// shared. [`PropertyResolver::freeze`] makes that transition explicit.
#[derive(Debug)]
pub struct PropertyResolver<R = DeclaredAttributeResolver> {
    /// Computed property accessors, built once with the store captured
    computed: IndexMap<EntityType, IndexMap<String, PropertyAccessor>>,

    translations: FieldNameTranslationTable,

    fallback: R,
}

impl<R: AttributeResolver> PropertyResolver<R> {
    pub fn builder(store: Arc<dyn Store>, fallback: R) -> Builder<R> {
        Builder::new(store, fallback)
    }

    /// A resolver with no computed properties.
    pub fn new(store: Arc<dyn Store>, fallback: R) -> Self {
        Self::builder(store, fallback).build()
    }

    /// A resolver with the GTFS computed properties (`Trip.stopTimes`,
    /// `Trip.calendar`).
    pub fn gtfs(store: Arc<dyn Store>, fallback: R) -> Self {
        Self::builder(store, fallback)
            .computed_properties(gtfs::computed_properties())
            .build()
    }

    /// Registers the field mappings of one entity type.
    pub fn register<'a>(
        &mut self,
        entity_type: &EntityType,
        fields: impl IntoIterator<Item = &'a FieldMapping>,
    ) -> Result<()> {
        self.translations.register(entity_type, fields)
    }

    pub fn add_schema(&mut self, schema: &EntitySchema) -> Result<()> {
        self.register(&schema.entity_type, &schema.fields)
    }

    pub fn translations(&self) -> &FieldNameTranslationTable {
        &self.translations
    }

    pub fn fallback(&self) -> &R {
        &self.fallback
    }

    /// Resolves `name` on `entity_type` to an accessor.
    ///
    /// Only the fallback resolver can fail; its error is returned unchanged.
    pub fn resolve(&self, entity_type: &EntityType, name: &str) -> Result<PropertyAccessor> {
        if let Some(accessor) = self
            .computed
            .get(entity_type)
            .and_then(|properties| properties.get(name))
        {
            trace!(%entity_type, property = name, "resolved computed property");
            return Ok(accessor.clone());
        }

        let attribute = match self.translations.lookup(entity_type, name) {
            Some(internal) => {
                trace!(%entity_type, property = name, internal, "translated property name");
                internal
            }
            None => name,
        };

        self.fallback
            .resolve(entity_type, attribute)
            .map(PropertyAccessor::Attribute)
    }

    /// Ends the registration phase.
    pub fn freeze(self) -> FrozenResolver<R> {
        FrozenResolver::new(self)
    }
}
