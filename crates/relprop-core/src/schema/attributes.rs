use super::EntityType;
use crate::stmt::Type;
use indexmap::IndexMap;

/// Declared attributes of each entity type: internal attribute name to the
/// attribute's type.
///
/// Populated once at startup, before any attribute is resolved.
#[derive(Debug, Default, Clone)]
pub struct Attributes {
    entity_types: IndexMap<EntityType, IndexMap<String, Type>>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name` on `entity_type`. Declaring the same name again
    /// replaces its type.
    pub fn declare(
        &mut self,
        entity_type: impl Into<EntityType>,
        name: impl Into<String>,
        ty: Type,
    ) -> &mut Self {
        self.entity_types
            .entry(entity_type.into())
            .or_default()
            .insert(name.into(), ty);
        self
    }

    pub fn get(&self, entity_type: &EntityType, name: &str) -> Option<&Type> {
        self.entity_types.get(entity_type)?.get(name)
    }
}
