use crate::Attribute;
use relprop_core::{schema::Attributes, EntityType, Error, Result};

/// Resolves ordinary attribute names to attribute accessors.
///
/// This is the last step of property resolution. Its errors are returned to
/// the caller of [`PropertyResolver::resolve`](crate::PropertyResolver::resolve)
/// unchanged.
pub trait AttributeResolver {
    fn resolve(&self, entity_type: &EntityType, name: &str) -> Result<Attribute>;
}

impl<F> AttributeResolver for F
where
    F: Fn(&EntityType, &str) -> Result<Attribute>,
{
    fn resolve(&self, entity_type: &EntityType, name: &str) -> Result<Attribute> {
        self(entity_type, name)
    }
}

/// Resolves attributes from the types declared for each entity type at
/// startup.
#[derive(Debug, Default, Clone)]
pub struct DeclaredAttributeResolver {
    attributes: Attributes,
}

impl DeclaredAttributeResolver {
    pub fn new(attributes: Attributes) -> Self {
        Self { attributes }
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl AttributeResolver for DeclaredAttributeResolver {
    fn resolve(&self, entity_type: &EntityType, name: &str) -> Result<Attribute> {
        let Some(ty) = self.attributes.get(entity_type, name) else {
            return Err(Error::unknown_attribute(entity_type, name));
        };

        Ok(Attribute::new(entity_type.clone(), name, ty.clone()))
    }
}

impl From<Attributes> for DeclaredAttributeResolver {
    fn from(value: Attributes) -> Self {
        Self::new(value)
    }
}
