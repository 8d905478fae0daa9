use super::*;

/// Reads an attribute stored on the entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Entity type the attribute is declared on
    pub source: EntityType,

    /// Internal attribute name
    pub name: String,

    /// Declared type of the attribute
    pub ty: Type,
}

impl Attribute {
    pub fn new(source: impl Into<EntityType>, name: impl Into<String>, ty: Type) -> Self {
        Self {
            source: source.into(),
            name: name.into(),
            ty,
        }
    }

    /// Returns the stored value, or null if the attribute was never set.
    pub fn invoke(&self, entity: &Entity) -> Result<Value> {
        expect_entity_type(&self.source, entity)
            .map_err(|err| err.context(Error::access(&self.source, &self.name)))?;

        Ok(entity.get(&self.name).cloned().unwrap_or_default())
    }
}
