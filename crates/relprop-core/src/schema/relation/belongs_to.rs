use super::*;

/// Many-to-one relation: the record of `target` whose key is stored in the
/// source entity's `foreign_key` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BelongsTo {
    /// Entity type of the referenced record
    pub target: EntityType,

    /// Attribute on the source entity holding the referenced key
    pub foreign_key: String,
}

impl BelongsTo {
    pub fn new(target: impl Into<EntityType>, foreign_key: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            foreign_key: foreign_key.into(),
        }
    }

    pub fn expr_ty(&self) -> stmt::Type {
        stmt::Type::Entity(self.target.clone())
    }
}
