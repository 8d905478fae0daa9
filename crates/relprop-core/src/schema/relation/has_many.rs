use super::*;

/// One-to-many relation: the records of `target` whose `foreign_key`
/// attribute holds the parent's key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HasMany {
    /// Entity type of the related records
    pub target: EntityType,

    /// Attribute on the related records that references the parent
    pub foreign_key: String,
}

impl HasMany {
    pub fn new(target: impl Into<EntityType>, foreign_key: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            foreign_key: foreign_key.into(),
        }
    }

    /// The type the relation evaluates to from the parent's point of view.
    pub fn expr_ty(&self) -> stmt::Type {
        stmt::Type::list(stmt::Type::Entity(self.target.clone()))
    }
}
