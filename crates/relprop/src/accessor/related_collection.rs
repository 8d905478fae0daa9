use super::*;
use relprop_core::{schema::HasMany, Store};

use std::{fmt, sync::Arc};

/// Returns every record related to the entity through a `HasMany` relation.
#[derive(Clone)]
pub struct RelatedCollection {
    pub(crate) source: EntityType,
    pub(crate) property: String,
    relation: HasMany,
    ty: Type,
    store: Arc<dyn Store>,
}

impl RelatedCollection {
    pub fn new(
        source: impl Into<EntityType>,
        property: impl Into<String>,
        relation: HasMany,
        store: Arc<dyn Store>,
    ) -> Self {
        Self {
            source: source.into(),
            property: property.into(),
            ty: relation.expr_ty(),
            relation,
            store,
        }
    }

    pub fn relation(&self) -> &HasMany {
        &self.relation
    }

    /// Always a list of the relation's target type.
    pub fn return_type(&self) -> &Type {
        &self.ty
    }

    pub fn invoke(&self, entity: &Entity) -> Result<Value> {
        self.get_related(entity)
            .map_err(|err| err.context(Error::access(&self.source, &self.property)))
    }

    fn get_related(&self, entity: &Entity) -> Result<Value> {
        expect_entity_type(&self.source, entity)?;

        let records = self.store.get_related(&self.relation, entity)?;
        Ok(Value::List(records.into_iter().map(Value::Entity).collect()))
    }
}

impl PartialEq for RelatedCollection {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.property == other.property
            && self.relation == other.relation
            && Arc::ptr_eq(&self.store, &other.store)
    }
}

impl fmt::Debug for RelatedCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelatedCollection")
            .field("source", &self.source)
            .field("property", &self.property)
            .field("relation", &self.relation)
            .finish_non_exhaustive()
    }
}
