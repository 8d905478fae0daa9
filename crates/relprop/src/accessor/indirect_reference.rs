use super::*;
use relprop_core::{schema::BelongsTo, Store};

use std::{fmt, sync::Arc};

/// Follows a key stored on the entity to the record it references.
#[derive(Clone)]
pub struct IndirectReference {
    pub(crate) source: EntityType,
    pub(crate) property: String,
    relation: BelongsTo,
    ty: Type,
    store: Arc<dyn Store>,
}

impl IndirectReference {
    pub fn new(
        source: impl Into<EntityType>,
        property: impl Into<String>,
        relation: BelongsTo,
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

    pub fn relation(&self) -> &BelongsTo {
        &self.relation
    }

    /// Always the referenced entity type.
    pub fn return_type(&self) -> &Type {
        &self.ty
    }

    pub fn invoke(&self, entity: &Entity) -> Result<Value> {
        self.get_referenced(entity)
            .map_err(|err| err.context(Error::access(&self.source, &self.property)))
    }

    fn get_referenced(&self, entity: &Entity) -> Result<Value> {
        expect_entity_type(&self.source, entity)?;

        // The key attribute may hold the referenced entity itself once the
        // graph has been linked.
        let key = match entity.get(&self.relation.foreign_key) {
            None | Some(Value::Null) => {
                return Err(Error::missing_key(&entity.ty, &self.relation.foreign_key))
            }
            Some(Value::Entity(referenced)) => {
                expect_entity_type(&self.relation.target, referenced)?;
                &*referenced.key
            }
            Some(key) => key,
        };

        match self.store.get_by_key(&self.relation.target, key)? {
            Some(record) => Ok(Value::Entity(record)),
            None => Err(Error::record_not_found(&self.relation.target, key)),
        }
    }
}

impl PartialEq for IndirectReference {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.property == other.property
            && self.relation == other.relation
            && Arc::ptr_eq(&self.store, &other.store)
    }
}

impl fmt::Debug for IndirectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndirectReference")
            .field("source", &self.source)
            .field("property", &self.property)
            .field("relation", &self.relation)
            .finish_non_exhaustive()
    }
}
