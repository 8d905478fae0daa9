use super::Store;
use crate::{
    bail,
    schema::{EntityType, HasMany},
    stmt::{Entity, Value},
    Result,
};

use indexmap::IndexMap;

/// A [`Store`] holding every entity in memory.
///
/// Key lookups go through a per-type index. Related-record lookups scan the
/// target type's records for a matching foreign key. A foreign key held as a
/// raw key matches the parent by key alone; one held as a linked entity must
/// also match the parent's type.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: IndexMap<EntityType, IndexMap<Key, Entity>>,
}

/// Index key. Only scalar values can be primary keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Key {
    I64(i64),
    String(String),
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `entity`, replacing any record of the same type with the same
    /// key.
    pub fn insert(&mut self, entity: Entity) -> Result<()> {
        let Some(key) = Key::from_value(&entity.key) else {
            bail!(
                "cannot store {} with key {}: keys must be strings or integers",
                entity.ty,
                entity.key
            );
        };

        self.tables
            .entry(entity.ty.clone())
            .or_default()
            .insert(key, entity);
        Ok(())
    }

    /// Number of records of `ty`.
    pub fn count(&self, ty: &EntityType) -> usize {
        self.tables.get(ty).map(IndexMap::len).unwrap_or(0)
    }

    pub fn records(&self, ty: &EntityType) -> impl Iterator<Item = &Entity> {
        self.tables.get(ty).into_iter().flat_map(IndexMap::values)
    }
}

impl Store for MemoryStore {
    fn get_related(&self, relation: &HasMany, parent: &Entity) -> Result<Vec<Entity>> {
        Ok(self
            .records(&relation.target)
            .filter(|record| match record.get(&relation.foreign_key) {
                Some(Value::Entity(referenced)) => {
                    referenced.ty == parent.ty && referenced.key == parent.key
                }
                Some(value) => *value == *parent.key,
                None => false,
            })
            .cloned()
            .collect())
    }

    fn get_by_key(&self, target: &EntityType, key: &Value) -> Result<Option<Entity>> {
        let Some(key) = Key::from_value(key) else {
            return Ok(None);
        };

        Ok(self
            .tables
            .get(target)
            .and_then(|table| table.get(&key))
            .cloned())
    }
}

impl Key {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::I64(v) => Some(Self::I64(*v)),
            Value::String(v) => Some(Self::String(v.clone())),
            _ => None,
        }
    }
}
