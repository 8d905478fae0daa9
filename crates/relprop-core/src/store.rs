mod memory;
pub use memory::MemoryStore;

use crate::{
    schema::{EntityType, HasMany},
    stmt::{Entity, Value},
    Result,
};

use std::fmt::Debug;

/// Relational accessor over the fully loaded entity graph.
///
/// Lookups are synchronous and read-only. Implementations report their own
/// failures with [`Error::store_operation_failed`](crate::Error::store_operation_failed).
pub trait Store: Debug {
    /// Returns the records related to `parent` through `relation`.
    fn get_related(&self, relation: &HasMany, parent: &Entity) -> Result<Vec<Entity>>;

    /// Returns the record of `target` with the given key, or `None` if there
    /// is no such record.
    fn get_by_key(&self, target: &EntityType, key: &Value) -> Result<Option<Entity>>;
}
