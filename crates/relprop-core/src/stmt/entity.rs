use super::Value;
use crate::schema::EntityType;
use indexmap::IndexMap;

/// A materialized record of one entity type.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// The entity's type
    pub ty: EntityType,

    /// Primary key, used by the store for key lookups
    pub key: Box<Value>,

    /// Attribute values by internal attribute name, in assignment order
    pub attributes: IndexMap<String, Value>,
}

impl Entity {
    pub fn new(ty: impl Into<EntityType>, key: impl Into<Value>) -> Self {
        Self {
            ty: ty.into(),
            key: Box::new(key.into()),
            attributes: IndexMap::new(),
        }
    }

    /// Builder-style variant of [`Entity::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn is_a(&self, ty: &EntityType) -> bool {
        self.ty == *ty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linked_entity_as_attribute() {
        let calendar = Entity::new("ServiceCalendar", "WEEKDAY");
        let trip = Entity::new("Trip", "T1").with("serviceId", calendar.clone());

        assert_eq!(*trip.key, Value::from("T1"));
        assert_eq!(trip.get("serviceId"), Some(&Value::Entity(calendar)));
        assert_eq!(
            trip.get("serviceId").and_then(Value::as_entity).map(|e| &*e.key),
            Some(&Value::from("WEEKDAY"))
        );
    }
}
