#![allow(dead_code)]

use relprop::gtfs::{SERVICE_CALENDAR, STOP_TIME, TRIP};
use relprop::schema::{Attributes, HasMany};
use relprop::stmt::{Entity, Type, Value};
use relprop::store::MemoryStore;
use relprop::{DeclaredAttributeResolver, EntityType, Error, Result, Store};

use std::cell::RefCell;

pub const STOP: EntityType = EntityType::from_static("Stop");

/// A store call, as seen by [`RecordingStore`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetRelated { target: EntityType, parent: Value },
    GetByKey { target: EntityType, key: Value },
}

/// Forwards to a [`MemoryStore`] and logs every call.
#[derive(Debug, Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    calls: RefCell<Vec<Call>>,
}

impl RecordingStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            calls: RefCell::default(),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }
}

impl Store for RecordingStore {
    fn get_related(&self, relation: &HasMany, parent: &Entity) -> Result<Vec<Entity>> {
        self.calls.borrow_mut().push(Call::GetRelated {
            target: relation.target.clone(),
            parent: (*parent.key).clone(),
        });
        self.inner.get_related(relation, parent)
    }

    fn get_by_key(&self, target: &EntityType, key: &Value) -> Result<Option<Entity>> {
        self.calls.borrow_mut().push(Call::GetByKey {
            target: target.clone(),
            key: key.clone(),
        });
        self.inner.get_by_key(target, key)
    }
}

/// A store whose every lookup fails.
#[derive(Debug)]
pub struct FailingStore;

impl Store for FailingStore {
    fn get_related(&self, _relation: &HasMany, _parent: &Entity) -> Result<Vec<Entity>> {
        Err(Error::store_operation_failed(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "connection reset by peer",
        )))
    }

    fn get_by_key(&self, target: &EntityType, _key: &Value) -> Result<Option<Entity>> {
        Err(anyhow::anyhow!("index for {target} is corrupt").into())
    }
}

pub fn attributes() -> DeclaredAttributeResolver {
    let mut attributes = Attributes::new();
    attributes
        .declare(TRIP, "id", Type::String)
        .declare(TRIP, "route", Type::String)
        .declare(TRIP, "serviceId", Type::String)
        .declare(TRIP, "tripHeadsign", Type::String)
        .declare(TRIP, "directionId", Type::I64)
        .declare(STOP_TIME, "trip", Type::Entity(TRIP))
        .declare(STOP_TIME, "stop", Type::Entity(STOP))
        .declare(STOP_TIME, "stopSequence", Type::I64)
        .declare(SERVICE_CALENDAR, "serviceId", Type::String)
        .declare(SERVICE_CALENDAR, "startDate", Type::String)
        .declare(SERVICE_CALENDAR, "endDate", Type::String)
        .declare(STOP, "id", Type::String)
        .declare(STOP, "name", Type::String);
    attributes.into()
}

pub fn stop(id: &str, name: &str) -> Entity {
    Entity::new(STOP, id).with("id", id).with("name", name)
}

pub fn trip(id: &str, service_id: &str) -> Entity {
    Entity::new(TRIP, id)
        .with("id", id)
        .with("serviceId", service_id)
}

/// Two trips on the weekday calendar. `T1` calls at `S1` then `S2`, `T2`
/// calls at `S2` only. `T3` runs on a calendar the feed does not contain.
pub fn feed() -> MemoryStore {
    let mut store = MemoryStore::new();

    store
        .insert(
            Entity::new(SERVICE_CALENDAR, "WEEKDAY")
                .with("serviceId", "WEEKDAY")
                .with("startDate", "20240101")
                .with("endDate", "20241231"),
        )
        .unwrap();

    store.insert(stop("S1", "Main St")).unwrap();
    store.insert(stop("S2", "Harbor")).unwrap();

    store.insert(trip("T1", "WEEKDAY")).unwrap();
    store.insert(trip("T2", "WEEKDAY")).unwrap();
    store.insert(trip("T3", "HOLIDAY")).unwrap();

    for (key, trip, stop_id, seq) in [(1, "T1", "S1", 0), (2, "T1", "S2", 1), (3, "T2", "S2", 0)] {
        let (_, stop_name) = [("S1", "Main St"), ("S2", "Harbor")]
            .into_iter()
            .find(|(id, _)| *id == stop_id)
            .unwrap();

        store
            .insert(
                Entity::new(STOP_TIME, key as i64)
                    .with("trip", trip)
                    .with("stop", stop(stop_id, stop_name))
                    .with("stopSequence", seq as i64),
            )
            .unwrap();
    }

    store
}

pub fn keys(value: &Value) -> Vec<Value> {
    value
        .as_list()
        .expect("expected a list")
        .iter()
        .map(|item| (*item.as_entity().expect("expected an entity").key).clone())
        .collect()
}
