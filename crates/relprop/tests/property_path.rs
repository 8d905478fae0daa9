mod support;

use relprop::gtfs::{self, SERVICE_CALENDAR, STOP_TIME, TRIP};
use relprop::stmt::{Entity, Type, Value};
use relprop::{PropertyPath, PropertyResolver};

use pretty_assertions::assert_eq;
use std::sync::Arc;

fn resolver() -> PropertyResolver {
    let mut resolver = PropertyResolver::gtfs(Arc::new(support::feed()), support::attributes());
    for schema in gtfs::schemas() {
        resolver.add_schema(&schema).unwrap();
    }
    resolver
}

#[test]
fn parse_and_display() {
    let path: PropertyPath = "stopTimes.stop.name".parse().unwrap();
    assert_eq!(
        path.segments().collect::<Vec<_>>(),
        ["stopTimes", "stop", "name"]
    );
    assert_eq!(path.to_string(), "stopTimes.stop.name");
}

#[test]
fn parse_rejects_empty_segments() {
    for src in ["", ".", "stopTimes.", ".stop", "stopTimes..stop"] {
        let err = PropertyPath::parse(src).unwrap_err();
        assert!(err.is_invalid_property_path(), "{src:?}");
    }
}

#[test]
fn single_segment_is_plain_resolution() {
    let resolver = resolver();
    let path = PropertyPath::parse("trip_id").unwrap();

    let resolved = path.resolve(&resolver, &TRIP).unwrap();
    assert_eq!(
        resolved.accessors(),
        [resolver.resolve(&TRIP, "trip_id").unwrap()]
    );
    assert_eq!(
        resolved.invoke(&support::trip("T1", "WEEKDAY")).unwrap(),
        Value::from("T1")
    );
}

#[test]
fn through_indirect_reference() {
    let resolver = resolver();
    let resolved = PropertyPath::parse("calendar.start_date")
        .unwrap()
        .resolve(&resolver, &TRIP)
        .unwrap();

    assert_eq!(resolved.return_type(), &Type::String);
    assert_eq!(
        resolved.invoke(&support::trip("T1", "WEEKDAY")).unwrap(),
        Value::from("20240101")
    );
}

#[test]
fn through_collection_flattens() {
    let resolver = resolver();
    let resolved = PropertyPath::parse("stopTimes.stop_id")
        .unwrap()
        .resolve(&resolver, &TRIP)
        .unwrap();

    assert_eq!(resolved.return_type(), &Type::list(support::STOP));

    let stops = resolved.invoke(&support::trip("T1", "WEEKDAY")).unwrap();
    assert_eq!(support::keys(&stops), [Value::from("S1"), Value::from("S2")]);
}

#[test]
fn through_collection_then_attribute() {
    let resolver = resolver();
    let resolved = PropertyPath::parse("stopTimes.stop.name")
        .unwrap()
        .resolve(&resolver, &TRIP)
        .unwrap();

    assert_eq!(resolved.return_type(), &Type::list(Type::String));
    assert_eq!(
        resolved.invoke(&support::trip("T1", "WEEKDAY")).unwrap(),
        Value::List(vec![Value::from("Main St"), Value::from("Harbor")])
    );
    assert_eq!(
        resolved.invoke(&support::trip("T3", "HOLIDAY")).unwrap(),
        Value::List(vec![])
    );
}

#[test]
fn null_intermediate_is_null() {
    let resolver = resolver();
    let resolved = PropertyPath::parse("stop.name")
        .unwrap()
        .resolve(&resolver, &STOP_TIME)
        .unwrap();

    let stop_time = Entity::new(STOP_TIME, 9i64).with("trip", "T1");
    assert_eq!(resolved.invoke(&stop_time).unwrap(), Value::Null);
}

#[test]
fn scalar_intermediate_is_rejected() {
    let resolver = resolver();
    let err = PropertyPath::parse("service_id.start_date")
        .unwrap()
        .resolve(&resolver, &TRIP)
        .unwrap_err();

    assert!(err.is_invalid_property_path());
    assert_eq!(
        err.to_string(),
        "invalid property path `service_id.start_date`: `Trip.service_id` does not produce an entity"
    );
}

#[test]
fn unknown_segment_fails_resolution() {
    let resolver = resolver();
    let err = PropertyPath::parse("calendar.holiday_name")
        .unwrap()
        .resolve(&resolver, &TRIP)
        .unwrap_err();

    assert!(err.is_unknown_attribute());
    assert_eq!(
        err.to_string(),
        "unknown attribute `holiday_name` for entity type `ServiceCalendar`"
    );
}

#[test]
fn invocation_errors_propagate() {
    let resolver = resolver();
    let resolved = PropertyPath::parse("calendar.end_date")
        .unwrap()
        .resolve(&resolver, &TRIP)
        .unwrap();

    let err = resolved
        .invoke(&support::trip("T3", "HOLIDAY"))
        .unwrap_err();
    assert!(err.is_access());
    assert!(err.root().is_record_not_found());

    let calendar = Entity::new(SERVICE_CALENDAR, "WEEKDAY");
    assert!(resolved.invoke(&calendar).unwrap_err().is_access());
}
