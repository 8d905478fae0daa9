use relprop::schema::{EntitySchema, FieldMapping};
use relprop::{DuplicateMappings, EntityType, FieldNameTranslationTable};

const TRIP: EntityType = EntityType::from_static("Trip");
const ROUTE: EntityType = EntityType::from_static("Route");

fn trip_schema() -> EntitySchema {
    EntitySchema::builder(TRIP)
        .field("trip_id", "id")
        .field_auto("service_id")
        .composite(&["start_date", "start_time"], "startInstant")
        .build()
}

#[test]
fn lookup_registered_names() {
    let mut table = FieldNameTranslationTable::new();
    table.register(&TRIP, &trip_schema().fields).unwrap();

    assert_eq!(table.lookup(&TRIP, "trip_id"), Some("id"));
    assert_eq!(table.lookup(&TRIP, "service_id"), Some("serviceId"));
}

#[test]
fn lookup_miss_is_none() {
    let mut table = FieldNameTranslationTable::new();
    table.register(&TRIP, &trip_schema().fields).unwrap();

    // Unmapped name on a registered type
    assert_eq!(table.lookup(&TRIP, "trip_headsign"), None);

    // Unregistered type
    assert_eq!(table.lookup(&ROUTE, "trip_id"), None);
    assert!(!table.is_registered(&ROUTE));
}

#[test]
fn composite_mappings_are_ignored() {
    let mut table = FieldNameTranslationTable::new();
    table.register(&TRIP, &trip_schema().fields).unwrap();

    assert_eq!(table.lookup(&TRIP, "start_date"), None);
    assert_eq!(table.lookup(&TRIP, "start_time"), None);
    assert_eq!(table.mappings(&TRIP).count(), 2);
}

#[test]
fn register_without_single_mappings_still_registers_type() {
    let mut table = FieldNameTranslationTable::new();
    let fields = [FieldMapping::composite(["lat", "lon"], "location")];
    table.register(&ROUTE, &fields).unwrap();

    assert!(table.is_registered(&ROUTE));
    assert_eq!(table.len(), 1);
    assert_eq!(table.mappings(&ROUTE).count(), 0);
}

#[test]
fn repeated_register_merges() {
    let mut table = FieldNameTranslationTable::new();
    table
        .register(&TRIP, &[FieldMapping::single("trip_id", "id")])
        .unwrap();
    table
        .register(&TRIP, &[FieldMapping::single("block_id", "blockId")])
        .unwrap();

    assert_eq!(table.lookup(&TRIP, "trip_id"), Some("id"));
    assert_eq!(table.lookup(&TRIP, "block_id"), Some("blockId"));
    assert_eq!(table.len(), 1);
}

#[test]
fn last_write_wins() {
    let mut table = FieldNameTranslationTable::new();
    table
        .register(&TRIP, &[FieldMapping::single("trip_id", "id")])
        .unwrap();
    table
        .register(&TRIP, &[FieldMapping::single("trip_id", "tripId")])
        .unwrap();

    assert_eq!(table.lookup(&TRIP, "trip_id"), Some("tripId"));

    // Within a single call too
    table
        .register(
            &TRIP,
            &[
                FieldMapping::single("route_id", "route"),
                FieldMapping::single("route_id", "routeId"),
            ],
        )
        .unwrap();
    assert_eq!(table.lookup(&TRIP, "route_id"), Some("routeId"));
}

#[test]
fn register_is_idempotent() {
    let schema = trip_schema();

    for policy in [DuplicateMappings::Overwrite, DuplicateMappings::Reject] {
        let mut table = FieldNameTranslationTable::with_duplicate_mappings(policy);
        table.register(&TRIP, &schema.fields).unwrap();
        let before: Vec<_> = table
            .mappings(&TRIP)
            .map(|(e, i)| (e.to_string(), i.to_string()))
            .collect();

        table.register(&TRIP, &schema.fields).unwrap();
        let after: Vec<_> = table
            .mappings(&TRIP)
            .map(|(e, i)| (e.to_string(), i.to_string()))
            .collect();

        assert_eq!(before, after);
        assert_eq!(table.lookup(&TRIP, "trip_id"), Some("id"));
    }
}

#[test]
fn reject_conflicting_remap() {
    let mut table = FieldNameTranslationTable::with_duplicate_mappings(DuplicateMappings::Reject);
    table.register(&TRIP, &trip_schema().fields).unwrap();

    let err = table
        .register(
            &TRIP,
            &[
                FieldMapping::single("block_id", "blockId"),
                FieldMapping::single("trip_id", "tripId"),
            ],
        )
        .unwrap_err();

    assert!(err.is_conflicting_field_mapping());
    assert_eq!(
        err.to_string(),
        "conflicting field mapping for `Trip.trip_id`: already mapped to `id`, cannot remap to `tripId`"
    );

    // Nothing from the failed call was applied
    assert_eq!(table.lookup(&TRIP, "trip_id"), Some("id"));
    assert_eq!(table.lookup(&TRIP, "block_id"), None);
}

#[test]
fn reject_allows_new_types_and_names() {
    let mut table = FieldNameTranslationTable::with_duplicate_mappings(DuplicateMappings::Reject);
    table.register(&TRIP, &trip_schema().fields).unwrap();
    table
        .register(&TRIP, &[FieldMapping::single("block_id", "blockId")])
        .unwrap();
    table
        .register(&ROUTE, &[FieldMapping::single("trip_id", "firstTrip")])
        .unwrap();

    assert_eq!(table.lookup(&TRIP, "block_id"), Some("blockId"));
    assert_eq!(table.lookup(&ROUTE, "trip_id"), Some("firstTrip"));
}
