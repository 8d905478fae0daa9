//! Computed properties and schema descriptions for GTFS feeds.

use crate::{ComputedProperties, ComputedProperty};
use relprop_core::schema::EntitySchema;
use relprop_core::EntityType;

pub const TRIP: EntityType = EntityType::from_static("Trip");
pub const STOP_TIME: EntityType = EntityType::from_static("StopTime");
pub const SERVICE_CALENDAR: EntityType = EntityType::from_static("ServiceCalendar");

/// `Trip.stopTimes` and `Trip.calendar`.
///
/// Stop times reference their trip through `trip`; a trip references its
/// calendar through `serviceId`.
pub fn computed_properties() -> ComputedProperties {
    let mut properties = ComputedProperties::new();
    properties
        .insert(
            TRIP,
            "stopTimes",
            ComputedProperty::related_collection(STOP_TIME, "trip"),
        )
        .insert(
            TRIP,
            "calendar",
            ComputedProperty::indirect_reference(SERVICE_CALENDAR, "serviceId"),
        );
    properties
}

/// Field mappings for `trips.txt`, `stop_times.txt` and `calendar.txt`.
pub fn schemas() -> Vec<EntitySchema> {
    vec![
        EntitySchema::builder(TRIP)
            .required_field("trip_id", "id")
            .required_field("route_id", "route")
            .required_field("service_id", "serviceId")
            .field_auto("trip_headsign")
            .field_auto("trip_short_name")
            .field_auto("direction_id")
            .field_auto("block_id")
            .field_auto("shape_id")
            .build(),
        EntitySchema::builder(STOP_TIME)
            .required_field("trip_id", "trip")
            .required_field("stop_id", "stop")
            .required_field("stop_sequence", "stopSequence")
            .field_auto("arrival_time")
            .field_auto("departure_time")
            .field_auto("stop_headsign")
            .build(),
        EntitySchema::builder(SERVICE_CALENDAR)
            .required_field("service_id", "serviceId")
            .required_field("start_date", "startDate")
            .required_field("end_date", "endDate")
            .field_auto("monday")
            .field_auto("tuesday")
            .field_auto("wednesday")
            .field_auto("thursday")
            .field_auto("friday")
            .field_auto("saturday")
            .field_auto("sunday")
            .build(),
    ]
}
