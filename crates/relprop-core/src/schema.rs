//! Entity types, schema descriptions and relations

mod attributes;
pub use attributes::Attributes;

mod entity_schema;
pub use entity_schema::{Builder, EntitySchema};

mod entity_type;
pub use entity_type::EntityType;

mod field_mapping;
pub use field_mapping::{CompositeFieldMapping, FieldMapping, SingleFieldMapping};

mod name;
pub use name::Name;

mod relation;
pub use relation::{BelongsTo, HasMany};
