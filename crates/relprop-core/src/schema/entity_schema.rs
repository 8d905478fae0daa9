use super::{EntityType, FieldMapping, Name, SingleFieldMapping};

/// Schema description of one entity type: the ordered field mappings used to
/// read its rows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitySchema {
    pub entity_type: EntityType,

    pub fields: Vec<FieldMapping>,
}

#[derive(Debug)]
pub struct Builder {
    schema: EntitySchema,
}

impl EntitySchema {
    pub fn builder(entity_type: impl Into<EntityType>) -> Builder {
        Builder {
            schema: EntitySchema {
                entity_type: entity_type.into(),
                fields: vec![],
            },
        }
    }

    /// Iterate the one-to-one mappings as `(external, internal)` pairs, in
    /// declaration order.
    pub fn single_fields(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.fields.iter().filter_map(|field| {
            field
                .as_single()
                .map(|single| (&single.external_name[..], &single.internal_name[..]))
        })
    }
}

impl Builder {
    /// Maps `external_name` onto the attribute `internal_name`.
    pub fn field(mut self, external_name: &str, internal_name: &str) -> Self {
        self.schema
            .fields
            .push(FieldMapping::single(external_name, internal_name));
        self
    }

    pub fn required_field(mut self, external_name: &str, internal_name: &str) -> Self {
        self.schema.fields.push(
            SingleFieldMapping {
                external_name: external_name.to_string(),
                internal_name: internal_name.to_string(),
                required: true,
            }
            .into(),
        );
        self
    }

    /// Maps a snake_case row field onto the camelCase attribute of the same
    /// words, e.g. `service_id` onto `serviceId`.
    pub fn field_auto(self, external_name: &str) -> Self {
        let internal_name = Name::new(external_name).camel_case();
        self.field(external_name, &internal_name)
    }

    pub fn composite(mut self, external_names: &[&str], internal_name: &str) -> Self {
        self.schema.fields.push(FieldMapping::composite(
            external_names.iter().copied(),
            internal_name,
        ));
        self
    }

    pub fn build(self) -> EntitySchema {
        self.schema
    }
}
