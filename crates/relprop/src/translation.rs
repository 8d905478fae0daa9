use relprop_core::{schema::FieldMapping, EntityType, Error, Result};

use indexmap::IndexMap;
use tracing::debug;

/// What to do when a schema maps an external field name that is already
/// mapped to a different internal name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateMappings {
    /// The later mapping replaces the earlier one.
    #[default]
    Overwrite,

    /// Registration fails and the table is left unchanged.
    Reject,
}

/// Per entity type, maps external field names to internal attribute names.
///
/// Only one-to-one field mappings are recorded. Composite mappings have no
/// single internal name and are skipped.
#[derive(Debug, Default)]
pub struct FieldNameTranslationTable {
    entity_types: IndexMap<EntityType, IndexMap<String, String>>,
    duplicates: DuplicateMappings,
}

impl FieldNameTranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicate_mappings(duplicates: DuplicateMappings) -> Self {
        Self {
            entity_types: IndexMap::new(),
            duplicates,
        }
    }

    /// Merges the one-to-one mappings of `fields` into the mappings already
    /// registered for `entity_type`.
    ///
    /// Registering the same mappings twice is a no-op. Under
    /// [`DuplicateMappings::Reject`], a conflicting mapping fails the whole
    /// call and nothing from `fields` is applied.
    pub fn register<'a>(
        &mut self,
        entity_type: &EntityType,
        fields: impl IntoIterator<Item = &'a FieldMapping>,
    ) -> Result<()> {
        let mut staged = self
            .entity_types
            .get(entity_type)
            .cloned()
            .unwrap_or_default();

        let mut registered = 0;

        for single in fields.into_iter().filter_map(FieldMapping::as_single) {
            let external = &single.external_name;
            let internal = &single.internal_name;

            if let Some(existing) = staged.insert(external.clone(), internal.clone()) {
                if existing != *internal {
                    if self.duplicates == DuplicateMappings::Reject {
                        return Err(Error::conflicting_field_mapping(
                            entity_type,
                            external,
                            &existing,
                            internal,
                        ));
                    }

                    debug!(
                        %entity_type,
                        external = %external,
                        previous = %existing,
                        internal = %internal,
                        "field mapping overwritten"
                    );
                }
            }

            registered += 1;
        }

        self.entity_types.insert(entity_type.clone(), staged);
        debug!(%entity_type, registered, "registered field mappings");

        Ok(())
    }

    /// Returns the internal name `external_name` maps to for `entity_type`.
    pub fn lookup(&self, entity_type: &EntityType, external_name: &str) -> Option<&str> {
        self.entity_types
            .get(entity_type)?
            .get(external_name)
            .map(String::as_str)
    }

    pub fn is_registered(&self, entity_type: &EntityType) -> bool {
        self.entity_types.contains_key(entity_type)
    }

    /// Number of registered entity types.
    pub fn len(&self) -> usize {
        self.entity_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entity_types.is_empty()
    }

    /// Iterate the `(external, internal)` mappings of `entity_type`.
    pub fn mappings(&self, entity_type: &EntityType) -> impl Iterator<Item = (&str, &str)> {
        self.entity_types
            .get(entity_type)
            .into_iter()
            .flat_map(|fields| {
                fields
                    .iter()
                    .map(|(external, internal)| (&external[..], &internal[..]))
            })
    }
}
