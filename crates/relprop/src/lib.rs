pub mod accessor;
pub use accessor::{Attribute, IndirectReference, PropertyAccessor, RelatedCollection};

mod attribute_resolver;
pub use attribute_resolver::{AttributeResolver, DeclaredAttributeResolver};

mod computed;
pub use computed::{ComputedProperties, ComputedProperty};

pub mod gtfs;

mod path;
pub use path::{PropertyPath, ResolvedPath};

pub mod resolver;
pub use resolver::{FrozenResolver, PropertyResolver};

mod translation;
pub use translation::{DuplicateMappings, FieldNameTranslationTable};

pub use relprop_core::{schema, stmt, store, EntityType, Error, Result, Store};
