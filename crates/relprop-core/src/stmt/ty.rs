use crate::schema::EntityType;

/// The static type of a property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 64-bit integer
    I64,

    /// String type
    String,

    /// An instance of an entity type
    Entity(EntityType),

    /// A list of a single type
    List(Box<Type>),

    /// A type that is not known ahead of invocation
    Unknown,
}

impl Type {
    pub fn list(ty: impl Into<Self>) -> Self {
        Self::List(Box::new(ty.into()))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn is_entity(&self) -> bool {
        matches!(self, Self::Entity(_))
    }

    /// The entity type this type produces, looking through one list level.
    pub fn entity_type(&self) -> Option<&EntityType> {
        match self {
            Self::Entity(ty) => Some(ty),
            Self::List(item) => match &**item {
                Self::Entity(ty) => Some(ty),
                _ => None,
            },
            _ => None,
        }
    }
}

impl From<EntityType> for Type {
    fn from(value: EntityType) -> Self {
        Self::Entity(value)
    }
}
