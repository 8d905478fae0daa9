/// Describes how fields of a serialized row map onto an entity's attributes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum FieldMapping {
    /// One external field read into one attribute
    Single(SingleFieldMapping),

    /// Several external fields combined into one attribute
    Composite(CompositeFieldMapping),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SingleFieldMapping {
    /// Field name as it appears in the row header
    pub external_name: String,

    /// Name of the attribute the field is stored in
    pub internal_name: String,

    /// True if rows must carry a value for the field
    #[cfg_attr(feature = "serde", serde(default))]
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompositeFieldMapping {
    /// Every row field that contributes to the attribute
    pub external_names: Vec<String>,

    pub internal_name: String,
}

impl FieldMapping {
    pub fn single(external_name: impl Into<String>, internal_name: impl Into<String>) -> Self {
        Self::Single(SingleFieldMapping {
            external_name: external_name.into(),
            internal_name: internal_name.into(),
            required: false,
        })
    }

    pub fn composite<I, S>(external_names: I, internal_name: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Composite(CompositeFieldMapping {
            external_names: external_names.into_iter().map(Into::into).collect(),
            internal_name: internal_name.into(),
        })
    }

    /// The attribute this mapping writes to.
    pub fn internal_name(&self) -> &str {
        match self {
            Self::Single(single) => &single.internal_name,
            Self::Composite(composite) => &composite.internal_name,
        }
    }

    pub fn as_single(&self) -> Option<&SingleFieldMapping> {
        match self {
            Self::Single(single) => Some(single),
            Self::Composite(_) => None,
        }
    }

    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single(_))
    }
}

impl From<SingleFieldMapping> for FieldMapping {
    fn from(value: SingleFieldMapping) -> Self {
        Self::Single(value)
    }
}

impl From<CompositeFieldMapping> for FieldMapping {
    fn from(value: CompositeFieldMapping) -> Self {
        Self::Composite(value)
    }
}
