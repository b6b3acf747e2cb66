//! Field descriptors parsed from `name[:type]` tokens.

use std::{convert::Infallible, fmt, str::FromStr};

use crate::type_mapper::{FieldType, TypeMapper};

/// Type tag used when a token carries no `:type` part.
pub const DEFAULT_TYPE_TAG: &str = "string";

/// A single resource field, e.g. `price:int`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    raw_type: String,
}

impl Field {
    pub fn new(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_type: raw_type.into(),
        }
    }

    /// Parse a `name[:type]` token.
    ///
    /// Splits on the first `:` only, so `a:b:c` has the raw type `b:c` (which
    /// then falls back to text). Parsing never fails; an empty name is kept as is.
    pub fn parse(token: &str) -> Self {
        match token.split_once(':') {
            Some((name, raw_type)) => Self::new(name, raw_type),
            None => Self::new(token, DEFAULT_TYPE_TAG),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type tag exactly as the user wrote it
    pub fn raw_type(&self) -> &str {
        &self.raw_type
    }

    pub fn field_type(&self) -> FieldType {
        FieldType::from_tag(&self.raw_type)
    }

    pub fn native_type(&self, mapper: &impl TypeMapper) -> &'static str {
        mapper.native_type(self.field_type())
    }

    pub fn schema_type(&self, mapper: &impl TypeMapper) -> &'static str {
        mapper.schema_type(self.field_type())
    }
}

impl FromStr for Field {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.raw_type)
    }
}
