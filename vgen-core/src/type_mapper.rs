//! Type mapping between field type tags and target-language types.

/// Supported field types.
///
/// This is a closed, language-agnostic vocabulary. Use `TypeMapper` to
/// convert to language-specific type strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Int,
    Double,
    Bool,
    Date,
    Uuid,
    /// Fallback for every tag outside the vocabulary, `string` included.
    Text,
}

impl FieldType {
    /// Tags that select a non-text variant.
    pub const RECOGNIZED_TAGS: [&'static str; 5] = ["int", "double", "bool", "date", "uuid"];

    /// Resolve a type tag, case-insensitively. Never fails.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "int" => FieldType::Int,
            "double" => FieldType::Double,
            "bool" => FieldType::Bool,
            "date" => FieldType::Date,
            "uuid" => FieldType::Uuid,
            _ => FieldType::Text,
        }
    }

    /// Whether `tag` names a variant other than the text fallback.
    pub fn is_recognized_tag(tag: &str) -> bool {
        Self::from_tag(tag) != FieldType::Text
    }

    /// Get the canonical tag for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Int => "int",
            FieldType::Double => "double",
            FieldType::Bool => "bool",
            FieldType::Date => "date",
            FieldType::Uuid => "uuid",
            FieldType::Text => "string",
        }
    }
}

/// Trait for mapping field types to language-specific type strings.
///
/// One implementation per target framework.
pub trait TypeMapper {
    /// Map a field type to the property type used in model code
    fn native_type(&self, field_type: FieldType) -> &'static str;

    /// Map a field type to the column type used in schema migrations
    fn schema_type(&self, field_type: FieldType) -> &'static str;
}
