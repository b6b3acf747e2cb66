use vaporgen_core::{
    DEFAULT_TYPE_TAG, Field, FieldType, capitalize, is_valid_identifier, pluralize,
};

/// A resource to scaffold: its capitalized name and its fields in
/// declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    name: String,
    fields: Vec<Field>,
}

impl Resource {
    /// Create a resource, capitalizing `name`. Field order is kept as given.
    pub fn new(name: &str, fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            name: capitalize(name),
            fields: fields.into_iter().collect(),
        }
    }

    /// Parse a resource from a name and raw `name[:type]` tokens
    pub fn parse<S: AsRef<str>>(name: &str, tokens: &[S]) -> Self {
        Self::new(name, tokens.iter().map(|t| Field::parse(t.as_ref())))
    }

    /// Type name used for the model class and file names
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Lower-cased plural used as table name, route segment and collection variable
    pub fn plural(&self) -> String {
        pluralize(&self.name.to_lowercase())
    }

    /// Problems that will show up in the generated code: names that are not
    /// valid identifiers and type tags that silently fall back to text.
    ///
    /// Nothing here stops generation.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !is_valid_identifier(&self.name) {
            warnings.push(format!(
                "resource name '{}' is not a valid Swift identifier",
                self.name
            ));
        }

        for field in &self.fields {
            if !is_valid_identifier(field.name()) {
                warnings.push(format!(
                    "field name '{}' is not a valid Swift identifier",
                    field.name()
                ));
            }

            let tag = field.raw_type();
            if !FieldType::is_recognized_tag(tag) && !tag.eq_ignore_ascii_case(DEFAULT_TYPE_TAG) {
                warnings.push(format!(
                    "unknown type '{}' for field '{}', using {}",
                    tag,
                    field.name(),
                    DEFAULT_TYPE_TAG
                ));
            }
        }

        warnings
    }
}
