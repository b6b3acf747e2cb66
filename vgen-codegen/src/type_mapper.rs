use vaporgen_core::{FieldType, TypeMapper};

/// Maps field types to Swift property types and Fluent column types
#[derive(Debug, Clone, Copy, Default)]
pub struct VaporTypeMapper;

impl TypeMapper for VaporTypeMapper {
    fn native_type(&self, field_type: FieldType) -> &'static str {
        match field_type {
            FieldType::Int => "Int",
            FieldType::Double => "Double",
            FieldType::Bool => "Bool",
            FieldType::Date => "Date",
            FieldType::Uuid => "UUID",
            FieldType::Text => "String",
        }
    }

    fn schema_type(&self, field_type: FieldType) -> &'static str {
        match field_type {
            FieldType::Int => ".int",
            FieldType::Double => ".double",
            FieldType::Bool => ".bool",
            FieldType::Date => ".datetime",
            FieldType::Uuid => ".uuid",
            FieldType::Text => ".string",
        }
    }
}
