use std::path::{Path, PathBuf};

use vaporgen_core::{Field, GeneratedFile, SOURCE_EXTENSION};

use super::MODELS_DIR;
use crate::{
    Resource, VaporTypeMapper,
    builder::{CodeBuilder, SwiftFile},
};

/// The Fluent model class, e.g. `Models/Product.swift`
pub struct ModelSwift<'a> {
    resource: &'a Resource,
}

impl<'a> ModelSwift<'a> {
    pub fn new(resource: &'a Resource) -> Self {
        Self { resource }
    }

    fn property(b: CodeBuilder, field: &Field) -> CodeBuilder {
        b.blank()
            .line(&format!("@Field(key: \"{}\")", field.name()))
            .line(&format!(
                "var {}: {}",
                field.name(),
                field.native_type(&VaporTypeMapper)
            ))
    }

    /// `init(id: UUID? = nil, <fields...>)` with parameters in declaration order
    fn full_init_signature(&self) -> String {
        let params = std::iter::once("id: UUID? = nil".to_string())
            .chain(self.resource.fields().iter().map(|field| {
                format!("{}: {}", field.name(), field.native_type(&VaporTypeMapper))
            }))
            .collect::<Vec<_>>()
            .join(", ");
        format!("init({}) {{", params)
    }

    fn build_class(&self) -> String {
        let name = self.resource.name();
        let fields = self.resource.fields();

        CodeBuilder::swift()
            .block(
                &format!("final class {}: Model, Content, @unchecked Sendable {{", name),
                "}",
                |b| {
                    b.line(&format!(
                        "static let schema = \"{}\"",
                        self.resource.plural()
                    ))
                    .blank()
                    .line("@ID(key: .id)")
                    .line("var id: UUID?")
                    .each(fields, Self::property)
                    .blank()
                    .line("init() { }")
                    .blank()
                    .block(&self.full_init_signature(), "}", |b| {
                        b.line("self.id = id").each(fields, |b, field| {
                            b.line(&format!("self.{0} = {0}", field.name()))
                        })
                    })
                },
            )
            .build()
    }
}

impl GeneratedFile for ModelSwift<'_> {
    fn directory(&self, base: &Path) -> PathBuf {
        base.join(MODELS_DIR)
    }

    fn file_name(&self) -> String {
        format!("{}.{}", self.resource.name(), SOURCE_EXTENSION)
    }

    fn render(&self) -> String {
        SwiftFile::new()
            .import("Fluent")
            .import("Vapor")
            .add(self.build_class())
            .render()
    }
}
