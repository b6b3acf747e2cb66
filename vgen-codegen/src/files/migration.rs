use std::path::{Path, PathBuf};

use vaporgen_core::{GeneratedFile, SOURCE_EXTENSION};

use super::MIGRATIONS_DIR;
use crate::{
    Resource, VaporTypeMapper,
    builder::{CodeBuilder, SwiftFile},
};

/// The Fluent migration creating and dropping the resource's table,
/// e.g. `Migrations/CreateProduct.swift`
pub struct MigrationSwift<'a> {
    resource: &'a Resource,
}

impl<'a> MigrationSwift<'a> {
    pub fn new(resource: &'a Resource) -> Self {
        Self { resource }
    }

    /// Name of the migration struct
    pub fn type_name(&self) -> String {
        format!("Create{}", self.resource.name())
    }

    fn build_struct(&self) -> String {
        let table = self.resource.plural();

        CodeBuilder::swift()
            .block(
                &format!("struct {}: AsyncMigration {{", self.type_name()),
                "}",
                |b| {
                    b.block(
                        "func prepare(on database: any Database) async throws {",
                        "}",
                        |b| {
                            b.line(&format!("try await database.schema(\"{}\")", table))
                                .indent()
                                .line(".id()")
                                .each(self.resource.fields(), |b, field| {
                                    b.line(&format!(
                                        ".field(\"{}\", {}, .required)",
                                        field.name(),
                                        field.schema_type(&VaporTypeMapper)
                                    ))
                                })
                                .line(".create()")
                                .dedent()
                        },
                    )
                    .blank()
                    .block(
                        "func revert(on database: any Database) async throws {",
                        "}",
                        |b| b.line(&format!("try await database.schema(\"{}\").delete()", table)),
                    )
                },
            )
            .build()
    }
}

impl GeneratedFile for MigrationSwift<'_> {
    fn directory(&self, base: &Path) -> PathBuf {
        base.join(MIGRATIONS_DIR)
    }

    fn file_name(&self) -> String {
        format!("{}.{}", self.type_name(), SOURCE_EXTENSION)
    }

    fn render(&self) -> String {
        SwiftFile::new()
            .import("Fluent")
            .add(self.build_struct())
            .render()
    }
}
