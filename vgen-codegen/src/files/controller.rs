use std::path::{Path, PathBuf};

use vaporgen_core::{GeneratedFile, SOURCE_EXTENSION};

use super::CONTROLLERS_DIR;
use crate::{
    Resource,
    builder::{CodeBuilder, SwiftFile},
};

/// The route collection exposing list and create endpoints,
/// e.g. `Controllers/ProductController.swift`
pub struct ControllerSwift<'a> {
    resource: &'a Resource,
}

impl<'a> ControllerSwift<'a> {
    pub fn new(resource: &'a Resource) -> Self {
        Self { resource }
    }

    /// Name of the controller struct
    pub fn type_name(&self) -> String {
        format!("{}Controller", self.resource.name())
    }

    fn build_struct(&self) -> String {
        let name = self.resource.name();
        let routes = self.resource.plural();

        CodeBuilder::swift()
            .block(
                &format!("struct {}: RouteCollection {{", self.type_name()),
                "}",
                |b| {
                    b.block("func boot(routes: any RoutesBuilder) throws {", "}", |b| {
                        b.line(&format!("let {0} = routes.grouped(\"{0}\")", routes))
                            .line(&format!("{}.get(use: index)", routes))
                            .line(&format!("{}.post(use: create)", routes))
                    })
                    .blank()
                    .block(
                        &format!("func index(req: Request) async throws -> [{}] {{", name),
                        "}",
                        |b| b.line(&format!("try await {}.query(on: req.db).all()", name)),
                    )
                    .blank()
                    .block(
                        &format!("func create(req: Request) async throws -> {} {{", name),
                        "}",
                        |b| {
                            b.line(&format!("let input = try req.content.decode({}.self)", name))
                                .line("try await input.save(on: req.db)")
                                .line("return input")
                        },
                    )
                },
            )
            .build()
    }
}

impl GeneratedFile for ControllerSwift<'_> {
    fn directory(&self, base: &Path) -> PathBuf {
        base.join(CONTROLLERS_DIR)
    }

    fn file_name(&self) -> String {
        format!("{}.{}", self.type_name(), SOURCE_EXTENSION)
    }

    fn render(&self) -> String {
        SwiftFile::new()
            .import("Fluent")
            .import("Vapor")
            .add(self.build_struct())
            .render()
    }
}
