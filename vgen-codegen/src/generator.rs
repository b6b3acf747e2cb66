use std::path::{Path, PathBuf};

use vaporgen_core::{File, FileSystem, GeneratedFile, Result};

use crate::{
    Resource,
    files::{ControllerSwift, MigrationSwift, ModelSwift},
};

/// Paths written by [`Generator::generate`], in write order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateResult {
    pub written: Vec<PathBuf>,
}

/// Produces the model, migration and controller for one resource
pub struct Generator<'a> {
    resource: &'a Resource,
}

impl<'a> Generator<'a> {
    pub fn new(resource: &'a Resource) -> Self {
        Self { resource }
    }

    /// The artifacts in generation order: model, migration, controller
    pub fn artifacts(&self) -> [Box<dyn GeneratedFile + 'a>; 3] {
        [
            Box::new(ModelSwift::new(self.resource)),
            Box::new(MigrationSwift::new(self.resource)),
            Box::new(ControllerSwift::new(self.resource)),
        ]
    }

    /// Render every artifact below `target` without writing to disk
    pub fn preview(&self, target: &Path) -> Vec<File> {
        self.artifacts()
            .iter()
            .map(|artifact| File::rendered(&**artifact, target))
            .collect()
    }

    /// Write every artifact below `target`, calling `on_written` after each one.
    ///
    /// Stops at the first failure. Files written before it are kept.
    pub fn generate(
        &self,
        fs: &dyn FileSystem,
        target: &Path,
        mut on_written: impl FnMut(&Path),
    ) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for artifact in self.artifacts() {
            tracing::debug!(file = %artifact.file_name(), "rendering");
            let path = artifact.write(fs, target)?;
            on_written(&path);
            result.written.push(path);
        }

        Ok(result)
    }
}
