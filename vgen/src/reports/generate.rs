//! Generate command report data structures.

use std::path::PathBuf;

use vaporgen_core::{File, Strategy};

use super::output::{Output, Report};

/// What is about to be generated, printed before any file is touched.
#[derive(Debug)]
pub struct PlanReport {
    /// Capitalized resource name.
    pub resource: String,

    /// Number of parsed fields.
    pub field_count: usize,

    /// Detected application directory.
    pub target: PathBuf,

    /// Rule that selected the target.
    pub strategy: Strategy,

    /// Non-fatal problems with the input.
    pub warnings: Vec<String>,
}

impl Report for PlanReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        out.preformatted(&format!(
            "Generating {} with {} field{}...",
            self.resource,
            self.field_count,
            if self.field_count == 1 { "" } else { "s" }
        ));
        out.key_value(
            "Target",
            &format!("{} ({})", self.target.display(), self.strategy),
        );
    }
}

/// Closing summary after all files were written.
#[derive(Debug)]
pub struct DoneReport {
    /// Number of files written.
    pub written: usize,
}

impl Report for DoneReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();
        out.preformatted(&format!(
            "Done! {} files generated. Don't forget to register the migration and controller in configure.swift.",
            self.written
        ));
    }
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewReport {
    /// Files that would be generated.
    pub files: Vec<File>,
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            out.divider(&file.path().display().to_string());
            out.preformatted(file.content());
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", self.files.len()));
    }
}
