use std::path::PathBuf;

use clap::Parser;
use eyre::Result;
use vaporgen_codegen::{Generator, Resource};
use vaporgen_core::{Field, RealFs, locate_target};

use crate::reports::{DoneReport, Output, PlanReport, PreviewReport, Report, TerminalOutput};

/// Extension trait for exiting on generator errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for vaporgen_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "vgen")]
#[command(version)]
#[command(about = "Generate Vapor model, migration and controller boilerplate")]
pub(crate) struct Cli {
    /// The name of the resource (e.g., Product)
    pub name: String,

    /// Fields in format name:type (e.g. title:string price:int)
    ///
    /// Known types: int, double, bool, date, uuid. Anything else is a string.
    #[arg(value_name = "FIELD")]
    pub fields: Vec<Field>,

    /// Project root to detect the application target from
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        tracing::debug!(
            name = %self.name,
            fields = ?self.fields,
            path = %self.path.display(),
            "parsed arguments"
        );
        let resource = Resource::new(&self.name, self.fields.iter().cloned());
        let mut out = TerminalOutput::new();

        out.preformatted(&format!(
            "Generating files for resource: {}...",
            resource.name()
        ));

        let root = locate_target(&RealFs, &self.path).unwrap_or_exit();

        PlanReport {
            resource: resource.name().to_string(),
            field_count: resource.fields().len(),
            target: root.path.clone(),
            strategy: root.strategy,
            warnings: resource.warnings(),
        }
        .render(&mut out);

        let generator = Generator::new(&resource);

        if self.dry_run {
            PreviewReport {
                files: generator.preview(&root.path),
            }
            .render(&mut out);
            return Ok(());
        }

        let result = generator
            .generate(&RealFs, &root.path, |path| {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                out.added_item(&format!("Created: {}", name));
            })
            .unwrap_or_exit();

        DoneReport {
            written: result.written.len(),
        }
        .render(&mut out);

        Ok(())
    }
}
