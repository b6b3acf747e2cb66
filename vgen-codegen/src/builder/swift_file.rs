//! SwiftFile abstraction for structured Swift file generation.

/// A structured representation of a Swift file.
///
/// Organizes code into imports and body sections.
///
/// # Example
///
/// ```
/// use vaporgen_codegen::builder::{CodeBuilder, SwiftFile};
///
/// let body = CodeBuilder::swift().line("struct Empty {}").build();
/// let file = SwiftFile::new().import("Vapor").add(body).render();
///
/// assert_eq!(file, "import Vapor\n\nstruct Empty {}\n");
/// ```
#[derive(Debug, Default)]
pub struct SwiftFile {
    imports: Vec<String>,
    body: Vec<String>,
}

impl SwiftFile {
    /// Create a new empty SwiftFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an `import` statement.
    pub fn import(mut self, module: impl Into<String>) -> Self {
        self.imports.push(module.into());
        self
    }

    /// Add a body element, already rendered.
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, code: impl Into<String>) -> Self {
        self.body.push(code.into());
        self
    }

    /// Render imports, then body elements separated by blank lines.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for module in &self.imports {
            out.push_str("import ");
            out.push_str(module);
            out.push('\n');
        }

        for (i, code) in self.body.iter().enumerate() {
            if i > 0 || !self.imports.is_empty() {
                out.push('\n');
            }
            out.push_str(code);
        }

        out
    }
}
