//! Code builder utility for generating properly indented code.

/// One indentation level of generated Swift
const INDENT: &str = "    ";

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use vaporgen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::swift()
///     .block("struct Hello {", "}", |b| {
///         b.line("let greeting = \"Hello, world!\"")
///     })
///     .build();
///
/// assert_eq!(code, "struct Hello {\n    let greeting = \"Hello, world!\"\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with 4-space indentation.
    pub fn swift() -> Self {
        Self {
            indent_level: 0,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add an indented block between a header and a closing line.
    pub fn block<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::swift().line("let x = 1").build();
        assert_eq!(code, "let x = 1\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::swift()
            .line("func main() {")
            .indent()
            .line("print(\"Hello\")")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "func main() {\n    print(\"Hello\")\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::swift().dedent().line("x").build();
        assert_eq!(code, "x\n");
    }

    #[test]
    fn test_nested_blocks() {
        let code = CodeBuilder::swift()
            .block("struct Foo {", "}", |b| {
                b.block("func bar() {", "}", |b| b.line("return"))
            })
            .build();

        assert_eq!(code, "struct Foo {\n    func bar() {\n        return\n    }\n}\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let code = CodeBuilder::swift()
            .indent()
            .line("a")
            .blank()
            .line("b")
            .build();

        assert_eq!(code, "    a\n\n    b\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::swift()
            .block("enum Color {", "}", |b| {
                b.each(["red", "green", "blue"], |b, color| {
                    b.line(&format!("case {}", color))
                })
            })
            .build();

        assert_eq!(
            code,
            "enum Color {\n    case red\n    case green\n    case blue\n}\n"
        );
    }
}
