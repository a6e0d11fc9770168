//! Line-oriented source builder for generated TypeScript.

/// One nesting level in generated TypeScript.
const INDENT: &str = "  ";

/// Accumulates generated TypeScript one line at a time, tracking nesting.
///
/// ```
/// use assetgen_codegen::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .block("export interface AssetInfo {", "}", |b| b.line("path: string;"))
///     .build();
///
/// assert_eq!(code, "export interface AssetInfo {\n  path: string;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    out: String,
}

impl CodeBuilder {
    pub fn typescript() -> Self {
        Self::default()
    }

    /// Append `text` at the current depth.
    pub fn line(mut self, text: &str) -> Self {
        self.out.extend(std::iter::repeat_n(INDENT, self.depth));
        self.out.push_str(text);
        self.out.push('\n');
        self
    }

    /// Append an empty line. Never indented.
    pub fn blank(mut self) -> Self {
        self.out.push('\n');
        self
    }

    /// `open`, then whatever `body` adds one level deeper, then `close`.
    pub fn block<F>(self, open: &str, close: &str, body: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let mut inner = body(self.line(open).nested(1));
        inner.depth -= 1;
        inner.line(close)
    }

    /// Single-line `/** text */` comment.
    pub fn jsdoc(self, text: &str) -> Self {
        self.line(&format!("/** {} */", text))
    }

    /// Fold every item of `items` into the builder.
    pub fn each<T, I, F>(self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        items.into_iter().fold(self, f)
    }

    pub fn build(self) -> String {
        self.out
    }

    fn nested(mut self, levels: usize) -> Self {
        self.depth += levels;
        self
    }
}
