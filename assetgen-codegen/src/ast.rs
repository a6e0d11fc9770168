//! TypeScript import and export statements.

use crate::CodeBuilder;

/// `import { a, b } from "module";`, optionally `import type`.
#[derive(Debug, Clone)]
pub struct Import {
    module: String,
    names: Vec<String>,
    types_only: bool,
}

impl Import {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            names: Vec::new(),
            types_only: false,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Render as `import type { .. }`.
    pub fn type_only(mut self) -> Self {
        self.types_only = true;
        self
    }

    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let keyword = if self.types_only { "import type" } else { "import" };
        builder.line(&format!(
            "{} {{ {} }} from \"{}\";",
            keyword,
            self.names.join(", "),
            self.module
        ))
    }
}

/// `export * from "module";`
#[derive(Debug, Clone)]
pub struct ReExport {
    module: String,
}

impl ReExport {
    pub fn all(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
        }
    }

    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.line(&format!("export * from \"{}\";", self.module))
    }
}
