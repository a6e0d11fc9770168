//! index.ts: re-exports of every generated module.

use std::path::{Path, PathBuf};

use assetgen_config::Framework;
use assetgen_core::{FileRules, GeneratedFile};

use super::GENERATED_HEADER;
use crate::{CodeBuilder, ast::ReExport};

pub struct IndexTs {
    framework: Framework,
}

impl IndexTs {
    pub fn new(framework: Framework) -> Self {
        Self { framework }
    }

    fn modules(&self) -> &'static [&'static str] {
        match self.framework {
            Framework::React => &["./types", "./assets", "./utils", "./hooks", "./Asset"],
            Framework::None => &["./types", "./assets", "./utils"],
        }
    }
}

impl GeneratedFile for IndexTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("index.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        CodeBuilder::typescript()
            .each(self.modules(), |b, module| ReExport::all(*module).render(b))
            .build()
    }
}
