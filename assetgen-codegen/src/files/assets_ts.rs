//! assets.ts: the asset registry constant.

use std::path::{Path, PathBuf};

use assetgen_core::{FileRules, GeneratedFile};

use super::{GENERATED_HEADER, js_string};
use crate::{AssetManifest, CodeBuilder, ast::Import, manifest::Category};

pub struct AssetsTs<'a> {
    manifest: &'a AssetManifest,
}

impl<'a> AssetsTs<'a> {
    pub fn new(manifest: &'a AssetManifest) -> Self {
        Self { manifest }
    }
}

fn render_category(builder: CodeBuilder, category: &Category) -> CodeBuilder {
    let name = js_string(&category.name);
    if category.is_empty() {
        return builder.line(&format!("{}: {{}},", name));
    }

    builder.block(&format!("{}: {{", name), "},", |b| {
        b.each(category.assets(), |b, asset| {
            b.line(&format!(
                "{}: {{ name: {}, category: {}, path: {}, extension: {} }},",
                js_string(&asset.key),
                js_string(&asset.key),
                name,
                js_string(&asset.url),
                js_string(&asset.extension)
            ))
        })
    })
}

impl GeneratedFile for AssetsTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("assets.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        let builder = Import::new("./types")
            .named("AssetCategory")
            .named("AssetInfo")
            .type_only()
            .render(CodeBuilder::typescript())
            .blank();

        builder
            .jsdoc("All assets, keyed by category and then by name")
            .block(
                "export const ASSETS = {",
                "} as const satisfies Record<AssetCategory, Record<string, AssetInfo>>;",
                |b| b.each(self.manifest.categories(), render_category),
            )
            .build()
    }
}
