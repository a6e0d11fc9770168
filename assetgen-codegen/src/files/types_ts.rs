//! types.ts: name unions and the asset metadata shape.

use std::path::{Path, PathBuf};

use assetgen_core::{FileRules, GeneratedFile};

use super::{GENERATED_HEADER, js_string, string_union};
use crate::{AssetManifest, CodeBuilder};

pub struct TypesTs<'a> {
    manifest: &'a AssetManifest,
}

impl<'a> TypesTs<'a> {
    pub fn new(manifest: &'a AssetManifest) -> Self {
        Self { manifest }
    }
}

impl GeneratedFile for TypesTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("types.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        let categories: Vec<_> = self.manifest.categories().collect();

        CodeBuilder::typescript()
            .jsdoc("Every configured asset category")
            .line(&format!(
                "export type AssetCategory = {};",
                string_union(categories.iter().map(|c| c.name.as_str()))
            ))
            .blank()
            .each(&categories, |b, category| {
                b.jsdoc(&format!("Assets in the {} directory", category.name))
                    .line(&format!(
                        "export type {} = {};",
                        category.type_name,
                        string_union(category.assets().map(|a| a.key.as_str()))
                    ))
                    .blank()
            })
            .block("export interface AssetNameMap {", "}", |b| {
                b.each(&categories, |b, category| {
                    b.line(&format!(
                        "{}: {};",
                        js_string(&category.name),
                        category.type_name
                    ))
                })
            })
            .blank()
            .line("export type AssetName = AssetNameMap[AssetCategory];")
            .blank()
            .block("export interface AssetInfo {", "}", |b| {
                b.line("name: string;")
                    .line("category: AssetCategory;")
                    .line("path: string;")
                    .line("extension: string;")
            })
            .build()
    }
}
