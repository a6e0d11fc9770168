//! utils.ts: lookup helpers over the registry.

use std::path::{Path, PathBuf};

use assetgen_core::{FileRules, GeneratedFile};

use super::{GENERATED_HEADER, js_string};
use crate::{AssetManifest, CodeBuilder, ast::Import};

pub struct UtilsTs<'a> {
    manifest: &'a AssetManifest,
}

impl<'a> UtilsTs<'a> {
    pub fn new(manifest: &'a AssetManifest) -> Self {
        Self { manifest }
    }
}

impl GeneratedFile for UtilsTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("utils.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        let categories = self
            .manifest
            .categories()
            .map(|c| js_string(&c.name))
            .collect::<Vec<_>>()
            .join(", ");

        let builder = CodeBuilder::typescript();
        let builder = Import::new("./assets").named("ASSETS").render(builder);
        let builder = Import::new("./types")
            .named("AssetCategory")
            .named("AssetInfo")
            .named("AssetNameMap")
            .type_only()
            .render(builder);

        builder
            .blank()
            .line("const registry: Readonly<Record<string, Readonly<Record<string, AssetInfo>>>> = ASSETS;")
            .blank()
            .jsdoc("Every asset category, in configuration order")
            .line(&format!(
                "export const ASSET_CATEGORIES: readonly AssetCategory[] = [{}];",
                categories
            ))
            .blank()
            .jsdoc("Metadata of one asset")
            .block(
                "export function getAssetInfo<C extends AssetCategory>(category: C, name: AssetNameMap[C]): AssetInfo {",
                "}",
                |b| b.line("return registry[category][name];"),
            )
            .blank()
            .jsdoc("URL of one asset")
            .block(
                "export function getAssetPath<C extends AssetCategory>(category: C, name: AssetNameMap[C]): string {",
                "}",
                |b| b.line("return getAssetInfo(category, name).path;"),
            )
            .blank()
            .jsdoc("Whether `name` is an asset of `category`")
            .block(
                "export function isAssetName<C extends AssetCategory>(category: C, name: string): name is AssetNameMap[C] {",
                "}",
                |b| b.line("return Object.prototype.hasOwnProperty.call(registry[category] ?? {}, name);"),
            )
            .blank()
            .jsdoc("Every asset of `category`, sorted by name")
            .block(
                "export function listAssets<C extends AssetCategory>(category: C): AssetInfo[] {",
                "}",
                |b| b.line("return Object.values(registry[category] ?? {});"),
            )
            .build()
    }
}
