//! hooks.ts: React hooks over the lookup helpers.

use std::path::{Path, PathBuf};

use assetgen_core::{FileRules, GeneratedFile};

use super::GENERATED_HEADER;
use crate::{CodeBuilder, ast::Import};

pub struct HooksTs;

impl GeneratedFile for HooksTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("hooks.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        let builder = CodeBuilder::typescript();
        let builder = Import::new("react").named("useMemo").render(builder);
        let builder = Import::new("./types")
            .named("AssetCategory")
            .named("AssetInfo")
            .named("AssetNameMap")
            .type_only()
            .render(builder);
        let builder = Import::new("./utils")
            .named("getAssetInfo")
            .named("listAssets")
            .render(builder);

        builder
            .blank()
            .block(
                "export function useAsset<C extends AssetCategory>(category: C, name: AssetNameMap[C]): AssetInfo {",
                "}",
                |b| b.line("return useMemo(() => getAssetInfo(category, name), [category, name]);"),
            )
            .blank()
            .block(
                "export function useAssetList<C extends AssetCategory>(category: C): AssetInfo[] {",
                "}",
                |b| b.line("return useMemo(() => listAssets(category), [category]);"),
            )
            .build()
    }
}
