//! Asset.tsx: an `<img>` wrapper typed by category and name.

use std::path::{Path, PathBuf};

use assetgen_core::{FileRules, GeneratedFile};

use super::GENERATED_HEADER;
use crate::{CodeBuilder, ast::Import};

pub struct ComponentTsx;

impl GeneratedFile for ComponentTsx {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("Asset.tsx")
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        let builder = CodeBuilder::typescript();
        let builder = Import::new("react")
            .named("ImgHTMLAttributes")
            .type_only()
            .render(builder);
        let builder = Import::new("./types")
            .named("AssetCategory")
            .named("AssetNameMap")
            .type_only()
            .render(builder);
        let builder = Import::new("./hooks").named("useAsset").render(builder);

        builder
            .blank()
            .block(
                "export type AssetProps<C extends AssetCategory> = Omit<ImgHTMLAttributes<HTMLImageElement>, \"src\"> & {",
                "};",
                |b| b.line("category: C;").line("name: AssetNameMap[C];"),
            )
            .blank()
            .block(
                "export function Asset<C extends AssetCategory>({ category, name, alt, ...rest }: AssetProps<C>) {",
                "}",
                |b| {
                    b.line("const asset = useAsset(category, name);")
                        .line("return <img src={asset.path} alt={alt ?? asset.name} {...rest} />;")
                },
            )
            .build()
    }
}
