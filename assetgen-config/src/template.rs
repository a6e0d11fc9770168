//! Starter assetgen.toml written by `assetgen init`.

use crate::Framework;

/// Render a starter config with one asset directory.
pub fn template(framework: Framework) -> String {
    format!(
        r#"# assetgen configuration

[[asset_directories]]
name = "icons"
path = "assets/icons"
enabled = true

[[asset_directories]]
name = "images"
path = "assets/images"
enabled = true

[file_generation]
supported_extensions = ["svg", "png", "jpg", "jpeg", "gif", "webp"]
output_dir = "src/generated/assets"
# overwrite | skip | backup
overwrite = "overwrite"
# react | none
framework = "{framework}"
public_path = "/assets"

[conventions]
separator = "-"
# path | global
clean_scope = "path"

[formatting]
enabled = true
command = ["npx", "prettier", "--write"]
"#
    )
}
