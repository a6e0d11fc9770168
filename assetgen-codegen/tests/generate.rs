//! Scanning real directories and writing the generated files.

use std::fs;

use assetgen_codegen::{AssetManifest, Generator};
use assetgen_config::{AssetRoot, Config, Framework};
use assetgen_core::Overwrite;
use tempfile::TempDir;

fn project(temp: &TempDir) -> Config {
    let icons = temp.path().join("public/icons");
    fs::create_dir_all(icons.join("home")).unwrap();
    fs::write(icons.join("home/icons-home-icon.svg"), "<svg/>").unwrap();
    fs::write(icons.join("icons-logo.png"), "png").unwrap();

    let mut config = Config::default();
    config.asset_directories = vec![AssetRoot::new("icons", icons)];
    config.file_generation.output_dir = temp.path().join("src/generated");
    config.file_generation.public_path = Some("/".to_string());
    config
}

#[test]
fn test_scan_and_generate() {
    let temp = TempDir::new().unwrap();
    let config = project(&temp);
    let out = &config.file_generation.output_dir;

    let manifest = AssetManifest::scan(&config);
    let result = Generator::new(&manifest, Framework::React)
        .generate(out, Overwrite::Replace)
        .unwrap();

    assert_eq!(result.written.len(), 6);
    assert!(result.skipped.is_empty());

    let types = fs::read_to_string(out.join("types.ts")).unwrap();
    assert!(types.contains("export type IconsAssetName = \"icons-home-icon\" | \"icons-logo\";"));

    let assets = fs::read_to_string(out.join("assets.ts")).unwrap();
    assert!(assets.contains("path: \"/icons/home/icons-home-icon.svg\""));
    assert!(assets.contains("extension: \"png\""));
}

#[test]
fn test_skip_policy_keeps_existing_files() {
    let temp = TempDir::new().unwrap();
    let config = project(&temp);
    let out = &config.file_generation.output_dir;
    fs::create_dir_all(out).unwrap();
    fs::write(out.join("types.ts"), "// mine").unwrap();

    let manifest = AssetManifest::scan(&config);
    let result = Generator::new(&manifest, Framework::None)
        .generate(out, Overwrite::Skip)
        .unwrap();

    assert_eq!(result.skipped, [out.join("types.ts")]);
    assert_eq!(result.written.len(), 3);
    assert_eq!(fs::read_to_string(out.join("types.ts")).unwrap(), "// mine");
}

#[test]
fn test_backup_policy_saves_previous_content() {
    let temp = TempDir::new().unwrap();
    let config = project(&temp);
    let out = &config.file_generation.output_dir;
    fs::create_dir_all(out).unwrap();
    fs::write(out.join("index.ts"), "// old").unwrap();

    let manifest = AssetManifest::scan(&config);
    let result = Generator::new(&manifest, Framework::None)
        .generate(out, Overwrite::Backup)
        .unwrap();

    assert_eq!(result.written.len(), 4);
    assert_eq!(result.backups, [out.join("index.ts.bak")]);
    assert_eq!(fs::read_to_string(out.join("index.ts.bak")).unwrap(), "// old");
    assert!(
        fs::read_to_string(out.join("index.ts"))
            .unwrap()
            .contains("export * from \"./types\";")
    );
}

#[test]
fn test_regenerating_is_stable() {
    let temp = TempDir::new().unwrap();
    let config = project(&temp);
    let out = &config.file_generation.output_dir;

    let manifest = AssetManifest::scan(&config);
    let generator = Generator::new(&manifest, Framework::React);
    generator.generate(out, Overwrite::Replace).unwrap();
    let first = fs::read_to_string(out.join("assets.ts")).unwrap();

    let manifest = AssetManifest::scan(&config);
    Generator::new(&manifest, Framework::React)
        .generate(out, Overwrite::Replace)
        .unwrap();

    assert_eq!(fs::read_to_string(out.join("assets.ts")).unwrap(), first);
}
