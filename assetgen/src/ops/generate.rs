//! Generate operation - TypeScript bindings from scanned assets.

use std::path::Path;

use assetgen_codegen::{AssetManifest, Generator};
use assetgen_config::{Config, Framework};
use eyre::{Context, Result};

use crate::{
    format::{FormatOutcome, format_files},
    reports::{GenerateReport, GenerationResult, WrittenResult},
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    pub output_dir: &'a Path,
    pub framework: Framework,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to run the configured formatter on written files.
    pub format: bool,
}

/// Execute the generate operation.
pub fn generate(config: &Config, opts: GenerateOptions) -> Result<GenerateReport> {
    let manifest = AssetManifest::scan(config);
    let generator = Generator::new(&manifest, opts.framework);

    let result = if opts.dry_run {
        GenerationResult::Preview(generator.preview())
    } else {
        let generated = generator
            .generate(opts.output_dir, config.file_generation.overwrite)
            .wrap_err("Failed to generate TypeScript")?;

        let format = if opts.format {
            format_files(&config.formatting, &generated.written)
        } else {
            FormatOutcome::Skipped
        };

        GenerationResult::Written(WrittenResult {
            written: generated.written,
            skipped: generated.skipped,
            backups: generated.backups,
            format,
        })
    };

    Ok(GenerateReport {
        output_dir: opts.output_dir.to_path_buf(),
        framework: opts.framework,
        categories: manifest
            .categories()
            .map(|c| (c.name.clone(), c.len()))
            .collect(),
        result,
    })
}
