use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use assetgen_core::Overwrite;
use serde::Deserialize;

use crate::{Error, Framework, Result, error::SourceContext};

/// Default token separator inside asset filenames.
pub const DEFAULT_SEPARATOR: char = '-';

/// Extensions treated as assets when `supported_extensions` is omitted.
pub const DEFAULT_EXTENSIONS: &[&str] = &["svg", "png", "jpg", "jpeg", "gif", "webp"];

/// Root configuration for assetgen.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directories scanned for assets
    #[serde(default)]
    pub asset_directories: Vec<AssetRoot>,

    /// Which files count as assets and where generated code goes
    #[serde(default)]
    pub file_generation: FileGeneration,

    /// Filename conventions
    #[serde(default)]
    pub conventions: Conventions,

    /// Post-generation formatter
    #[serde(default)]
    pub formatting: Formatting,
}

/// A configured top-level asset directory.
///
/// `name` is the logical label used as naming prefix and type name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetRoot {
    pub name: String,
    pub path: PathBuf,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl AssetRoot {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileGeneration {
    /// Extensions (no dot, any case) that count as assets
    #[serde(default = "default_extensions")]
    pub supported_extensions: Vec<String>,

    /// Directory generated TypeScript is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// What to do with generated files that already exist
    #[serde(default)]
    pub overwrite: Overwrite,

    /// Target UI framework for the component and hooks
    #[serde(default)]
    pub framework: Framework,

    /// URL prefix prepended to asset paths in generated code
    #[serde(default)]
    pub public_path: Option<String>,
}

impl Default for FileGeneration {
    fn default() -> Self {
        Self {
            supported_extensions: default_extensions(),
            output_dir: default_output_dir(),
            overwrite: Overwrite::default(),
            framework: Framework::default(),
            public_path: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Conventions {
    /// Single character delimiting filename segments
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Which folder names the clean pass may strip from a file
    #[serde(default)]
    pub clean_scope: CleanScope,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            clean_scope: CleanScope::default(),
        }
    }
}

/// Token candidates used when cleaning a filename.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleanScope {
    /// The asset's root name plus the folders it actually lives under
    #[default]
    Path,
    /// Every folder name collected across all enabled roots
    Global,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Formatting {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Program and leading arguments; touched files are appended
    #[serde(default = "default_format_command")]
    pub command: Vec<String>,
}

impl Default for Formatting {
    fn default() -> Self {
        Self {
            enabled: true,
            command: default_format_command(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("src/generated/assets")
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_format_command() -> Vec<String> {
    ["npx", "prettier", "--write"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_directories: Vec::new(),
            file_generation: FileGeneration::default(),
            conventions: Conventions::default(),
            formatting: Formatting::default(),
        }
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "assetgen.toml")
    }
}

impl Config {
    /// Parse an assetgen.toml file, resolving relative paths against its directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let mut config = Self::from_str_with_filename(&content, &path.display().to_string())?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    /// Parse an assetgen.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let mut config: Self = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        config.validate(&ctx)?;
        config.normalize();
        Ok(config)
    }

    /// Make relative asset and output paths relative to `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        for root in &mut self.asset_directories {
            if root.path.is_relative() {
                root.path = base.join(&root.path);
            }
        }
        if self.file_generation.output_dir.is_relative() {
            self.file_generation.output_dir = base.join(&self.file_generation.output_dir);
        }
    }

    /// The configured separator character.
    pub fn separator(&self) -> char {
        self.conventions
            .separator
            .chars()
            .next()
            .unwrap_or(DEFAULT_SEPARATOR)
    }

    /// Asset roots with `enabled = true`, in declaration order.
    pub fn enabled_roots(&self) -> impl Iterator<Item = &AssetRoot> {
        self.asset_directories.iter().filter(|r| r.enabled)
    }

    /// Normalized extension allow-list (lowercase, no leading dot).
    pub fn extensions(&self) -> &[String] {
        &self.file_generation.supported_extensions
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        let sep = &self.conventions.separator;
        let mut chars = sep.chars();
        match (chars.next(), chars.next()) {
            (None, _) => return Err(ctx.separator_error(sep, "the separator cannot be empty")),
            (Some(_), Some(_)) => {
                return Err(ctx.separator_error(sep, "the separator must be a single character"));
            }
            (Some(c), None) if c == '.' => {
                return Err(ctx.separator_error(sep, "'.' already separates the extension"));
            }
            (Some(c), None) if c == '/' || c == '\\' => {
                return Err(ctx.separator_error(sep, "path separators cannot appear in filenames"));
            }
            (Some(c), None) if c.is_whitespace() => {
                return Err(ctx.separator_error(sep, "whitespace is not a usable separator"));
            }
            _ => {}
        }

        let mut seen: Vec<String> = Vec::new();
        for root in &self.asset_directories {
            let name = root.name.trim();
            if name.is_empty() {
                return Err(ctx.validation_error(
                    "asset directory name cannot be empty",
                    Some("name = \"\""),
                ));
            }
            if name.contains(['/', '\\']) {
                return Err(ctx.validation_error(
                    format!("asset directory name '{}' cannot contain a path separator", name),
                    Some(root.name.as_str()),
                ));
            }
            if root.path.as_os_str().is_empty() {
                return Err(ctx.validation_error(
                    format!("asset directory '{}' has an empty path", name),
                    Some("path = \"\""),
                ));
            }
            let key = name.to_lowercase();
            if seen.contains(&key) {
                return Err(ctx.duplicate_root_error(&root.name));
            }
            seen.push(key);
        }

        if self.file_generation.supported_extensions.is_empty() {
            return Err(ctx.validation_error(
                "supported_extensions must list at least one extension",
                Some("supported_extensions"),
            ));
        }
        for ext in &self.file_generation.supported_extensions {
            if ext.trim_start_matches('.').trim().is_empty() {
                return Err(ctx.validation_error(
                    "supported_extensions cannot contain an empty extension",
                    Some("supported_extensions"),
                ));
            }
        }

        if self.formatting.enabled && self.formatting.command.is_empty() {
            return Err(ctx.validation_error(
                "formatting is enabled but no command is configured",
                Some("command"),
            ));
        }

        Ok(())
    }

    fn normalize(&mut self) {
        let mut extensions: Vec<String> = Vec::new();
        for ext in &self.file_generation.supported_extensions {
            let ext = ext.trim().trim_start_matches('.').to_lowercase();
            if !extensions.contains(&ext) {
                extensions.push(ext);
            }
        }
        self.file_generation.supported_extensions = extensions;

        for root in &mut self.asset_directories {
            root.name = root.name.trim().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Result<Config> {
        Config::from_str(toml)
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = parse(
            r#"
            [[asset_directories]]
            name = "icons"
            path = "assets/icons"
            "#,
        )
        .unwrap();

        assert_eq!(config.asset_directories.len(), 1);
        assert!(config.asset_directories[0].enabled);
        assert_eq!(config.separator(), '-');
        assert_eq!(config.conventions.clean_scope, CleanScope::Path);
        assert_eq!(config.file_generation.overwrite, Overwrite::Replace);
        assert_eq!(config.file_generation.framework, Framework::React);
        assert_eq!(config.extensions().len(), DEFAULT_EXTENSIONS.len());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = parse("").unwrap();
        assert_eq!(config.enabled_roots().count(), 0);
    }

    #[test]
    fn test_extensions_are_normalized() {
        let config = parse(
            r#"
            [file_generation]
            supported_extensions = [".SVG", "png", "svg", " Jpg "]
            "#,
        )
        .unwrap();

        assert_eq!(config.extensions(), ["svg", "png", "jpg"]);
    }

    #[test]
    fn test_enabled_roots_skips_disabled() {
        let config = parse(
            r#"
            [[asset_directories]]
            name = "icons"
            path = "assets/icons"

            [[asset_directories]]
            name = "logos"
            path = "assets/logos"
            enabled = false
            "#,
        )
        .unwrap();

        let names: Vec<_> = config.enabled_roots().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["icons"]);
    }

    #[test]
    fn test_custom_separator_and_scope() {
        let config = parse(
            r#"
            [conventions]
            separator = "_"
            clean_scope = "global"
            "#,
        )
        .unwrap();

        assert_eq!(config.separator(), '_');
        assert_eq!(config.conventions.clean_scope, CleanScope::Global);
    }

    #[test]
    fn test_multi_char_separator_rejected() {
        let err = parse(
            r#"
            [conventions]
            separator = "--"
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::InvalidSeparator { .. }));
    }

    #[test]
    fn test_dot_separator_rejected() {
        let err = parse(
            r#"
            [conventions]
            separator = "."
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::InvalidSeparator { .. }));
    }

    #[test]
    fn test_duplicate_root_names_rejected() {
        let err = parse(
            r#"
            [[asset_directories]]
            name = "icons"
            path = "a"

            [[asset_directories]]
            name = "Icons"
            path = "b"
            "#,
        )
        .unwrap_err();

        match *err {
            Error::DuplicateRoot { name, .. } => assert_eq!(name, "Icons"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_root_name_rejected() {
        let err = parse(
            r#"
            [[asset_directories]]
            name = ""
            path = "a"
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_empty_extension_list_rejected() {
        let err = parse(
            r#"
            [file_generation]
            supported_extensions = []
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_parse_error_carries_span() {
        let err = parse("[[asset_directories]]\nname = \n").unwrap_err();

        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_paths_joins_relative() {
        let mut config = parse(
            r#"
            [[asset_directories]]
            name = "icons"
            path = "assets/icons"
            "#,
        )
        .unwrap();

        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.asset_directories[0].path,
            PathBuf::from("/project/assets/icons")
        );
        assert_eq!(
            config.file_generation.output_dir,
            PathBuf::from("/project/src/generated/assets")
        );
    }
}
