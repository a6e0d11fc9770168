use std::path::{Path, PathBuf};

use crate::{Config, Error, Result};

/// Represents an assetgen.toml file with both raw content and parsed config.
pub struct AssetgenToml {
    path: PathBuf,
    content: String,
    config: Config,
}

impl AssetgenToml {
    /// Open and parse an assetgen.toml file.
    ///
    /// Relative paths inside the file are resolved against its directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let mut config = Config::from_str_with_filename(&content, &filename)?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the file, keeping only the parsed config.
    pub fn into_config(self) -> Config {
        self.config
    }
}
