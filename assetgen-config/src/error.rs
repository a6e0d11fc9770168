use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Config errors carry their source text, so they travel boxed.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The text of an `assetgen.toml` being loaded, used to point diagnostics at
/// the offending bytes.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            src: src.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename.clone(), self.src.clone())
    }

    /// TOML syntax or type error, labelled where the parser stopped.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        Box::new(Error::Parse {
            src: self.named_source(),
            span: source.span().map(Into::into),
            source,
        })
    }

    /// Create a validation error, pointing at `needle` when it occurs in the source.
    pub fn validation_error(&self, message: impl Into<String>, needle: Option<&str>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: needle.and_then(|n| self.find_span(n)),
            message: message.into(),
        })
    }

    /// Labels the first two quoted occurrences of `name`.
    pub fn duplicate_root_error(&self, name: impl Into<String>) -> Box<Error> {
        let name = name.into();
        let quoted = format!("\"{}\"", name);
        let first = self.src.find(&quoted);
        let second = first.and_then(|pos| {
            let after = pos + quoted.len();
            self.src[after..].find(&quoted).map(|p| p + after)
        });
        Box::new(Error::DuplicateRoot {
            src: self.named_source(),
            first_span: first.map(|p| SourceSpan::from((p, quoted.len()))),
            second_span: second.map(|p| SourceSpan::from((p, quoted.len()))),
            name,
        })
    }

    pub fn separator_error(&self, value: impl Into<String>, reason: &'static str) -> Box<Error> {
        let value = value.into();
        let span = self.find_span(&format!("\"{}\"", value));
        Box::new(Error::InvalidSeparator {
            src: self.named_source(),
            span,
            value,
            reason,
        })
    }

    fn find_span(&self, needle: &str) -> Option<SourceSpan> {
        self.src
            .find(needle)
            .map(|pos| SourceSpan::from((pos, needle.len())))
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("cannot read config file '{path}'")]
    #[diagnostic(help("run 'assetgen init' to create a configuration file"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse assetgen.toml")]
    #[diagnostic(code(assetgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(assetgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("asset directory '{name}' is declared more than once")]
    #[diagnostic(
        code(assetgen::duplicate_root),
        help("asset directory names become file prefixes and type names, so each must be unique")
    )]
    DuplicateRoot {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        name: String,
    },

    #[error("invalid separator '{value}'")]
    #[diagnostic(
        code(assetgen::invalid_separator),
        help("{reason}; common choices are '-' and '_'")
    )]
    InvalidSeparator {
        #[source_code]
        src: NamedSource<String>,
        #[label("used as separator")]
        span: Option<SourceSpan>,
        value: String,
        reason: &'static str,
    },
}
