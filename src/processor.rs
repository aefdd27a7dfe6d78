//! File processing API
//!
//! Runs a dump through a chosen stage (tokens or tree) and renders the result
//! in a chosen format. Format strings read `<stage>-<format>`, for example
//! `token-simple` or `ast-treeviz`; [`available_formats`] lists them all.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::AstDumpConfig;
use crate::formats::{FormatError, FormatRegistry};
use crate::lexer::{lex, tokenize, Token};
use crate::parser::{parse_with_options, ParseError};

/// What data to extract
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

/// How to render it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    RawSimple,
    RawJson,
    Sexp,
    Treeviz,
    Yaml,
}

impl OutputFormat {
    fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::RawSimple => "raw-simple",
            OutputFormat::RawJson => "raw-json",
            OutputFormat::Sexp => "sexp",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl ProcessingStage {
    fn as_str(&self) -> &'static str {
        match self {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        }
    }
}

/// A complete processing specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-json"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "raw-simple" => OutputFormat::RawSimple,
            "raw-json" => OutputFormat::RawJson,
            "sexp" => OutputFormat::Sexp,
            "treeviz" => OutputFormat::Treeviz,
            "yaml" => OutputFormat::Yaml,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        let spec = ProcessingSpec { stage, format };
        if !Self::available_specs().contains(&spec) {
            return Err(ProcessingError::InvalidFormatType(format!(
                "format '{}' does not apply to the {} stage",
                spec.format.as_str(),
                spec.stage.as_str()
            )));
        }
        Ok(spec)
    }

    /// Every valid stage/format pair
    pub fn available_specs() -> Vec<ProcessingSpec> {
        let token = [
            OutputFormat::Simple,
            OutputFormat::Json,
            OutputFormat::RawSimple,
            OutputFormat::RawJson,
        ]
        .into_iter()
        .map(|format| ProcessingSpec {
            stage: ProcessingStage::Token,
            format,
        });
        let ast = [
            OutputFormat::Sexp,
            OutputFormat::Treeviz,
            OutputFormat::Json,
            OutputFormat::Yaml,
        ]
        .into_iter()
        .map(|format| ProcessingSpec {
            stage: ProcessingStage::Ast,
            format,
        });
        token.chain(ast).collect()
    }

    /// The format string this spec parses from
    pub fn name(&self) -> String {
        format!("{}-{}", self.stage.as_str(), self.format.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dump: {0}")]
    Parse(#[from] ParseError),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("invalid stage: {0}")]
    InvalidStage(String),
    #[error("invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<FormatError> for ProcessingError {
    fn from(error: FormatError) -> Self {
        match error {
            FormatError::FormatNotFound(name) => ProcessingError::InvalidFormatType(name),
            FormatError::SerializationError(message) => ProcessingError::Serialization(message),
        }
    }
}

/// Read a whole dump into memory
pub fn load_source<P: AsRef<Path>>(path: P) -> Result<String, ProcessingError> {
    let path = path.as_ref();
    log::debug!("loading {}", path.display());
    fs::read_to_string(path).map_err(|source| ProcessingError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Process dump text according to `spec`
pub fn process_source(
    source: &str,
    spec: &ProcessingSpec,
    config: &AstDumpConfig,
) -> Result<String, ProcessingError> {
    log::debug!("processing {} bytes as {}", source.len(), spec.name());
    match spec.stage {
        ProcessingStage::Token => {
            let tokens = match spec.format {
                OutputFormat::RawSimple | OutputFormat::RawJson => tokenize(source),
                _ => lex(source),
            };
            format_tokens(&tokens, &spec.format)
        }
        ProcessingStage::Ast => {
            let node = parse_with_options(source, &config.parser)?;
            let registry = FormatRegistry::with_options(&config.output);
            Ok(registry.serialize(&node, spec.format.as_str())?)
        }
    }
}

/// Process a dump file according to `spec`
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    config: &AstDumpConfig,
) -> Result<String, ProcessingError> {
    let content = load_source(file_path)?;
    process_source(&content, spec, config)
}

fn format_tokens(tokens: &[Token], format: &OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple | OutputFormat::RawSimple => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&token.to_string());
                result.push('\n');
            }
            Ok(result)
        }
        OutputFormat::Json | OutputFormat::RawJson => serde_json::to_string_pretty(tokens)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        other => Err(ProcessingError::InvalidFormatType(format!(
            "format '{}' only works with the ast stage",
            other.as_str()
        ))),
    }
}

/// All valid format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::name)
        .collect()
}
