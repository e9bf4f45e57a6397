use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why a pipeline stage declined to run.
///
/// Aborts never reach the host as errors: the buffer is left as the previous
/// stages wrote it and the reason is only recorded in the run report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Abort {
    #[error("buffer is empty")]
    EmptyBuffer,
    #[error("no class declaration found")]
    NoClassDeclaration,
    #[error("no outlets to wire")]
    NoOutlets,
}

/// Pipeline stage names, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageName {
    Conformance,
    IdentifierSetter,
    PageObject,
}

impl StageName {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageName::Conformance => "conformance",
            StageName::IdentifierSetter => "identifier_setter",
            StageName::PageObject => "page_object",
        }
    }
}

impl fmt::Display for StageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the command-line host around the engine.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("unknown selector '{selector}' (expected one of: {known})")]
    UnknownSelector { selector: String, known: String },

    #[error("{0} is not a .swift file")]
    NotSwift(PathBuf),

    #[error("{0} does not exist")]
    NotFound(PathBuf),

    #[error("no .swift files found in {0}")]
    NoSwiftFiles(PathBuf),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to initialise logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
