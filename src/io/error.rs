use thiserror::Error;

use crate::domain::error::RowError;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("could not resolve {kind} format; pass --from or use a known file extension")]
    UnresolvedFormat { kind: &'static str },

    #[error("unsupported {kind} file extension: {path}")]
    UnsupportedPathExtension { kind: &'static str, path: String },

    #[error("json parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("jsonl parse error on line {line}: {source}")]
    JsonlLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("yaml parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Row(#[from] RowError),
}
