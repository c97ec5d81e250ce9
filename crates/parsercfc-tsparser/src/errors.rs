use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TsParserError {
    #[error("no input path given")]
    NoInput,
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to load the C grammar: {0}")]
    Grammar(tree_sitter::LanguageError),
    #[error("tree-sitter failed to produce a syntax tree for {0}")]
    NoTree(PathBuf),
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type TsParserResult<T> = std::result::Result<T, TsParserError>;
