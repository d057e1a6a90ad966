use std::io;
use thiserror::Error;

/// Anything that stops a generation run. Every variant is terminal: no output
/// is written once one of these has been returned.
#[derive(Debug, Error)]
pub enum Error {
    /// The schema document could not be deserialized
    #[error("failed to parse schema document: {0}")]
    Parse(String),
    /// The schema failed referential integrity checks
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The template is missing or failed to render; `context` is the package
    /// context that was being rendered
    #[error("failed to render template: {message}\n\npackage context:\n{context}")]
    Template { message: String, context: String },
    /// The rendered text is not valid Rust; `text` is the complete output
    #[error("generated code has an error: {message}\n\n{text}")]
    GeneratedSyntax { message: String, text: String },
    /// Reading the schema or writing the generated file failed
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A table that breaks one of the schema's structural rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(
        "each table must have at least one column to define the primary key, violating table: {table}"
    )]
    MissingPrimaryKey { table: String },
    #[error(
        "primary key of table `{table}` expects column named `{column}`, but no column with that name is defined"
    )]
    UnknownPrimaryKeyColumn { table: String, column: String },
    #[error("column `{column}` is declared more than once in table `{table}`")]
    DuplicateColumn { table: String, column: String },
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
