use thiserror::Error;

/// Error type covering every failure the expense core can report.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("cannot compute the {0} of an empty record set")]
    EmptyInput(&'static str),
    #[error("expense record {0} not found")]
    NotFound(u32),
    #[error("invalid expense record: {0}")]
    InvalidRecord(String),
    #[error("duplicate expense record id {0}")]
    DuplicateId(u32),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Fatal errors raised while starting or driving the CLI shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] ExpenseError),
    #[error(transparent)]
    Command(#[from] crate::cli::CommandError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}
