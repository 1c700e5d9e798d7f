use thiserror::Error;

/// Errors produced while reading a scenario description.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("scenario ended early: expected {expected} on line {line}")]
    UnexpectedEnd { line: usize, expected: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// A malformed action line.  Unlike a construction rejection this is fatal:
/// the turn that produced it is over.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty output line; send WAIT to skip a turn")]
    EmptyLine,

    #[error("expected one of TUBE | UPGRADE | TELEPORT | POD | DESTROY | WAIT but received {0:?}")]
    UnknownAction(String),

    #[error("invalid format: expected {expected}, but received {received:?}")]
    Arity { expected: &'static str, received: String },

    #[error("invalid integer value in {0:?}")]
    InvalidInteger(String),
}

pub type CommandResult<T> = Result<T, CommandError>;
