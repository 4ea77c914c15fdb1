use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("empty request")]
    Empty,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("missing argument <{argument}> for '{command}'")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("unexpected argument for '{command}': {argument}")]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },

    #[error("unknown vehicle category: {0} (expected car or bike)")]
    UnknownCategory(String),

    #[error("invalid slot number: {0}")]
    InvalidSlotNumber(String),
}
