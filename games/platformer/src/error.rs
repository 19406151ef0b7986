use std::fmt;

/// Why a level could not be loaded.
#[derive(Debug)]
pub enum LevelError {
    /// The requested index is past the end of the level set.
    UnknownLevel { index: usize, count: usize },
    /// A level set must hold at least one level.
    Empty,
    /// Level JSON did not parse.
    Parse(serde_json::Error),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::UnknownLevel { index, count } => {
                write!(f, "level {index} does not exist ({count} defined)")
            }
            LevelError::Empty => write!(f, "level set is empty"),
            LevelError::Parse(err) => write!(f, "invalid level data: {err}"),
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelError::Parse(err) => Some(err),
            LevelError::UnknownLevel { .. } | LevelError::Empty => None,
        }
    }
}

impl From<serde_json::Error> for LevelError {
    fn from(err: serde_json::Error) -> Self {
        LevelError::Parse(err)
    }
}
