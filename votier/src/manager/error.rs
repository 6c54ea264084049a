use std::error;
use std::fmt;
use votier_common::error::ElectionError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    ManagerTerminated,
    ManagerCrashed,
    Election(ElectionError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CommandError::*;
        match self {
            ManagerTerminated => write!(f, "the election manager has been terminated"),
            ManagerCrashed => write!(
                f,
                "the election manager has been crashed during command processing"
            ),
            Election(e) => e.fmt(f),
        }
    }
}

impl error::Error for CommandError {}

impl From<ElectionError> for CommandError {
    fn from(e: ElectionError) -> Self {
        CommandError::Election(e)
    }
}

impl CommandError {
    pub fn election_error(&self) -> Option<&ElectionError> {
        match self {
            CommandError::Election(e) => Some(e),
            _ => None,
        }
    }
}
