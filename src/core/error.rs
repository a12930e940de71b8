use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

/// Reasons a reading that was fetched successfully could still not be used.
#[derive(Debug, PartialEq)]
pub enum Reason {
    /// The backing file opened but contained no token at all.
    Empty,
    /// The first whitespace-delimited token was not an ASCII-decimal integer.
    NotDecimal(String),
}

impl From<Reason> for Error {
    fn from(reason: Reason) -> Error {
        Error::InvalidReading(reason)
    }
}

#[derive(Debug)]
pub enum Error {
    /// The backing path could not be opened: missing device, permission
    /// denied, unplugged interface. Recoverable; the poll loop skips the
    /// iteration and tries again on the next tick.
    Open { path: PathBuf, source: io::Error },
    InvalidReading(Reason),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Open { path, source } => {
                write!(f, "could not open {}: {}", path.display(), source)
            }
            Error::InvalidReading(Reason::Empty) => write!(f, "reading was empty"),
            Error::InvalidReading(Reason::NotDecimal(token)) => {
                write!(f, "reading {token:?} is not a decimal integer")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Open { source, .. } => Some(source),
            Error::InvalidReading(_) => None,
        }
    }
}
