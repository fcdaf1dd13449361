use std::{error, fmt::Display};

use crate::Pos;

/// Arguments rejected before any carving takes place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidArgument {
    /// One of the sides of the grid is zero
    EmptyGrid { shape: [usize; 2] },
    /// The starting cell lies outside the grid
    StartOutOfBounds { start: Pos, shape: [usize; 2] },
}
impl Display for InvalidArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidArgument::EmptyGrid { shape: [w, h] } => {
                write!(f, "the grid must be at least 1x1, got {w}x{h}")
            }
            InvalidArgument::StartOutOfBounds {
                start: [x, y],
                shape: [w, h],
            } => write!(f, "start cell [{x},{y}] is outside the {w}x{h} grid"),
        }
    }
}
impl error::Error for InvalidArgument {}

/// Error returned by the maze generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    InvalidArgument(InvalidArgument),
    /// The grid is too big to be represented or allocated
    ResourceExhaustion { shape: [usize; 2] },
}
impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidArgument(_) => write!(f, "invalid argument"),
            Error::ResourceExhaustion { shape: [w, h] } => {
                write!(f, "cannot allocate a {w}x{h} grid")
            }
        }
    }
}
impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::InvalidArgument(err) => Some(err),
            Error::ResourceExhaustion { .. } => None,
        }
    }
}
impl From<InvalidArgument> for Error {
    fn from(value: InvalidArgument) -> Self {
        Self::InvalidArgument(value)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::{Error, InvalidArgument};

    #[test]
    fn source_is_the_rejected_argument() {
        let err = Error::from(InvalidArgument::EmptyGrid { shape: [0, 5] });
        assert_eq!(
            err.source().map(ToString::to_string),
            Some("the grid must be at least 1x1, got 0x5".to_owned())
        );
        assert!(Error::ResourceExhaustion {
            shape: [usize::MAX, 2]
        }
        .source()
        .is_none());
    }
}
