use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a glitch run. None of these are recoverable; a run either
/// writes its output or fails with one of these.
#[derive(Debug, Error)]
pub enum GlitchError {
    /// The source file is missing, unreadable, or permission-denied.
    #[error("failed to read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source is too short to have anything past the protected header.
    #[error("input is {len} bytes, must be longer than the {header_skip}-byte header skip")]
    InvalidInput { len: usize, header_skip: usize },

    /// The destination could not be created or fully written.
    #[error("failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Fieldless mirror of [`GlitchError`], for branching on the failure kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Read,
    InvalidInput,
    Write,
}

impl GlitchError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Read { .. } => ErrorKind::Read,
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::Write { .. } => ErrorKind::Write,
        }
    }
}

pub type Result<T> = std::result::Result<T, GlitchError>;
