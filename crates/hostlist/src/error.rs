use std::collections::TryReserveError;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a fatal load failure.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// The host file is missing, unopenable, or failed mid-read.
    FileUnreadable,
    /// No path was given and the home directory could not be resolved.
    MissingHomeDirectory,
    /// Memory for the host list could not be reserved.
    AllocationFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FileUnreadable => "file unreadable",
            Self::MissingHomeDirectory => "missing home directory",
            Self::AllocationFailure => "allocation failure",
        };
        f.write_str(name)
    }
}

/// Error type for host list loading.
///
/// Every variant is fatal: a load that returns one of these produced no list.
/// Malformed lines are never reported here.
#[derive(Error, Debug)]
pub enum HostListError {
    /// Home directory not found.
    #[error("could not determine home directory")]
    NoHomeDir,

    /// Host file could not be opened.
    #[error("can't open file: {} ({source})", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Host file was opened but reading it failed.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from a caller-supplied reader failed.
    #[error("failed to read host list: {0}")]
    Io(#[from] io::Error),

    /// Growing the host list failed.
    #[error("out of memory while building host list: {0}")]
    Alloc(#[from] TryReserveError),
}

impl HostListError {
    /// Returns the failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoHomeDir => ErrorKind::MissingHomeDirectory,
            Self::Open { .. } | Self::Read { .. } | Self::Io(_) => ErrorKind::FileUnreadable,
            Self::Alloc(_) => ErrorKind::AllocationFailure,
        }
    }
}
