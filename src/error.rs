use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The application name must be usable verbatim as a path segment.
    #[error("application name must not be empty")]
    EmptyAppName,

    /// A variable the platform layout depends on (`HOME` on Unix and macOS,
    /// `APPDATA` on Windows) is not set in the resolver's environment.
    #[error("required environment variable {name} is not set")]
    MissingVar { name: &'static str },

    #[error("failed to {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(action: &'static str, path: PathBuf, source: std::io::Error) -> Self {
        Error::Io {
            action,
            path,
            source,
        }
    }
}
