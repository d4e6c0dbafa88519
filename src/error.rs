use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, HostError>;

/// Fallback text for loaders that refuse a library without saying why.
const UNKNOWN_REASON: &str = "unknown dynamic loader error";

#[derive(ThisError,Debug)]
pub enum HostError {
    #[error("Cannot open library: {reason}")]
    LibraryLoad {
        path: String,
        reason: String,
    },
}

impl HostError {
    pub fn library_load(path: &str, e: dlopen2::Error) -> Self {
        let reason = match e {
            // the inner error carries the loader's own message (dlerror / FormatMessage)
            dlopen2::Error::OpeningLibraryError(inner) => inner.to_string(),
            other => other.to_string(),
        };
        let reason = reason.trim();
        let reason = if reason.is_empty() { UNKNOWN_REASON } else { reason };
        HostError::LibraryLoad {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}
