use std::path::PathBuf;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by settings persistence and user-supplied lookups.
///
/// Nothing on the interactive path returns these; loading settings and
/// building a catalog always succeed.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Reading or writing the settings file failed.
    #[error("settings file {path}: {source}")]
    Io {
        /// The file that was being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Settings could not be serialized.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The platform config directory could not be determined.
    #[error("could not determine a config directory for settings")]
    NoConfigDir,

    /// A content flag name was not recognized.
    #[error("unknown content flag: \"{0}\" (expected bom, ot, nt, de or en)")]
    UnknownFlag(String),

    /// A language name was not recognized.
    #[error("unknown language: \"{0}\" (expected de or en)")]
    UnknownLanguage(String),

    /// No book with the given code exists in any table for the language.
    #[error("no book with code \"{code}\"")]
    NotFound {
        /// The code that was looked up.
        code: String,
    },
}
