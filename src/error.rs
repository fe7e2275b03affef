//! Error types for naming-convention resolution.

/// Failure reported by a filesystem probe.
///
/// Probes are read-only, so the variants only describe lookups that could not
/// be answered.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// Path does not exist.
    #[error("not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: String,
    },

    /// Expected a directory but found something else.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The path that is not a directory.
        path: String,
    },

    /// I/O error with context.
    #[error("{operation} failed for {path}: {source}")]
    Io {
        /// The operation that failed.
        operation: &'static str,
        /// The path involved in the operation.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ProbeError {
    /// Attach an operation and path to a raw I/O error.
    pub fn io(operation: &'static str, path: impl Into<String>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => ProbeError::NotFound { path },
            std::io::ErrorKind::NotADirectory => ProbeError::NotADirectory { path },
            _ => ProbeError::Io {
                operation,
                path,
                source,
            },
        }
    }
}

/// Reason a naming operation could not produce its result.
///
/// Every fails-soft entry point maps these onto its documented fallback value
/// (the input path, an empty string, or `-1`). The variant names which
/// precondition failed so callers can report it.
///
/// # Examples
///
/// ```rust
/// use scope_naming::NamingError;
///
/// let err = NamingError::MissingMarker {
///     marker: "-p",
///     name: "pre_t5.TIF".into(),
/// };
/// assert_eq!(err.to_string(), "marker '-p' not found in pre_t5.TIF");
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum NamingError {
    /// Empty input.
    #[error("empty path")]
    EmptyPath,

    /// Neither `/` nor `\` occurs in the path.
    #[error("no path delimiter in {path}")]
    NoDelimiter {
        /// The path without a delimiter.
        path: String,
    },

    /// The file name has no `.` extension.
    #[error("no extension in {name}")]
    NoExtension {
        /// The file name without an extension.
        name: String,
    },

    /// A convention marker is absent.
    #[error("marker '{marker}' not found in {name}")]
    MissingMarker {
        /// The marker that was expected.
        marker: &'static str,
        /// The name or path that was searched.
        name: String,
    },

    /// A token was located but does not have the expected shape.
    #[error("invalid token '{token}' in {name}: {reason}")]
    InvalidToken {
        /// The offending token.
        token: String,
        /// The name or path the token came from.
        name: String,
        /// What is wrong with the token.
        reason: &'static str,
    },

    /// The input image is not an existing file.
    #[error("image is not an existing file: {path}")]
    ImageNotFound {
        /// The missing image path.
        path: String,
    },

    /// The candidate companion path does not exist.
    #[error("companion does not exist: {candidate}")]
    CompanionNotFound {
        /// The derived candidate that was checked.
        candidate: String,
    },

    /// A directory was scanned but no entry qualified as the companion.
    #[error("no companion for {path} in {directory}")]
    NoCompanion {
        /// The input image path.
        path: String,
        /// The directory that was scanned.
        directory: String,
    },

    /// The probe could not answer.
    #[error(transparent)]
    Probe(#[from] ProbeError),
}

impl NamingError {
    pub(crate) fn missing(marker: &'static str, name: &str) -> Self {
        NamingError::MissingMarker {
            marker,
            name: name.to_owned(),
        }
    }

    pub(crate) fn invalid(token: &str, name: &str, reason: &'static str) -> Self {
        NamingError::InvalidToken {
            token: token.to_owned(),
            name: name.to_owned(),
            reason,
        }
    }
}
