use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("policy violation: {0}")]
    PolicyViolation(String),
    #[error("filesystem error: {0}")]
    FilesystemError(String),
    #[error("no CODEOWNERS file found under {0}")]
    NotFound(String),
    #[error("CODEOWNERS file too large: {size} bytes (limit {limit})")]
    TooLarge { size: u64, limit: u64 },
    #[error("invalid path: {0}")]
    InvalidPath(String),
    #[error("repository tree unavailable: {0}")]
    TreeUnavailable(String),
}

impl From<crate::types::errors::Error> for ApiError {
    fn from(e: crate::types::errors::Error) -> Self {
        use crate::types::errors::ErrorKind::{InvalidPath, Io, Parse, Policy};
        match e.kind {
            InvalidPath => ApiError::InvalidPath(e.msg),
            Io => ApiError::FilesystemError(e.msg),
            Parse | Policy => ApiError::PolicyViolation(e.msg),
        }
    }
}

// Stable identifiers; SCREAMING_SNAKE_CASE matches the emitted IDs.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorId {
    E_POLICY,
    E_PATTERN,
    E_OWNER,
    E_DUPLICATE,
    E_NO_OWNERS,
    E_DUPLICATE_OWNER,
    E_UNKNOWN_OWNER,
    E_TOO_LARGE,
    E_COVERAGE,
    E_NOT_FOUND,
    E_GENERIC,
}

#[must_use]
pub const fn id_str(id: ErrorId) -> &'static str {
    match id {
        ErrorId::E_POLICY => "E_POLICY",
        ErrorId::E_PATTERN => "E_PATTERN",
        ErrorId::E_OWNER => "E_OWNER",
        ErrorId::E_DUPLICATE => "E_DUPLICATE",
        ErrorId::E_NO_OWNERS => "E_NO_OWNERS",
        ErrorId::E_DUPLICATE_OWNER => "E_DUPLICATE_OWNER",
        ErrorId::E_UNKNOWN_OWNER => "E_UNKNOWN_OWNER",
        ErrorId::E_TOO_LARGE => "E_TOO_LARGE",
        ErrorId::E_COVERAGE => "E_COVERAGE",
        ErrorId::E_NOT_FOUND => "E_NOT_FOUND",
        ErrorId::E_GENERIC => "E_GENERIC",
    }
}

#[must_use]
pub const fn exit_code_for(id: ErrorId) -> i32 {
    match id {
        ErrorId::E_POLICY => 10,
        ErrorId::E_PATTERN => 20,
        ErrorId::E_OWNER => 30,
        ErrorId::E_DUPLICATE => 40,
        ErrorId::E_NO_OWNERS => 41,
        ErrorId::E_DUPLICATE_OWNER => 42,
        ErrorId::E_UNKNOWN_OWNER => 50,
        ErrorId::E_TOO_LARGE => 60,
        ErrorId::E_COVERAGE => 70,
        ErrorId::E_NOT_FOUND => 80,
        ErrorId::E_GENERIC => 1,
    }
}

/// Parse an emitted id string back to its `ErrorId`.
#[must_use]
pub fn error_id_from_str(s: &str) -> Option<ErrorId> {
    let id = match s {
        "E_POLICY" => ErrorId::E_POLICY,
        "E_PATTERN" => ErrorId::E_PATTERN,
        "E_OWNER" => ErrorId::E_OWNER,
        "E_DUPLICATE" => ErrorId::E_DUPLICATE,
        "E_NO_OWNERS" => ErrorId::E_NO_OWNERS,
        "E_DUPLICATE_OWNER" => ErrorId::E_DUPLICATE_OWNER,
        "E_UNKNOWN_OWNER" => ErrorId::E_UNKNOWN_OWNER,
        "E_TOO_LARGE" => ErrorId::E_TOO_LARGE,
        "E_COVERAGE" => ErrorId::E_COVERAGE,
        "E_NOT_FOUND" => ErrorId::E_NOT_FOUND,
        "E_GENERIC" => ErrorId::E_GENERIC,
        _ => return None,
    };
    Some(id)
}

#[must_use]
pub fn exit_code_for_id_str(s: &str) -> Option<i32> {
    error_id_from_str(s).map(exit_code_for)
}

impl ApiError {
    /// Stable id for a facade error.
    #[must_use]
    pub fn id(&self) -> ErrorId {
        match self {
            ApiError::PolicyViolation(_) => ErrorId::E_POLICY,
            ApiError::NotFound(_) => ErrorId::E_NOT_FOUND,
            ApiError::TooLarge { .. } => ErrorId::E_TOO_LARGE,
            ApiError::FilesystemError(_)
            | ApiError::InvalidPath(_)
            | ApiError::TreeUnavailable(_) => ErrorId::E_GENERIC,
        }
    }
}
