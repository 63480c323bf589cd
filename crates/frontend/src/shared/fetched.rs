use super::api_error::ApiError;

/// Result of a read that never fails outward
///
/// `Fallback` carries the caller-supplied default together with the error
/// that replaced the server answer, so views can keep rendering while still
/// being able to show that the data is not live.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Fresh(T),
    Fallback { value: T, error: ApiError },
}

impl<T> Fetched<T> {
    pub fn is_fresh(&self) -> bool {
        matches!(self, Fetched::Fresh(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Fetched::Fallback { .. })
    }

    pub fn value(&self) -> &T {
        match self {
            Fetched::Fresh(value) | Fetched::Fallback { value, .. } => value,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Fetched::Fresh(_) => None,
            Fetched::Fallback { error, .. } => Some(error),
        }
    }

    /// The served value, whether live or fallback
    pub fn into_inner(self) -> T {
        match self {
            Fetched::Fresh(value) | Fetched::Fallback { value, .. } => value,
        }
    }

    /// Drop the fallback and surface the original failure
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            Fetched::Fresh(value) => Ok(value),
            Fetched::Fallback { error, .. } => Err(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        match self {
            Fetched::Fresh(value) => Fetched::Fresh(f(value)),
            Fetched::Fallback { value, error } => Fetched::Fallback {
                value: f(value),
                error,
            },
        }
    }
}
