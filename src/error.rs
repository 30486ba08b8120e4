use thiserror::Error;

/// Error type for configuration, message composition and logging bootstrap.
///
/// Lookups and searches never produce this; absence is `None` and no match is
/// an empty `Vec`.
#[derive(Error, Debug, Clone, PartialEq, uniffi::Error)]
#[uniffi(flat_error)]
pub enum DashboardError {
    #[error("invalid range for {field}: min {min} is greater than max {max}")]
    InvalidRange { field: String, min: f64, max: f64 },

    #[error("config error: {0}")]
    Config(String),

    #[error("field must not be blank: {0}")]
    EmptyField(String),

    #[error("no ids left after {0}")]
    IdExhausted(String),

    #[error("logging error: {0}")]
    Logging(String),
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Config(err.to_string())
    }
}
