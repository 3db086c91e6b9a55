use thiserror::Error;

/// Errors raised while validating and formatting a price breakdown
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BreakdownError {
    /// Non-finite or negative amount, or an amount violating a cross-field bound
    #[error("Invalid amount for {field}: {reason}")]
    InvalidAmount { field: &'static str, reason: String },
    /// Fulfillment source outside amazon / dreamship / manual
    #[error("Invalid fulfillment source: {0}")]
    InvalidFulfillment(String),
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
    /// Malformed breakdown input document
    #[error("Invalid input: {0}")]
    Input(String),
}

impl BreakdownError {
    pub fn invalid_amount(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            field,
            reason: reason.into(),
        }
    }

    /// Stable snake_case name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidAmount { .. } => "invalid_amount",
            Self::InvalidFulfillment(_) => "invalid_fulfillment",
            Self::Config(_) => "config_error",
            Self::Input(_) => "invalid_input",
        }
    }
}

impl From<serde_json::Error> for BreakdownError {
    fn from(err: serde_json::Error) -> Self {
        Self::Input(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for BreakdownError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BreakdownError>;
