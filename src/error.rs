use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to parse chain config: {message}")]
    ParseError { message: String },

    #[error("Handler #{index} has an empty '{field}'")]
    EmptyField { index: usize, field: &'static str },

    #[error("Chain config lists {count} handlers (max: {max})")]
    TooManyHandlers { count: usize, max: usize },
}

impl ConfigError {
    pub fn empty_field(index: usize, field: &'static str) -> Self {
        Self::EmptyField { index, field }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError {
            message: err.message().to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("Invalid {field} for {shape}: {value} (must be finite and non-negative)")]
    InvalidDimension {
        shape: &'static str,
        field: &'static str,
        value: f64,
    },
}

impl ShapeError {
    pub(crate) fn check(shape: &'static str, field: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(Self::InvalidDimension { shape, field, value })
        }
    }
}
