//! TOML description of a chain.
//!
//! ```toml
//! [[handlers]]
//! name = "ConcreteHandlerA"
//! marker = "A"
//! ```

use serde::Deserialize;
use tracing::debug;

use crate::chain::{Chain, ChainBuilder, MarkerHandler};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandlerSpec {
    pub name: String,
    pub marker: String,
}

impl HandlerSpec {
    pub fn new(name: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            marker: marker.into(),
        }
    }
}

/// Upper bound on handlers in a configured chain. Dispatch recurses once per
/// node, so the depth must stay well inside a thread's stack.
pub const MAX_HANDLERS: usize = 256;

/// Handlers listed head-first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainConfig {
    #[serde(default)]
    pub handlers: Vec<HandlerSpec>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            handlers: vec![
                HandlerSpec::new("ConcreteHandlerA", "A"),
                HandlerSpec::new("ConcreteHandlerB", "B"),
                HandlerSpec::new("ConcreteHandlerC", "C"),
            ],
        }
    }
}

impl ChainConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ChainConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.handlers.len() > MAX_HANDLERS {
            return Err(ConfigError::TooManyHandlers {
                count: self.handlers.len(),
                max: MAX_HANDLERS,
            });
        }
        for (index, spec) in self.handlers.iter().enumerate() {
            if spec.name.trim().is_empty() {
                return Err(ConfigError::empty_field(index, "name"));
            }
            if spec.marker.is_empty() {
                return Err(ConfigError::empty_field(index, "marker"));
            }
        }
        Ok(())
    }

    pub fn build(&self) -> Result<Chain, ConfigError> {
        self.validate()?;
        debug!(handlers = self.handlers.len(), "building chain from config");

        let chain = self
            .handlers
            .iter()
            .fold(ChainBuilder::new(), |builder, spec| {
                builder.then(MarkerHandler::new(spec.name.as_str(), spec.marker.as_str()))
            })
            .build();
        Ok(chain)
    }
}
