//! Two behavioral design patterns expressed with Rust traits.
//!
//! - [`chain`]: Chain of Responsibility, a linked sequence of handlers that
//!   either answer a request or pass it on.
//! - [`shapes`]: method overriding through a shared `Shape` capability.

pub mod chain;
pub mod config;
pub mod error;
pub mod shapes;

pub use chain::{Chain, ChainBuilder, Client, Dispatch, Handler, MarkerHandler, UNHANDLED};
pub use config::{ChainConfig, HandlerSpec, MAX_HANDLERS};
pub use error::{ConfigError, ShapeError};
pub use shapes::{total_area, Circle, Shape, ShapeKind, Square};
