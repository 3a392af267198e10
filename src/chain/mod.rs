//! Chain of Responsibility.
//!
//! Handlers are linked head-first; a request walks the chain until a handler
//! whose marker matches answers it, or falls off the end and receives
//! [`UNHANDLED`].

mod builder;
mod client;
mod handler;

pub use builder::{Chain, ChainBuilder, Dispatch, Nodes};
pub use client::Client;
pub use handler::{Handler, MarkerHandler, UNHANDLED};
