use std::fmt;

use tracing::{debug, trace};

/// Response returned when no handler in the chain accepts a request.
pub const UNHANDLED: &str = "No handler found for the request.";

/// A node in a chain of responsibility.
///
/// Each handler either answers a request itself or forwards it to its
/// successor. The successor is owned, so a chain is always finite and acyclic.
pub trait Handler: Send + Sync {
    fn name(&self) -> &str;

    /// Whether this node alone would answer `request`.
    ///
    /// Must agree with `handle`: when this returns `true`, `handle` answers
    /// without forwarding.
    fn can_handle(&self, request: &str) -> bool;

    fn handle(&self, request: &str) -> String;

    fn next(&self) -> Option<&dyn Handler>;

    /// Replace the successor, returning the previous one.
    fn set_next(&mut self, next: Box<dyn Handler>) -> Option<Box<dyn Handler>>;

    /// Detach the successor, leaving this node terminal.
    fn take_next(&mut self) -> Option<Box<dyn Handler>>;

    fn forward(&self, request: &str) -> String {
        match self.next() {
            Some(next) => {
                debug!(from = self.name(), to = next.name(), request, "forwarding request");
                next.handle(request)
            }
            None => {
                trace!(handler = self.name(), request, "end of chain reached");
                UNHANDLED.to_string()
            }
        }
    }
}

/// Handler that accepts exactly one marker value.
pub struct MarkerHandler {
    name: String,
    marker: String,
    next: Option<Box<dyn Handler>>,
}

impl MarkerHandler {
    pub fn new(name: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            marker: marker.into(),
            next: None,
        }
    }

    pub fn concrete_a() -> Self {
        Self::new("ConcreteHandlerA", "A")
    }

    pub fn concrete_b() -> Self {
        Self::new("ConcreteHandlerB", "B")
    }

    pub fn concrete_c() -> Self {
        Self::new("ConcreteHandlerC", "C")
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn response(&self) -> String {
        format!("{} handled the request.", self.name)
    }
}

impl Handler for MarkerHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn can_handle(&self, request: &str) -> bool {
        request == self.marker
    }

    fn handle(&self, request: &str) -> String {
        if self.can_handle(request) {
            debug!(handler = %self.name, request, "request handled");
            self.response()
        } else {
            self.forward(request)
        }
    }

    fn next(&self) -> Option<&dyn Handler> {
        self.next.as_deref()
    }

    fn set_next(&mut self, next: Box<dyn Handler>) -> Option<Box<dyn Handler>> {
        self.next.replace(next)
    }

    fn take_next(&mut self) -> Option<Box<dyn Handler>> {
        self.next.take()
    }
}

impl fmt::Debug for MarkerHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkerHandler")
            .field("name", &self.name)
            .field("marker", &self.marker)
            .field("next", &self.next.as_ref().map(|next| next.name()))
            .finish()
    }
}
