use super::builder::{Chain, Dispatch};

/// Owns a chain and sends requests into its head.
#[derive(Debug, Default)]
pub struct Client {
    handler_chain: Chain,
}

impl Client {
    /// Client over the default A → B → C chain.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chain(chain: Chain) -> Self {
        Self { handler_chain: chain }
    }

    pub fn chain(&self) -> &Chain {
        &self.handler_chain
    }

    pub fn send_request(&self, request: &str) -> String {
        self.handler_chain.send(request)
    }

    pub fn dispatch(&self, request: &str) -> Dispatch {
        self.handler_chain.dispatch(request)
    }
}
