use std::fmt;

use tracing::{debug, trace};

use super::handler::{Handler, MarkerHandler, UNHANDLED};

// =============================================================================
// Chain construction
// =============================================================================

/// Collects handlers in priority order and links them into a [`Chain`].
#[derive(Default)]
pub struct ChainBuilder {
    handlers: Vec<Box<dyn Handler>>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(self, handler: impl Handler + 'static) -> Self {
        self.then_boxed(Box::new(handler))
    }

    pub fn then_boxed(mut self, handler: Box<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Link every handler to the one added after it. The last handler keeps
    /// whatever successor it already had (normally none).
    pub fn build(self) -> Chain {
        let len = self.handlers.len();
        let head = self
            .handlers
            .into_iter()
            .rev()
            .fold(None, |next: Option<Box<dyn Handler>>, mut handler| {
                if let Some(next) = next {
                    handler.set_next(next);
                }
                Some(handler)
            });

        debug!(handlers = len, "chain built");
        Chain { head }
    }
}

// =============================================================================
// Immutable chain
// =============================================================================

/// Outcome of sending a request, with the node that answered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub handled_by: Option<String>,
    pub response: String,
    /// Number of handlers that inspected the request.
    pub hops: usize,
}

impl Dispatch {
    pub fn is_handled(&self) -> bool {
        self.handled_by.is_some()
    }
}

/// A built chain. Only shared access to its nodes is exposed, so the topology
/// cannot change once constructed.
///
/// `send` recurses once per inspected node; chains loaded from config are
/// bounded by [`crate::config::MAX_HANDLERS`].
pub struct Chain {
    head: Option<Box<dyn Handler>>,
}

impl Chain {
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    pub fn empty() -> Self {
        Self { head: None }
    }

    pub fn head(&self) -> Option<&dyn Handler> {
        self.head.as_deref()
    }

    pub fn send(&self, request: &str) -> String {
        match self.head() {
            Some(head) => head.handle(request),
            None => {
                trace!(request, "empty chain");
                UNHANDLED.to_string()
            }
        }
    }

    pub fn dispatch(&self, request: &str) -> Dispatch {
        let mut hops = 0;
        for node in self.iter() {
            hops += 1;
            if node.can_handle(request) {
                return Dispatch {
                    handled_by: Some(node.name().to_string()),
                    response: node.handle(request),
                    hops,
                };
            }
        }

        Dispatch {
            handled_by: None,
            response: UNHANDLED.to_string(),
            hops,
        }
    }

    pub fn iter(&self) -> Nodes<'_> {
        Nodes { current: self.head() }
    }

    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|node| node.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl Default for Chain {
    /// A → B → C
    fn default() -> Self {
        ChainBuilder::new()
            .then(MarkerHandler::concrete_a())
            .then(MarkerHandler::concrete_b())
            .then(MarkerHandler::concrete_c())
            .build()
    }
}

impl Drop for Chain {
    // Unlink nodes one at a time so dropping a long chain does not recurse.
    fn drop(&mut self) {
        let mut node = self.head.take();
        while let Some(mut current) = node {
            node = current.take_next();
        }
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Head-first iterator over the nodes of a [`Chain`].
pub struct Nodes<'a> {
    current: Option<&'a dyn Handler>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a dyn Handler;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next();
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Chain {
        Chain::default()
    }

    #[test]
    fn test_default_chain_scenarios() {
        let chain = abc();
        assert_eq!(chain.send("A"), "ConcreteHandlerA handled the request.");
        assert_eq!(chain.send("B"), "ConcreteHandlerB handled the request.");
        assert_eq!(chain.send("C"), "ConcreteHandlerC handled the request.");
        assert_eq!(chain.send("D"), UNHANDLED);
        assert_eq!(chain.send("D"), "No handler found for the request.");
    }

    #[test]
    fn test_builder_preserves_order() {
        let builder = Chain::builder()
            .then(MarkerHandler::concrete_a())
            .then(MarkerHandler::concrete_b())
            .then(MarkerHandler::concrete_c());
        assert_eq!(builder.len(), 3);
        assert!(!builder.is_empty());
        assert!(ChainBuilder::new().is_empty());

        let chain = builder.build();
        assert_eq!(
            chain.names(),
            vec!["ConcreteHandlerA", "ConcreteHandlerB", "ConcreteHandlerC"]
        );
        assert_eq!(chain.len(), 3);
        assert!(!chain.is_empty());
        assert!(chain.iter().last().and_then(|node| node.next()).is_none());
    }

    #[test]
    fn test_empty_chain_returns_sentinel() {
        let chain = Chain::empty();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert_eq!(chain.send("A"), UNHANDLED);

        let built = ChainBuilder::new().build();
        assert!(built.is_empty());
        assert_eq!(built.send("anything"), UNHANDLED);
    }

    #[test]
    fn test_single_handler_chain() {
        let chain = Chain::builder().then(MarkerHandler::concrete_b()).build();
        assert_eq!(chain.send("B"), "ConcreteHandlerB handled the request.");
        assert_eq!(chain.send("A"), UNHANDLED);
    }

    #[test]
    fn test_earlier_handler_wins_on_duplicate_marker() {
        let chain = Chain::builder()
            .then(MarkerHandler::new("First", "X"))
            .then(MarkerHandler::new("Second", "X"))
            .build();
        assert_eq!(chain.send("X"), "First handled the request.");

        let dispatch = chain.dispatch("X");
        assert_eq!(dispatch.handled_by.as_deref(), Some("First"));
        assert_eq!(dispatch.hops, 1);
    }

    #[test]
    fn test_send_is_idempotent() {
        let chain = abc();
        let requests = ["A", "B", "C", "D"];
        let first: Vec<String> = requests.iter().map(|r| chain.send(r)).collect();
        for _ in 0..3 {
            let again: Vec<String> = requests.iter().map(|r| chain.send(r)).collect();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn test_dispatch_counts_hops() {
        let chain = abc();

        let a = chain.dispatch("A");
        assert!(a.is_handled());
        assert_eq!(a.hops, 1);

        let c = chain.dispatch("C");
        assert_eq!(c.handled_by.as_deref(), Some("ConcreteHandlerC"));
        assert_eq!(c.response, "ConcreteHandlerC handled the request.");
        assert_eq!(c.hops, 3);

        let miss = chain.dispatch("D");
        assert!(!miss.is_handled());
        assert_eq!(miss.response, UNHANDLED);
        assert_eq!(miss.hops, 3);
    }

    #[test]
    fn test_dispatch_agrees_with_send() {
        let chain = abc();
        for request in ["A", "B", "C", "D", ""] {
            assert_eq!(chain.dispatch(request).response, chain.send(request));
        }
    }

    struct CaseInsensitive {
        marker: &'static str,
        next: Option<Box<dyn Handler>>,
    }

    impl Handler for CaseInsensitive {
        fn name(&self) -> &str {
            "CaseInsensitive"
        }

        fn can_handle(&self, request: &str) -> bool {
            request.eq_ignore_ascii_case(self.marker)
        }

        fn handle(&self, request: &str) -> String {
            if self.can_handle(request) {
                format!("matched {}", request)
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

    #[test]
    fn test_custom_handler_in_chain() {
        let chain = Chain::builder()
            .then(MarkerHandler::concrete_a())
            .then(CaseInsensitive { marker: "z", next: None })
            .then(MarkerHandler::concrete_c())
            .build();

        assert_eq!(chain.send("Z"), "matched Z");
        assert_eq!(chain.send("C"), "ConcreteHandlerC handled the request.");
        assert_eq!(chain.dispatch("z").hops, 2);
    }

    #[test]
    fn test_chain_is_shareable_across_threads() {
        let chain = abc();
        std::thread::scope(|scope| {
            let handles: Vec<_> = ["A", "B", "C", "D"]
                .into_iter()
                .map(|request| {
                    let chain = &chain;
                    scope.spawn(move || chain.send(request))
                })
                .collect();
            let responses: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert_eq!(responses[0], "ConcreteHandlerA handled the request.");
            assert_eq!(responses[3], UNHANDLED);
        });
    }

    #[test]
    fn test_long_chain_drops_without_overflow() {
        let chain = (0..200_000)
            .fold(Chain::builder(), |builder, i| {
                builder.then(MarkerHandler::new(format!("H{i}"), format!("m{i}")))
            })
            .build();
        assert_eq!(chain.len(), 200_000);
        assert_eq!(chain.dispatch("missing").hops, 200_000);
        drop(chain);
    }

    #[test]
    fn test_debug_lists_names() {
        let debug = format!("{:?}", abc());
        assert_eq!(debug, r#"["ConcreteHandlerA", "ConcreteHandlerB", "ConcreteHandlerC"]"#);
    }
}
