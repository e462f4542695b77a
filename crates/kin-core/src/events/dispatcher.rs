//! EventDispatcher — synchronous event dispatch with zero overhead when
//! empty.

use std::sync::Arc;

use super::handler::KinEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// When no handlers are registered, `emit` iterates over an empty Vec —
/// effectively zero cost.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn KinEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn KinEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// Handlers that panic do not prevent subsequent handlers from
    /// receiving the event.
    fn emit<F: Fn(&dyn KinEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked; continuing");
            }
        }
    }

    // ---- Build lifecycle ----
    pub fn emit_build_started(&self, event: &BuildStartedEvent) {
        self.emit(|h| h.on_build_started(event));
    }

    pub fn emit_brand_clustered(&self, event: &BrandClusteredEvent) {
        self.emit(|h| h.on_brand_clustered(event));
    }

    pub fn emit_build_completed(&self, event: &BuildCompletedEvent) {
        self.emit(|h| h.on_build_completed(event));
    }

    // ---- Fetch lifecycle ----
    pub fn emit_fetch_started(&self, event: &FetchStartedEvent) {
        self.emit(|h| h.on_fetch_started(event));
    }

    pub fn emit_fetch_progress(&self, event: &FetchProgressEvent) {
        self.emit(|h| h.on_fetch_progress(event));
    }

    pub fn emit_fetch_completed(&self, event: &FetchCompletedEvent) {
        self.emit(|h| h.on_fetch_completed(event));
    }

    pub fn emit_fetch_error(&self, event: &FetchErrorEvent) {
        self.emit(|h| h.on_fetch_error(event));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[derive(Default)]
    struct Counter {
        progressed: AtomicUsize,
    }

    impl KinEventHandler for Counter {
        fn on_fetch_progress(&self, _event: &FetchProgressEvent) {
            self.progressed.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Panicker;

    impl KinEventHandler for Panicker {
        fn on_fetch_progress(&self, _event: &FetchProgressEvent) {
            panic!("boom");
        }
    }

    #[test]
    fn dispatch_reaches_all_handlers() {
        let counter = Arc::new(Counter::default());
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(counter.clone());
        dispatcher.emit_fetch_progress(&FetchProgressEvent {
            processed: 10,
            total: 100,
            error_count: 0,
        });
        assert_eq!(counter.progressed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn panicking_handler_does_not_block_others() {
        let counter = Arc::new(Counter::default());
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(Arc::new(Panicker));
        dispatcher.register(counter.clone());
        dispatcher.emit_fetch_progress(&FetchProgressEvent {
            processed: 1,
            total: 1,
            error_count: 0,
        });
        assert_eq!(counter.progressed.load(Ordering::SeqCst), 1);
    }
}
