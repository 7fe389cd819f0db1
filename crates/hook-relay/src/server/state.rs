//! Relay state
//!
//! Application state shared by the webhook handlers.

use crate::dispatcher::Dispatcher;
use std::sync::Arc;

/// Relay application state
#[derive(Clone)]
pub struct RelayState {
    dispatcher: Arc<Dispatcher>,
}

impl RelayState {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}
