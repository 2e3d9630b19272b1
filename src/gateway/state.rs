use std::sync::Arc;

use crate::provider::ChatProvider;

/// Shared handler state: the model provider behind an `Arc`.
///
/// The provider is stateless per call, so cloning the state for each
/// connection is cheap and free of cross-request coupling.
pub struct HandlerState<P: ChatProvider + 'static> {
    pub provider: Arc<P>,
}

impl<P: ChatProvider + 'static> HandlerState<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }
}

impl<P: ChatProvider + 'static> Clone for HandlerState<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}
