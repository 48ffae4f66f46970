//! API server state

use std::sync::Arc;

use crate::service::TrainDataBackend;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Shared train data backend; a single instance serves every request
    pub backend: Arc<dyn TrainDataBackend>,
}

impl AppState {
    pub fn new(backend: Arc<dyn TrainDataBackend>) -> Self {
        Self { backend }
    }
}
