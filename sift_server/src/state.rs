use std::sync::Arc;

use sift_query::QueryInterpreter;
use sift_store::CandidateStore;

/// Shared, read-only handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: CandidateStore,
    pub interpreter: Arc<QueryInterpreter>,
}

impl AppState {
    #[must_use]
    pub fn new(store: CandidateStore, interpreter: QueryInterpreter) -> Self {
        Self {
            store,
            interpreter: Arc::new(interpreter),
        }
    }
}
