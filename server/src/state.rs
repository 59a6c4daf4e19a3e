use std::sync::Arc;

use crate::store::ActivityStore;

/// Shared handler state: the data-access object behind every route.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ActivityStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        AppState { store }
    }
}
