use std::sync::Arc;

use crate::store::ProductStore;

#[derive(Clone)]
pub struct AppState {
    pub store: ProductStore,
    pub api_key: Arc<str>,
}

impl AppState {
    pub fn new(store: ProductStore, api_key: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            api_key: api_key.into(),
        }
    }
}
