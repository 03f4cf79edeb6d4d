use std::sync::Arc;

use crate::store::PriceStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PriceStore>,
}
