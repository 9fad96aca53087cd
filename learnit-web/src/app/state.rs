use learnit_core::{Catalog, PointsBalance, SIGNUP_GRANT};
use yew::prelude::*;

/// Shared application state handles, one per concern.
#[derive(Clone)]
pub struct AppState {
    pub catalog: UseStateHandle<Catalog>,
    pub points: UseStateHandle<PointsBalance>,
    pub catalog_ready: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        catalog: use_state(Catalog::empty),
        points: use_state(|| SIGNUP_GRANT),
        catalog_ready: use_state(|| false),
    }
}

impl AppState {
    #[must_use]
    pub fn catalog_loaded(&self) -> bool {
        !self.catalog.products.is_empty()
    }
}
