#[cfg(any(target_arch = "wasm32", test))]
use crate::app::state::AppState;
#[cfg(any(target_arch = "wasm32", test))]
use learnit_core::Catalog;
#[cfg(any(target_arch = "wasm32", test))]
use yew::prelude::*;

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Clone)]
struct BootstrapHandles {
    catalog: UseStateHandle<Catalog>,
    catalog_ready: UseStateHandle<bool>,
}

#[cfg(any(target_arch = "wasm32", test))]
fn handles_from_state(app_state: &AppState) -> BootstrapHandles {
    BootstrapHandles {
        catalog: app_state.catalog.clone(),
        catalog_ready: app_state.catalog_ready.clone(),
    }
}

#[cfg(any(target_arch = "wasm32", test))]
fn bootstrap_load(handles: &BootstrapHandles) {
    match Catalog::load_from_static() {
        Ok(catalog) => handles.catalog.set(catalog),
        Err(err) => crate::dom::console_error(&format!("Failed to load catalog data: {err}")),
    }
    handles.catalog_ready.set(true);
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let handles = handles_from_state(app_state);

    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            bootstrap_load(&handles);
        });
        || {}
    });
}
