use yew::prelude::*;

/// Settings is routable but intentionally blank; the route exists so the
/// nav rail has somewhere to land until the screen ships.
#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    Html::default()
}
