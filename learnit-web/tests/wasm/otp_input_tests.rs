use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlInputElement;
use yew::Renderer;
use yew::prelude::*;

use learnit_core::OtpForm;
use learnit_web::components::ui::otp_input::OtpInput;
use learnit_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

#[function_component(InputHost)]
fn input_host() -> Html {
    let form = use_state(OtpForm::new);
    let on_change = {
        let form = form.clone();
        Callback::from(move |next: OtpForm| form.set(next))
    };
    html! { <OtpInput form={(*form).clone()} {on_change} /> }
}

#[wasm_bindgen_test]
fn first_slot_receives_initial_focus() {
    Renderer::<InputHost>::with_root(ensure_root()).render();
    let doc = dom::document();
    let active = doc.active_element().expect("active element");
    assert_eq!(active.id(), "otp-slot-0");
}

#[wasm_bindgen_test]
fn slots_carry_numeric_entry_hints() {
    Renderer::<InputHost>::with_root(ensure_root()).render();
    let doc = dom::document();
    let slot: HtmlInputElement = doc
        .get_element_by_id("otp-slot-2")
        .expect("slot exists")
        .dyn_into()
        .expect("slot is an input");
    assert_eq!(slot.get_attribute("inputmode").unwrap_or_default(), "numeric");
    assert_eq!(
        slot.get_attribute("autocomplete").unwrap_or_default(),
        "one-time-code"
    );
    assert_eq!(slot.max_length(), 1);
}
