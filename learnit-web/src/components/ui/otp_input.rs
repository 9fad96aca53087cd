use learnit_core::{OTP_LEN, OtpForm, SlotEdit};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::i18n::tr;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub form: OtpForm,
    pub on_change: Callback<OtpForm>,
}

fn focus_slot(refs: &[NodeRef], idx: usize) {
    if let Some(input) = refs
        .get(idx)
        .and_then(|node| node.cast::<web_sys::HtmlInputElement>())
    {
        let _ = input.focus();
    }
}

fn slot_input_handler(
    idx: usize,
    form: OtpForm,
    on_change: Callback<OtpForm>,
    refs: Rc<Vec<NodeRef>>,
) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let Some(input) = e
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let mut next = form.clone();
        match next.set_slot(idx, &input.value()) {
            SlotEdit::Rejected => {
                // Undo the browser's edit; the slot keeps its stored value.
                input.set_value(next.slot(idx));
            }
            SlotEdit::AdvanceTo(target) => {
                focus_slot(&refs, target);
                on_change.emit(next);
            }
            SlotEdit::Accepted => on_change.emit(next),
        }
    })
}

fn slot_keydown_handler(
    idx: usize,
    form: OtpForm,
    refs: Rc<Vec<NodeRef>>,
) -> Callback<KeyboardEvent> {
    Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Backspace"
            && let Some(target) = form.backspace_target(idx)
        {
            focus_slot(&refs, target);
        }
    })
}

/// One input per code digit. Slot edits go through the form's
/// validation; the reported decision drives focus between slots.
#[function_component(OtpInput)]
pub fn otp_input(props: &Props) -> Html {
    let refs = use_memo((), |()| {
        (0..OTP_LEN).map(|_| NodeRef::default()).collect::<Vec<_>>()
    });

    {
        let refs = refs.clone();
        use_effect_with((), move |()| {
            focus_slot(&refs, 0);
            || {}
        });
    }

    let slots = (0..OTP_LEN).map(|idx| {
        let oninput =
            slot_input_handler(idx, props.form.clone(), props.on_change.clone(), refs.clone());
        let onkeydown = slot_keydown_handler(idx, props.form.clone(), refs.clone());
        let n = (idx + 1).to_string();
        let mut args = std::collections::BTreeMap::new();
        args.insert("n", n.as_str());
        html! {
            <input
                ref={refs[idx].clone()}
                id={format!("otp-slot-{idx}")}
                class="otp-input__slot"
                type="text"
                inputmode="numeric"
                autocomplete="one-time-code"
                maxlength="1"
                required=true
                value={props.form.slot(idx).to_string()}
                aria-label={tr("otp.slot_aria", Some(&args))}
                data-testid={format!("otp-input-{idx}")}
                {oninput}
                {onkeydown}
            />
        }
    });

    html! {
        <div class="otp-input" role="group" aria-label={crate::i18n::t("otp.label")}>
            { for slots }
        </div>
    }
}
