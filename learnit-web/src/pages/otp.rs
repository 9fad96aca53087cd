use learnit_core::{OtpForm, VerifyPhase};
use yew::prelude::*;

use crate::components::ui::otp_input::OtpInput;
use crate::i18n::t;

#[derive(Properties, Clone, PartialEq)]
pub struct OtpPageProps {
    /// Fired once when the service accepts the code.
    pub on_verified: Callback<()>,
}

/// Stateful wiring for the verification flow: owns the form and phase,
/// drives the network call, and reports success upward.
#[function_component(OtpPage)]
pub fn otp_page(props: &OtpPageProps) -> Html {
    let form = use_state(OtpForm::new);
    let phase = use_state(VerifyPhase::default);

    let on_change = {
        let form = form.clone();
        Callback::from(move |next: OtpForm| form.set(next))
    };

    let onsubmit = {
        let form = form.clone();
        let phase = phase.clone();
        let on_verified = props.on_verified.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if phase.is_submitting() {
                return;
            }
            let submitting = phase.begin_submit();
            if !submitting.is_submitting() {
                return;
            }
            phase.set(submitting.clone());
            submit_code(form.code(), submitting, phase.clone(), on_verified.clone());
        })
    };

    html! {
        <OtpPageView
            form={(*form).clone()}
            phase={(*phase).clone()}
            {on_change}
            {onsubmit}
        />
    }
}

/// Resolve the in-flight phase and decide whether the success signal
/// fires.
#[cfg(any(target_arch = "wasm32", test))]
fn settle(submitting: &VerifyPhase, outcome: Result<(), String>) -> (VerifyPhase, bool) {
    let settled = submitting.resolve(outcome);
    let verified = settled == VerifyPhase::Success;
    (settled, verified)
}

#[cfg(target_arch = "wasm32")]
fn submit_code(
    code: String,
    submitting: VerifyPhase,
    phase: UseStateHandle<VerifyPhase>,
    on_verified: Callback<()>,
) {
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = match crate::api::verify_otp(&code).await {
            Ok(()) => Ok(()),
            Err(err) => {
                log::error!("OTP verification failed: {err}");
                Err(err.to_string())
            }
        };
        // Resolve against the phase captured at submit time; the handle's
        // render-time snapshot may be stale by the time the call settles.
        let (settled, verified) = settle(&submitting, outcome);
        phase.set(settled);
        if verified {
            on_verified.emit(());
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn submit_code(
    code: String,
    submitting: VerifyPhase,
    phase: UseStateHandle<VerifyPhase>,
    on_verified: Callback<()>,
) {
    let _ = (code, submitting, phase, on_verified);
}


#[derive(Properties, Clone, PartialEq)]
pub struct OtpPageViewProps {
    pub form: OtpForm,
    pub phase: VerifyPhase,
    pub on_change: Callback<OtpForm>,
    pub onsubmit: Callback<SubmitEvent>,
}

#[function_component(OtpPageView)]
pub fn otp_page_view(props: &OtpPageViewProps) -> Html {
    let submitting = props.phase.is_submitting();
    let submit_label = if submitting {
        t("otp.verifying")
    } else {
        t("otp.submit")
    };

    html! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-6" data-testid="otp-screen">
            <div class="text-center space-y-1">
                <h1 class="text-2xl font-bold tracking-tight">{ t("otp.headline") }</h1>
                <p class="text-sm opacity-60">{ t("otp.subline") }</p>
            </div>
            <form onsubmit={props.onsubmit.clone()} class="flex flex-col items-center gap-4">
                <label for="otp-slot-0">{ t("otp.label") }</label>
                <OtpInput form={props.form.clone()} on_change={props.on_change.clone()} />
                { props.phase.failure().map(|message| html! {
                    <p class="text-red-600" role="alert" data-testid="otp-error">{ message }</p>
                }).unwrap_or_default() }
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled={submitting}
                    data-testid="otp-submit"
                >
                    { submit_label }
                </button>
            </form>
        </div>
    }
}
