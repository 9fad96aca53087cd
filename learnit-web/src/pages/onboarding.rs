use yew::prelude::*;

use crate::i18n::t;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OnboardingAction {
    GetStarted,
    LogIn,
}

#[derive(Properties, Clone, PartialEq)]
pub struct OnboardingPageProps {
    pub on_action: Callback<OnboardingAction>,
}

fn action_callback<E: 'static>(
    on_action: &Callback<OnboardingAction>,
    action: OnboardingAction,
) -> Callback<E> {
    let on_action = on_action.clone();
    Callback::from(move |_: E| on_action.emit(action))
}

/// Landing screen shown before verification. Both controls report an
/// action upward; the owner decides where each one navigates.
#[function_component(OnboardingPage)]
pub fn onboarding_page(props: &OnboardingPageProps) -> Html {
    let get_started: Callback<MouseEvent> =
        action_callback(&props.on_action, OnboardingAction::GetStarted);
    let log_in: Callback<MouseEvent> = action_callback(&props.on_action, OnboardingAction::LogIn);

    html! {
        <div class="min-h-screen flex items-center justify-center" data-testid="onboarding-screen">
            <div class="flex flex-col items-center text-center gap-6">
                <div class="space-y-1">
                    <h1 class="text-2xl font-bold tracking-tight">{ t("onboarding.headline") }</h1>
                    <p class="text-sm opacity-60">{ t("onboarding.subline") }</p>
                </div>
                <button
                    type="button"
                    class="btn btn-primary"
                    onclick={get_started}
                    data-testid="onboarding-cta"
                >
                    { t("onboarding.cta") }
                </button>
                <button
                    type="button"
                    class="btn btn-ghost text-xs"
                    onclick={log_in}
                    data-testid="onboarding-login"
                >
                    { t("onboarding.login_link") }
                </button>
            </div>
        </div>
    }
}
