use yew::prelude::*;

use crate::i18n::t;

#[derive(Properties, Clone, PartialEq)]
pub struct LoginPageProps {
    pub on_continue: Callback<()>,
}

/// Post-verification landing. No credential form; the remote service has
/// already accepted the code, so the only control continues onward.
#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let on_continue = {
        let cb = props.on_continue.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="min-h-screen flex items-center justify-center" data-testid="login-screen">
            <div class="flex flex-col items-center text-center gap-4">
                <h1 class="text-2xl font-bold tracking-tight">{ t("login.title") }</h1>
                <p class="text-sm opacity-60">{ t("login.subline") }</p>
                <button
                    type="button"
                    class="btn btn-primary"
                    onclick={on_continue}
                    data-testid="login-continue"
                >
                    { t("login.continue") }
                </button>
            </div>
        </div>
    }
}
