use yew::prelude::*;

use crate::i18n::t;

/// Not-found page to show when routing fails to match a known view.
#[derive(Properties, PartialEq)]
pub struct NotFoundPageProps {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFoundPage)]
pub fn not_found_page(props: &NotFoundPageProps) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="panel not-found" aria-live="assertive" data-testid="not-found-screen">
            <h1>{ t("not_found.title") }</h1>
            <p>{ t("not_found.body") }</p>
            <button type="button" onclick={go_home} data-testid="not-found-home">
                { t("not_found.go_home") }
            </button>
        </section>
    }
}
