use std::collections::BTreeMap;
use yew::prelude::*;

use crate::i18n::{t, tr};

#[derive(Properties, Clone, PartialEq)]
pub struct QuestionPageProps {
    pub id: u32,
    pub on_back: Callback<()>,
}

#[function_component(QuestionPage)]
pub fn question_page(props: &QuestionPageProps) -> Html {
    let id = props.id.to_string();
    let mut args = BTreeMap::new();
    args.insert("id", id.as_str());
    let title = tr("question.title", Some(&args));

    let back = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="question" data-testid="question-screen">
            <h1>{ title }</h1>
            <button type="button" class="btn" onclick={back} data-testid="question-back">
                { t("question.back") }
            </button>
        </section>
    }
}
