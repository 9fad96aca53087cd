use std::collections::BTreeMap;
use yew::prelude::*;

use crate::i18n::{t, tr};

/// Placeholder thread list until real community data arrives.
const QUESTION_IDS: [u32; 4] = [1, 2, 3, 4];

#[derive(Properties, Clone, PartialEq)]
pub struct CommunityPageProps {
    /// Fired with the question id when a thread is opened.
    pub on_open_question: Callback<u32>,
}

#[function_component(CommunityPage)]
pub fn community_page(props: &CommunityPageProps) -> Html {
    let questions = QUESTION_IDS.into_iter().map(|id| {
        let id_str = id.to_string();
        let mut args = BTreeMap::new();
        args.insert("id", id_str.as_str());
        let title = tr("question.title", Some(&args));
        let onclick = {
            let on_open_question = props.on_open_question.clone();
            Callback::from(move |_| on_open_question.emit(id))
        };
        html! {
            <li class="community__item" key={id} data-testid={format!("question-item-{id}")}>
                <h2>{ title }</h2>
                <button type="button" class="btn" {onclick} data-testid={format!("question-open-{id}")}>
                    { t("community.open_question") }
                </button>
            </li>
        }
    });

    html! {
        <section class="community" data-testid="community-screen">
            <h1>{ t("community.title") }</h1>
            <ul class="community__list">
                { for questions }
            </ul>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[function_component(CommunityHarness)]
    fn community_harness() -> Html {
        html! { <CommunityPage on_open_question={Callback::noop()} /> }
    }

    #[test]
    fn thread_list_covers_every_question() {
        let html = block_on(LocalServerRenderer::<CommunityHarness>::new().render());
        for id in QUESTION_IDS {
            assert!(html.contains(&format!("Question {id}")));
        }
        assert!(html.contains("View answers"));
    }
}
