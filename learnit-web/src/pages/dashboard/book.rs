use std::collections::BTreeMap;
use yew::prelude::*;

use crate::i18n::{t, tr};

#[derive(Properties, Clone, PartialEq)]
pub struct BookPageProps {
    pub id: u32,
    pub on_back: Callback<()>,
}

#[function_component(BookPage)]
pub fn book_page(props: &BookPageProps) -> Html {
    let id = props.id.to_string();
    let mut args = BTreeMap::new();
    args.insert("id", id.as_str());
    let title = tr("book.title", Some(&args));

    let back = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="book" data-testid="book-screen">
            <h1>{ title }</h1>
            <button type="button" class="btn" onclick={back} data-testid="book-back">
                { t("book.back") }
            </button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[function_component(BookHarness)]
    fn book_harness() -> Html {
        html! { <BookPage id={7} on_back={Callback::noop()} /> }
    }

    #[test]
    fn book_title_carries_the_route_id() {
        let html = block_on(LocalServerRenderer::<BookHarness>::new().render());
        assert!(html.contains("Book 7"));
        assert!(html.contains("Back to library"));
    }
}
