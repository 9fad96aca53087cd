use std::collections::BTreeMap;
use yew::prelude::*;

use crate::i18n::{t, tr};

/// Placeholder shelf until real book data arrives from a backing service.
const BOOK_IDS: [u32; 6] = [1, 2, 3, 4, 5, 6];

#[derive(Properties, Clone, PartialEq)]
pub struct LibraryPageProps {
    /// Fired with the book id when a shelf entry is opened.
    pub on_open_book: Callback<u32>,
}

#[function_component(LibraryPage)]
pub fn library_page(props: &LibraryPageProps) -> Html {
    let books = BOOK_IDS.into_iter().map(|id| {
        let id_str = id.to_string();
        let mut args = BTreeMap::new();
        args.insert("id", id_str.as_str());
        let title = tr("book.title", Some(&args));
        let onclick = {
            let on_open_book = props.on_open_book.clone();
            Callback::from(move |_| on_open_book.emit(id))
        };
        html! {
            <li class="library__item" key={id} data-testid={format!("book-item-{id}")}>
                <h2>{ title }</h2>
                <button type="button" class="btn" {onclick} data-testid={format!("book-open-{id}")}>
                    { t("library.open_book") }
                </button>
            </li>
        }
    });

    html! {
        <section class="library" data-testid="library-screen">
            <h1>{ t("library.title") }</h1>
            <ul class="library__list">
                { for books }
            </ul>
        </section>
    }
}
