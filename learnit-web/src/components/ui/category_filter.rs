use learnit_core::CategoryFilter;
use yew::prelude::*;

use crate::i18n::t;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub selected: CategoryFilter,
    pub on_select: Callback<CategoryFilter>,
}

/// Chip row for narrowing the product grid to one category.
#[function_component(CategoryFilterRow)]
pub fn category_filter_row(props: &Props) -> Html {
    let chips = CategoryFilter::all_filters().into_iter().map(|filter| {
        let pressed = filter == props.selected;
        let onclick = {
            let on_select = props.on_select.clone();
            Callback::from(move |_| on_select.emit(filter))
        };
        html! {
            <button
                type="button"
                class={classes!("category-chip", pressed.then_some("category-chip--active"))}
                aria-pressed={pressed.to_string()}
                data-testid={format!("category-chip-{}", filter.label())}
                {onclick}
            >
                { filter.label() }
            </button>
        }
    });

    html! {
        <div class="category-filter" role="group" aria-label={t("store.filter_label")}>
            { for chips }
        </div>
    }
}
