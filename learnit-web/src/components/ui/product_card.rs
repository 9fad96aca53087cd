use learnit_core::Product;
use std::collections::BTreeMap;
use yew::prelude::*;

use crate::assets;
use crate::i18n::tr;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub product: Product,
    /// Fired with the product when the card is activated.
    pub on_select: Callback<Product>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &Props) -> Html {
    let product = &props.product;
    let price = product.price.to_string();
    let mut args = BTreeMap::new();
    args.insert("price", price.as_str());
    let price_str = tr("store.card_price", Some(&args));

    let onclick = {
        let on_select = props.on_select.clone();
        let product = product.clone();
        Callback::from(move |_| on_select.emit(product.clone()))
    };

    html! {
        <article
            role="group"
            aria-labelledby={format!("product-name-{}", product.id)}
            class="product-card"
            data-key={product.id.to_string()}
            data-testid={format!("product-card-{}", product.id)}
        >
            <button type="button" class="product-card__open" id={format!("product-open-{}", product.id)} {onclick}>
                <img
                    class="product-card__image"
                    src={assets::product_image(product)}
                    alt={product.name.clone()}
                />
                <div class="product-card__body">
                    <h2 id={format!("product-name-{}", product.id)}>{ &product.name }</h2>
                    <p class="muted">{ &product.description }</p>
                    <span class="product-card__price">{ price_str }</span>
                </div>
            </button>
        </article>
    }
}
