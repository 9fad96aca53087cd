use learnit_core::{Catalog, CategoryFilter, PointsBalance, Product};
use std::collections::BTreeMap;
use yew::prelude::*;

use crate::a11y;
use crate::assets;
use crate::components::modal::Modal;
use crate::components::ui::category_filter::CategoryFilterRow;
use crate::components::ui::product_card::ProductCard;
use crate::i18n::{t, tr};

#[derive(Properties, Clone, PartialEq)]
pub struct StorePageProps {
    pub catalog: Catalog,
    pub points: PointsBalance,
}

fn clear_selection(selected: &UseStateHandle<Option<Product>>) -> Callback<()> {
    let selected = selected.clone();
    Callback::from(move |()| selected.set(None))
}

fn announce_shown_count(count: usize) {
    let count_str = count.to_string();
    let mut args = BTreeMap::new();
    args.insert("count", count_str.as_str());
    a11y::set_status(&tr("store.shown", Some(&args)));
}

/// Product browsing screen: category chips narrow the grid, and picking
/// a card opens the detail overlay with the purchase controls.
#[function_component(StorePage)]
pub fn store_page(props: &StorePageProps) -> Html {
    let filter = use_state(CategoryFilter::default);
    let selected: UseStateHandle<Option<Product>> = use_state(|| None);

    let on_filter = {
        let filter = filter.clone();
        let catalog = props.catalog.clone();
        Callback::from(move |next: CategoryFilter| {
            announce_shown_count(catalog.filtered(next).len());
            filter.set(next);
        })
    };

    let on_open = {
        let selected = selected.clone();
        Callback::from(move |product: Product| selected.set(Some(product)))
    };

    let on_close = clear_selection(&selected);

    let products = props.catalog.filtered(*filter);

    html! {
        <section class="store" data-testid="store-screen">
            <header class="store__header">
                <h1>{ t("store.title") }</h1>
                <div class="store__balance" data-testid="store-balance">
                    <img class="w-6 h-6" src={assets::coin_icon()} alt={t("store.balance_icon_alt")} />
                    <span>{ props.points.to_string() }</span>
                </div>
            </header>
            <CategoryFilterRow selected={*filter} on_select={on_filter} />
            <div class="store__grid" data-testid="store-grid">
                { for products.iter().map(|product| html! {
                    <ProductCard
                        key={product.id}
                        product={(*product).clone()}
                        on_select={on_open.clone()}
                    />
                }) }
            </div>
            { selected.as_ref().map(|product| {
                render_detail_overlay(product, props.points, &on_close)
            }).unwrap_or_default() }
        </section>
    }
}

/// Detail overlay for one product. The buy control only renders when the
/// balance covers the price; the balance itself is always shown, tinted
/// red when the product is out of reach.
fn render_detail_overlay(product: &Product, points: PointsBalance, on_close: &Callback<()>) -> Html {
    let affordable = points.can_afford(product.price);
    let balance_tint = if affordable {
        "text-black"
    } else {
        "text-red-600"
    };
    let price = product.price.to_string();
    let mut args = BTreeMap::new();
    args.insert("price", price.as_str());
    let price_str = tr("store.detail_price", Some(&args));

    let on_dismiss = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_buy = {
        let id = product.id;
        let price = product.price;
        Callback::from(move |_: MouseEvent| {
            log::debug!("purchase requested: product {id} for {price} points");
        })
    };

    html! {
        <Modal
            open=true
            title={product.name.clone()}
            on_close={on_close.clone()}
            return_focus_id={format!("product-open-{}", product.id)}
        >
            <div class="product-detail" data-testid="product-detail">
                <img
                    class="product-detail__image"
                    src={assets::product_image(product)}
                    alt={product.name.clone()}
                />
                <p>{ &product.description }</p>
                <p class="product-detail__price">{ price_str }</p>
                <div class="product-detail__balance">
                    <img class="w-10 h-10" src={assets::coin_icon()} alt={t("store.balance_icon_alt")} />
                    <span class={balance_tint} data-testid="detail-balance">{ points.to_string() }</span>
                </div>
                <div class="product-detail__actions">
                    <button type="button" class="btn" onclick={on_dismiss}>{ t("store.close") }</button>
                    { affordable.then(|| html! {
                        <button type="button" class="btn btn-primary" data-testid="buy-now" onclick={on_buy}>
                            { t("store.buy") }
                        </button>
                    }).unwrap_or_default() }
                </div>
            </div>
        </Modal>
    }
}
