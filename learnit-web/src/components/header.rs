use learnit_core::PointsBalance;
use yew::prelude::*;

use crate::assets;
use crate::i18n::t;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub points: PointsBalance,
}

/// Dashboard title bar: brand on the left, the points badge on the right.
#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    html! {
        <header role="banner" class="dashboard__header">
            <a href="#main" class="sr-only">{ t("app.skip_to_content") }</a>
            <div class="header-content">
                <span class="header-brand">{ t("app.title") }</span>
                <div class="header-points" data-testid="points-badge">
                    <img class="w-6 h-6" src={assets::coin_icon()} alt={t("store.balance_icon_alt")} />
                    <span>{ p.points.to_string() }</span>
                </div>
            </div>
        </header>
    }
}
