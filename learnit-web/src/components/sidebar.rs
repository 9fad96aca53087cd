use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::t;
use crate::router::DashboardRoute;

const fn nav_items() -> [(DashboardRoute, &'static str); 5] {
    [
        (DashboardRoute::Home, "home"),
        (DashboardRoute::Library, "library"),
        (DashboardRoute::Community, "community"),
        (DashboardRoute::Store, "store"),
        (DashboardRoute::Settings, "settings"),
    ]
}

/// Nav rail entry a route belongs to. Detail views highlight the section
/// they were opened from; the fallback route highlights nothing.
fn nav_section(route: &DashboardRoute) -> Option<DashboardRoute> {
    match route {
        DashboardRoute::Book { .. } => Some(DashboardRoute::Library),
        DashboardRoute::Question { .. } => Some(DashboardRoute::Community),
        DashboardRoute::NotFound => None,
        other => Some(other.clone()),
    }
}

#[function_component(SidebarNav)]
pub fn sidebar_nav() -> Html {
    let navigator = use_navigator();
    let current = use_route::<DashboardRoute>();
    let active = current.as_ref().and_then(nav_section);

    let items = nav_items().into_iter().map(|(route, key)| {
        let is_active = active.as_ref() == Some(&route);
        let onclick = {
            let navigator = navigator.clone();
            let route = route.clone();
            Callback::from(move |_| {
                if let Some(nav) = navigator.as_ref() {
                    nav.push(&route);
                }
            })
        };
        html! {
            <button
                type="button"
                class={classes!("sidebar__item", is_active.then_some("sidebar__item--active"))}
                aria-current={is_active.then_some("page")}
                data-testid={format!("nav-{key}")}
                {onclick}
            >
                { t(&format!("nav.{key}")) }
            </button>
        }
    });

    html! {
        <nav class="sidebar" aria-label={t("nav.label")}>
            { for items }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::{nav_items, nav_section};
    use crate::router::DashboardRoute;

    #[test]
    fn detail_routes_highlight_their_section() {
        assert_eq!(
            nav_section(&DashboardRoute::Book { id: 3 }),
            Some(DashboardRoute::Library)
        );
        assert_eq!(
            nav_section(&DashboardRoute::Question { id: 8 }),
            Some(DashboardRoute::Community)
        );
    }

    #[test]
    fn plain_routes_highlight_themselves() {
        assert_eq!(
            nav_section(&DashboardRoute::Store),
            Some(DashboardRoute::Store)
        );
        assert_eq!(nav_section(&DashboardRoute::NotFound), None);
    }

    #[test]
    fn rail_covers_every_section_once() {
        let items = nav_items();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].1, "home");
        assert_eq!(items[4].1, "settings");
    }
}
