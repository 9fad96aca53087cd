pub mod book;
pub mod community;
pub mod home;
pub mod library;
pub mod question;
pub mod store;

use learnit_core::{Catalog, PointsBalance};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header::Header;
use crate::components::sidebar::SidebarNav;
use crate::pages;
use crate::router::{DashboardRoute, Route};

#[derive(Properties, Clone, PartialEq)]
pub struct DashboardShellProps {
    pub catalog: Catalog,
    pub points: PointsBalance,
}

/// Persistent frame around the dashboard children: title bar, nav rail,
/// and the nested switch resolving the inner route.
#[function_component(DashboardShell)]
pub fn dashboard_shell(props: &DashboardShellProps) -> Html {
    let render = {
        let catalog = props.catalog.clone();
        let points = props.points;
        move |route: DashboardRoute| render_dashboard_route(route, &catalog, points)
    };

    html! {
        <div class="dashboard" data-testid="dashboard-shell">
            <Header points={props.points} />
            <div class="dashboard__layout">
                <SidebarNav />
                <main id="main" class="dashboard__content">
                    <Switch<DashboardRoute> render={render} />
                </main>
            </div>
        </div>
    }
}

/// Render the matched dashboard child route.
#[must_use]
pub fn render_dashboard_route(
    route: DashboardRoute,
    catalog: &Catalog,
    points: PointsBalance,
) -> Html {
    match route {
        DashboardRoute::Home => html! { <home::HomePage {points} /> },
        DashboardRoute::Library => html! { <LibraryScreen /> },
        DashboardRoute::Book { id } => html! { <BookScreen {id} /> },
        DashboardRoute::Community => html! { <CommunityScreen /> },
        DashboardRoute::Question { id } => html! { <QuestionScreen {id} /> },
        DashboardRoute::Store => html! {
            <store::StorePage catalog={catalog.clone()} {points} />
        },
        DashboardRoute::Settings => html! { <pages::settings::SettingsPage /> },
        DashboardRoute::NotFound => html! { <LostScreen /> },
    }
}

fn push_dashboard(navigator: Option<Navigator>, route: DashboardRoute) -> Callback<()> {
    Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&route);
        }
    })
}

#[function_component(LibraryScreen)]
fn library_screen() -> Html {
    let navigator = use_navigator();
    let on_open_book = Callback::from(move |id: u32| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&DashboardRoute::Book { id });
        }
    });
    html! { <library::LibraryPage {on_open_book} /> }
}

#[derive(Properties, Clone, PartialEq)]
struct DetailProps {
    id: u32,
}

#[function_component(BookScreen)]
fn book_screen(props: &DetailProps) -> Html {
    let navigator = use_navigator();
    let on_back = push_dashboard(navigator, DashboardRoute::Library);
    html! { <book::BookPage id={props.id} {on_back} /> }
}

#[function_component(CommunityScreen)]
fn community_screen() -> Html {
    let navigator = use_navigator();
    let on_open_question = Callback::from(move |id: u32| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&DashboardRoute::Question { id });
        }
    });
    html! { <community::CommunityPage {on_open_question} /> }
}

#[function_component(QuestionScreen)]
fn question_screen(props: &DetailProps) -> Html {
    let navigator = use_navigator();
    let on_back = push_dashboard(navigator, DashboardRoute::Community);
    html! { <question::QuestionPage id={props.id} {on_back} /> }
}

#[function_component(LostScreen)]
fn lost_screen() -> Html {
    let navigator = use_navigator();
    let on_go_home = Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Onboarding);
        }
    });
    html! { <pages::not_found::NotFoundPage {on_go_home} /> }
}
