use yew_router::prelude::*;

/// Top-level routes.
#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Onboarding,
    #[at("/login")]
    Login,
    #[at("/otp")]
    Otp,
    #[at("/dashboard")]
    DashboardRoot,
    #[at("/dashboard/*")]
    Dashboard,
    #[at("/404")]
    #[not_found]
    NotFound,
}

/// Routes nested under the dashboard shell.
#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum DashboardRoute {
    #[at("/dashboard")]
    Home,
    #[at("/dashboard/library")]
    Library,
    #[at("/dashboard/book/:id")]
    Book { id: u32 },
    #[at("/dashboard/community")]
    Community,
    #[at("/dashboard/questions/:id")]
    Question { id: u32 },
    #[at("/dashboard/store")]
    Store,
    #[at("/dashboard/settings")]
    Settings,
    #[at("/dashboard/404")]
    #[not_found]
    NotFound,
}
