use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::state::AppState;
use crate::pages;
use crate::pages::onboarding::OnboardingAction;
use crate::router::Route;

/// Render the matched top-level route.
#[must_use]
pub fn render_route(route: Route, state: &AppState) -> Html {
    match route {
        Route::Onboarding => html! { <OnboardingScreen /> },
        Route::Login => html! { <LoginScreen /> },
        Route::Otp => html! { <OtpScreen /> },
        Route::DashboardRoot | Route::Dashboard => html! {
            <pages::dashboard::DashboardShell
                catalog={(*state.catalog).clone()}
                points={*state.points}
            />
        },
        Route::NotFound => html! { <NotFoundScreen /> },
    }
}

fn push_route(navigator: Option<Navigator>, route: Route) -> Callback<()> {
    Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&route);
        }
    })
}

fn onboarding_destination(action: OnboardingAction) -> Route {
    match action {
        OnboardingAction::GetStarted => Route::Otp,
        OnboardingAction::LogIn => Route::Login,
    }
}

#[function_component(OnboardingScreen)]
pub fn onboarding_screen() -> Html {
    let navigator = use_navigator();
    let on_action = Callback::from(move |action: OnboardingAction| {
        let route = onboarding_destination(action);
        if let Some(nav) = navigator.as_ref() {
            nav.push(&route);
        }
    });
    html! { <pages::onboarding::OnboardingPage {on_action} /> }
}

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let navigator = use_navigator();
    let on_continue = push_route(navigator, Route::DashboardRoot);
    html! { <pages::login::LoginPage {on_continue} /> }
}

#[function_component(OtpScreen)]
pub fn otp_screen() -> Html {
    let navigator = use_navigator();
    // Successful verification lands on the login page.
    let on_verified = push_route(navigator, Route::Login);
    html! { <pages::otp::OtpPage {on_verified} /> }
}

#[function_component(NotFoundScreen)]
pub fn not_found_screen() -> Html {
    let navigator = use_navigator();
    let on_go_home = push_route(navigator, Route::Onboarding);
    html! { <pages::not_found::NotFoundPage {on_go_home} /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::rc::Rc;
    use yew::LocalServerRenderer;

    #[test]
    fn onboarding_actions_map_to_their_routes() {
        assert_eq!(
            onboarding_destination(OnboardingAction::GetStarted),
            Route::Otp
        );
        assert_eq!(onboarding_destination(OnboardingAction::LogIn), Route::Login);
    }

    #[function_component(PushHarness)]
    fn push_harness() -> Html {
        let invoked = use_mut_ref(|| false);
        let called = Rc::new(Cell::new(false));
        let called_ref = called.clone();
        let on_push = push_route(None, Route::Login);
        let wrapper = Callback::from(move |()| {
            called_ref.set(true);
            on_push.emit(());
        });
        if !*invoked.borrow() {
            *invoked.borrow_mut() = true;
            wrapper.emit(());
        }
        html! { <div data-called={called.get().to_string()} /> }
    }

    #[test]
    fn route_pushes_degrade_to_no_ops_without_a_navigator() {
        let html = block_on(LocalServerRenderer::<PushHarness>::new().render());
        assert!(html.contains("data-called=\"true\""));
    }
}
