use learnit_core::PointsBalance;
use std::collections::BTreeMap;
use yew::prelude::*;

use crate::i18n::{t, tr};

#[derive(Properties, Clone, PartialEq)]
pub struct HomePageProps {
    pub points: PointsBalance,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let points = props.points.to_string();
    let mut args = BTreeMap::new();
    args.insert("points", points.as_str());
    let summary = tr("home.points_summary", Some(&args));

    html! {
        <section class="home" data-testid="home-screen">
            <h1>{ t("home.title") }</h1>
            <p class="home__greeting">{ t("home.greeting") }</p>
            <p class="home__points" data-testid="home-points">{ summary }</p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[function_component(HomeHarness)]
    fn home_harness() -> Html {
        html! { <HomePage points={PointsBalance(100)} /> }
    }

    #[test]
    fn home_shows_greeting_and_points_summary() {
        let html = block_on(LocalServerRenderer::<HomeHarness>::new().render());
        assert!(html.contains("Welcome back!"));
        assert!(html.contains("You have 100 points to spend."));
    }
}
