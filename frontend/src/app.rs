use common::routes::{Route, RouteError};
use yew::{html, Component, Context, Html};

use crate::pages;

/// Root component: resolves the current location once and renders its page.
///
/// Navigation uses plain links, so every route change reloads the app with
/// the new location.
pub struct App {
    route: Result<Route, RouteError>,
}

impl App {
    fn current_route() -> Result<Route, RouteError> {
        let Some(location) = web_sys::window().map(|window| window.location()) else {
            return Ok(Route::Home);
        };
        let path = location.pathname().unwrap_or_else(|_| "/".to_string());
        let query = location.search().unwrap_or_default();
        Route::parse(&path, &query)
    }
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let route = Self::current_route();
        if let Err(error) = &route {
            gloo_console::log!(format!("Unresolved route: {}", error));
        }
        Self { route }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="lexicon-reader">
                <nav>
                    <a href={Route::Home.href()}>{ "lexicon" }</a>
                </nav>
                <main>
                    { pages::render(&self.route) }
                </main>
            </div>
        }
    }
}
