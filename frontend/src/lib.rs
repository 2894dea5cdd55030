pub mod api;
pub mod config;
pub mod device;
pub mod pages;
pub mod storage;
pub mod styles;

use std::str::FromStr;

use hangman_shared::Difficulty;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{games::FrontendHangmanGame, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/play/:difficulty")]
    Play { difficulty: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <div class="mx-auto">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Play { difficulty } => match Difficulty::from_str(&difficulty) {
            Ok(difficulty) => html! { <FrontendHangmanGame {difficulty} /> },
            Err(e) => {
                log::warn!("{}", e);
                html! { <Redirect<Route> to={Route::Home} /> }
            }
        },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}
