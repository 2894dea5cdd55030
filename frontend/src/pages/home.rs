use hangman_shared::Difficulty;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::device::is_mobile_device;
use crate::{api, styles, Route};

#[derive(Properties, PartialEq)]
struct DifficultyCardProps {
    difficulty: Difficulty,
}

#[function_component(DifficultyCard)]
fn difficulty_card(props: &DifficultyCardProps) -> Html {
    let difficulty = props.difficulty;

    html! {
        <div class={classes!(styles::CARD, "flex", "flex-col", "items-center", "gap-4")}>
            <Link<Route>
                to={Route::Play { difficulty: difficulty.as_str().to_string() }}
                classes={styles::DIFFICULTY_BUTTON}
            >
                { difficulty.label() }
            </Link<Route>>
            <p class={styles::TEXT_SMALL}>{ difficulty.description() }</p>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Warm the backend up while the player picks a difficulty
    use_effect_with((), |_| {
        api::wake_up();
        || ()
    });

    let is_mobile = use_memo((), |_| is_mobile_device());

    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::HERO_CONTENT}>
                <h1 class={styles::HERO_TITLE}>{"Hangman Trivia"}</h1>
                <p class={styles::TEXT_BODY}>
                    {"Answer the trivia clue one letter at a time before you run out of strikes."}
                </p>
                <div class={styles::DIFFICULTY_GRID}>
                    { for Difficulty::ALL.iter().map(|&difficulty| html! {
                        <DifficultyCard {difficulty} />
                    }) }
                </div>
                if !*is_mobile {
                    <p class={classes!(styles::TEXT_HINT, "mt-8")}>
                        {"Tip: type letters on your keyboard to guess. Press Escape to come back here."}
                    </p>
                }
            </div>
        </div>
    }
}
