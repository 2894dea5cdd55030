use std::collections::HashSet;

use hangman_shared::FlashTarget;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ScoreboardProps {
    pub score_text: String,
    pub strikes_text: String,
    pub high_score_text: String,
    pub flashing: HashSet<FlashTarget>,
}

#[function_component(Scoreboard)]
pub fn scoreboard(props: &ScoreboardProps) -> Html {
    let item = |text: &str, target: FlashTarget| {
        let flash = props.flashing.contains(&target).then_some(styles::FLASH);
        html! { <span class={classes!("inline-block", flash)}>{ text.to_string() }</span> }
    };

    html! {
        <div class={styles::SCOREBOARD}>
            { item(&props.score_text, FlashTarget::Score) }
            { item(&props.strikes_text, FlashTarget::Strikes) }
            { item(&props.high_score_text, FlashTarget::HighScore) }
        </div>
    }
}
