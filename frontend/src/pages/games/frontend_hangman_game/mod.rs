mod keyboard;
mod scoreboard;

use std::collections::{HashMap, HashSet};

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use hangman_shared::constants::FLASH_REMOVAL_MILLIS;
use hangman_shared::{ClueOutcome, Difficulty, Effect, FlashTarget, RenderFrame, Session, TimerToken, Update};
use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, ApiError};
use crate::device::{is_landscape, is_mobile_device};
use crate::{storage, styles, Route};

use keyboard::Keyboard;
use scoreboard::Scoreboard;

#[derive(Properties, PartialEq)]
pub struct FrontendHangmanGameProps {
    pub difficulty: Difficulty,
}

pub enum Msg {
    ClueLoaded(Result<ClueOutcome, ApiError>),
    Guess(char),
    KeyDown(KeyboardEvent),
    TimerFired(TimerToken),
    ClearFlash(FlashTarget),
    Resize,
}

pub struct FrontendHangmanGame {
    session: Session,
    frame: RenderFrame,
    _timer: Option<Timeout>,
    flash_timers: HashMap<FlashTarget, Timeout>,
    is_mobile: bool,
    landscape: bool,
    _keydown_listener: Option<EventListener>,
    _resize_listener: Option<EventListener>,
}

impl FrontendHangmanGame {
    fn apply(&mut self, ctx: &Context<Self>, update: Update) {
        self.frame = update.frame;
        let difficulty = self.session.difficulty();

        for effect in update.effects {
            match effect {
                Effect::SaveSeenAnswers(seen) => storage::save_seen_answers(difficulty, &seen),
                Effect::SaveHighScore(high_score) => storage::save_high_score(difficulty, high_score),
                Effect::RequestClue(request) => {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = api::fetch_clue(&request).await;
                        link.send_message(Msg::ClueLoaded(result));
                    });
                }
                Effect::Schedule(request) => {
                    let link = ctx.link().clone();
                    self._timer = Some(Timeout::new(request.delay_millis, move || {
                        link.send_message(Msg::TimerFired(request.token));
                    }));
                }
                Effect::CancelTimer => {
                    // Dropping a Timeout cancels it
                    self._timer = None;
                }
                Effect::Flash(target) => {
                    let link = ctx.link().clone();
                    let timeout = Timeout::new(FLASH_REMOVAL_MILLIS, move || {
                        link.send_message(Msg::ClearFlash(target));
                    });
                    self.flash_timers.insert(target, timeout);
                }
            }
        }
    }

    fn flashing(&self) -> HashSet<FlashTarget> {
        self.flash_timers.keys().copied().collect()
    }

    fn handle_key(&mut self, ctx: &Context<Self>, event: KeyboardEvent) -> bool {
        if event.ctrl_key() || event.meta_key() || event.alt_key() {
            return false;
        }

        let key = event.key();
        if key == "Escape" {
            if let Some(navigator) = ctx.link().navigator() {
                navigator.push(&Route::Home);
            }
            return false;
        }

        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {
                event.prevent_default();
                self.guess(ctx, c.to_ascii_uppercase())
            }
            _ => false,
        }
    }

    fn guess(&mut self, ctx: &Context<Self>, letter: char) -> bool {
        let update = self.session.apply_guess(letter);
        if matches!(update.outcome, Some(outcome) if outcome.is_ignored()) {
            return false;
        }
        self.apply(ctx, update);
        true
    }
}

impl Component for FrontendHangmanGame {
    type Message = Msg;
    type Properties = FrontendHangmanGameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let difficulty = ctx.props().difficulty;
        let session = Session::new(difficulty, storage::load_progress(difficulty));
        info!("Starting {} session", difficulty);

        let mut game = Self {
            frame: session.render(),
            session,
            _timer: None,
            flash_timers: HashMap::new(),
            is_mobile: is_mobile_device(),
            landscape: is_landscape(),
            _keydown_listener: None,
            _resize_listener: None,
        };

        if let Some(window) = window() {
            let link = ctx.link().clone();
            game._keydown_listener = Some(EventListener::new(&window, "keydown", move |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    link.send_message(Msg::KeyDown(event.clone()));
                }
            }));

            let link = ctx.link().clone();
            game._resize_listener = Some(EventListener::new(&window, "resize", move |_| {
                link.send_message(Msg::Resize);
            }));
        }

        let update = game.session.request_clue();
        game.apply(ctx, update);
        game
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ClueLoaded(Ok(outcome)) => {
                match self.session.receive_clue(outcome) {
                    Ok(update) => self.apply(ctx, update),
                    Err(e) => {
                        info!("{}", e);
                        self.frame = self.session.render();
                    }
                }
                true
            }
            Msg::ClueLoaded(Err(e)) => {
                warn!("Failed to fetch clue: {:?}", e);
                let update = self.session.clue_failed(e.message());
                self.apply(ctx, update);
                true
            }
            Msg::Guess(letter) => self.guess(ctx, letter),
            Msg::KeyDown(event) => self.handle_key(ctx, event),
            Msg::TimerFired(token) => {
                self._timer = None;
                let update = self.session.fire(token);
                self.apply(ctx, update);
                true
            }
            Msg::ClearFlash(target) => self.flash_timers.remove(&target).is_some(),
            Msg::Resize => {
                let landscape = is_landscape();
                let changed = landscape != self.landscape;
                self.landscape = landscape;
                changed
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().difficulty == old_props.difficulty {
            return false;
        }

        // Switching difficulty starts a fresh session
        *self = <Self as Component>::create(ctx);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.is_mobile && self.landscape {
            return html! {
                <div class={classes!(styles::CONTAINER, "flex", "items-center", "justify-center")}>
                    <div class={styles::ALERT_WARNING}>
                        {"Please rotate your device to portrait mode to play."}
                    </div>
                </div>
            };
        }

        let frame = &self.frame;
        let on_key_press = ctx.link().callback(Msg::Guess);

        html! {
            <div class={styles::CONTAINER}>
                <div class="max-w-3xl mx-auto py-10 flex flex-col items-center">
                    <h1 class={classes!(styles::TEXT_H1, "mb-8")}>
                        { format!("Hangman Trivia: {}", self.session.difficulty().label()) }
                    </h1>
                    <div class={classes!(styles::CARD, "w-full")}>
                        <p class={styles::CLUE}>{ frame.clue.clone() }</p>
                        <p class={styles::ANSWER}>{ frame.answer_display.clone() }</p>
                        <p class={styles::STATUS}>{ frame.status.clone() }</p>
                        if frame.show_scoreboard {
                            <Scoreboard
                                score_text={frame.score_text.clone()}
                                strikes_text={frame.strikes_text.clone()}
                                high_score_text={frame.high_score_text.clone()}
                                flashing={self.flashing()}
                            />
                        }
                    </div>
                    if self.is_mobile {
                        <Keyboard
                            used_letters={frame.used_letters.clone()}
                            disabled={frame.input_locked}
                            {on_key_press}
                        />
                    } else {
                        <p class={classes!(styles::TEXT_HINT, "mt-6")}>
                            {"Type a letter to guess. Press Escape to choose another difficulty."}
                        </p>
                    }
                </div>
            </div>
        }
    }
}
