use yew::prelude::*;

use crate::styles;

const ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

#[derive(Properties, PartialEq)]
pub struct KeyboardProps {
    pub used_letters: Vec<char>,
    #[prop_or_default]
    pub disabled: bool,
    pub on_key_press: Callback<char>,
}

#[function_component(Keyboard)]
pub fn keyboard(props: &KeyboardProps) -> Html {
    html! {
        <div class="keyboard mt-6 w-full">
            { for ROWS.iter().map(|row| html! {
                <div class="flex justify-center mb-2 w-full">
                    { for row.chars().map(|letter| {
                        let used = props.used_letters.contains(&letter);
                        let on_key_press = props.on_key_press.clone();

                        html! {
                            <button
                                type="button"
                                class={classes!(
                                    styles::KEY,
                                    if used { styles::KEY_USED } else { styles::KEY_UNUSED }
                                )}
                                disabled={props.disabled || used}
                                onclick={Callback::from(move |_| on_key_press.emit(letter))}
                            >
                                { letter }
                            </button>
                        }
                    }) }
                </div>
            }) }
        </div>
    }
}
