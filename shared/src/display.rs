use crate::constants::SEPARATOR;

/// Builds a display string from `items`, mapping each through `transform` and
/// joining them with `separator_width` non-breaking spaces. The last item is
/// never followed by a separator.
pub fn construct_with_spaces<T, F>(items: &[T], separator_width: usize, mut transform: F) -> String
where
    F: FnMut(&T, usize) -> char,
{
    let spacer: String = std::iter::repeat(SEPARATOR).take(separator_width).collect();
    let mut display = String::with_capacity(items.len() * (separator_width + 1));

    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            display.push_str(&spacer);
        }
        display.push(transform(item, index));
    }

    display
}

pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn strikes_text(strikes: u32, max_strikes: u32) -> String {
    format!("Strikes: {} of {}", strikes, max_strikes)
}

pub fn high_score_text(high_score: u32) -> String {
    format!("High Score: {}", high_score)
}

pub fn game_over_text(seconds_left: u32) -> String {
    format!("Game over! Starting new game in {} seconds", seconds_left)
}
