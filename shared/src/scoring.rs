/// Completion bonus for solving an answer of `len` characters.
/// Shorter answers score more points.
pub fn bonus_for_length(len: usize) -> u32 {
    match len {
        0..=5 => 25,
        6..=10 => 20,
        11..=15 => 15,
        16..=20 => 10,
        _ => 5,
    }
}
