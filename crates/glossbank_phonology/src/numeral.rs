//! Lumiere numeral rendering.

/// Digit names in order, 0 through 9.
const DIGIT_NAMES: [&str; 10] = [
    "za", "ho", "san", "ni", "chi", "la", "pi", "kan", "kain", "laio",
];

/// Renders an arabic number as a Lumiere numeral, digit by digit.
#[must_use]
pub fn lumiere_numeral(arabic: u64) -> String {
    arabic
        .to_string()
        .chars()
        .map(|digit| {
            let index = digit as usize - '0' as usize;
            DIGIT_NAMES[index]
        })
        .collect()
}
