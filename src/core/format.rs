//! Keystroke formatters for the checkout inputs.

const CARD_MAX_CHARS: usize = 19;
const EXPIRY_MAX_CHARS: usize = 5;

fn digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Groups digits in runs of four, `"4111111111111111"` -> `"4111 1111 1111 1111"`.
pub fn format_card_number(value: &str) -> String {
    let digits = digits(value);
    let groups: Vec<&str> = digits
        .as_bytes()
        .chunks(4)
        .filter_map(|chunk| std::str::from_utf8(chunk).ok())
        .collect();
    groups.join(" ").chars().take(CARD_MAX_CHARS).collect()
}

/// `"1225"` -> `"12/25"`. The slash appears as soon as two digits are present.
pub fn format_expiry(value: &str) -> String {
    let digits = digits(value);
    let formatted = if digits.len() >= 2 {
        let year: String = digits[2..].chars().take(2).collect();
        format!("{}/{}", &digits[..2], year)
    } else {
        digits
    };
    formatted.chars().take(EXPIRY_MAX_CHARS).collect()
}
