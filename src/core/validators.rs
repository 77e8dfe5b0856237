//! Field predicates shared by the order and checkout pages.
//!
//! Every validator is total: malformed input is rejected, never an error.

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static EXPIRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/(\d{2})$").expect("expiry pattern is valid"));

pub fn email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Name and business-name fields: trimmed length of at least `min_len` characters.
pub fn text(value: &str, min_len: usize) -> bool {
    value.trim().chars().count() >= min_len
}

/// Optional field: empty is fine, otherwise at least ten digits.
pub fn phone(value: &str) -> bool {
    value.is_empty() || value.chars().filter(|c| c.is_ascii_digit()).count() >= 10
}

/// 13 to 19 digits once whitespace is removed. No Luhn check.
pub fn card_number(value: &str) -> bool {
    let cleaned: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    (13..=19).contains(&cleaned.len()) && cleaned.chars().all(|c| c.is_ascii_digit())
}

/// `MM/YY` whose first day (year `2000 + YY`, midnight) lies strictly after `now`.
pub fn expiry_at(value: &str, now: NaiveDateTime) -> bool {
    let Some(caps) = EXPIRY_RE.captures(value) else {
        return false;
    };
    let (Ok(month), Ok(year)) = (caps[1].parse::<u32>(), caps[2].parse::<i32>()) else {
        return false;
    };

    NaiveDate::from_ymd_opt(2000 + year, month, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .is_some_and(|starts| starts > now)
}

pub fn cvc(value: &str) -> bool {
    (3..=4).contains(&value.len()) && value.chars().all(|c| c.is_ascii_digit())
}
