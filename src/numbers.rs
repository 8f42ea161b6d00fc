use crate::variants::{strip_whitespace, VariantPool};
use regex::Regex;
use std::sync::OnceLock;

pub const BASE_SYMBOLS: [&str; 6] = ["!", "@", "@!", "1", "!!", "!!!"];

/// Earliest birth year accepted before falling back to the default range.
pub const MIN_BIRTH_YEAR: i32 = 1900;

static PIN_PATTERN: OnceLock<Regex> = OnceLock::new();

fn pin_pattern() -> &'static Regex {
    PIN_PATTERN.get_or_init(|| Regex::new(r"^[0-9]{1,6}$").expect("PIN pattern must compile"))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinTokens {
    pub numbers: Vec<String>,
    pub symbols: Vec<String>,
}

pub fn is_pin(token: &str) -> bool {
    pin_pattern().is_match(token)
}

pub fn classify_pins(tokens: &[String]) -> PinTokens {
    let (numbers, symbols): (Vec<String>, Vec<String>) = tokens
        .iter()
        .filter(|t| !t.is_empty())
        .cloned()
        .partition(|t| is_pin(t));
    PinTokens { numbers, symbols }
}

/// Last 4, last 7, area code, area code plus prefix and full number of each
/// phone, depending on how many digits it has.
pub fn phone_fragments(phones: &[String]) -> Vec<String> {
    let mut fragments = VariantPool::new();

    for phone in phones {
        let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
        let len = digits.len();

        if len >= 4 {
            fragments.insert(&digits[len - 4..]);
        }
        if len >= 7 {
            fragments.insert(&digits[len - 7..]);
        }
        if len >= 10 {
            fragments.insert(&digits[..3]);
            fragments.insert(&digits[..6]);
            fragments.insert(digits.as_str());
        }
    }

    fragments.into_vec()
}

/// Years from `current_year` down to the birth year when it is plausible,
/// otherwise down to `floor`.
pub fn year_sequence(birth_year: Option<i32>, current_year: i32, floor: i32) -> Vec<String> {
    let lowest = match birth_year {
        Some(year) if (MIN_BIRTH_YEAR..=current_year).contains(&year) => year,
        _ => floor,
    };

    (lowest..=current_year).rev().map(|y| y.to_string()).collect()
}

pub fn symbol_pool(extra_symbols: &[String]) -> VariantPool {
    BASE_SYMBOLS
        .iter()
        .map(|s| s.to_string())
        .chain(extra_symbols.iter().cloned())
        .collect()
}

pub fn number_pool(
    dates: &[String],
    pins: &[String],
    fragments: &[String],
    years: &[String],
) -> VariantPool {
    dates
        .iter()
        .map(|d| strip_whitespace(d))
        .chain(pins.iter().cloned())
        .chain(fragments.iter().cloned())
        .chain(years.iter().cloned())
        .collect()
}
