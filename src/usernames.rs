use crate::variants::{NamePair, VariantPool};
use std::collections::BTreeSet;

pub const GAMERTAG_SUFFIXES: [&str; 4] = ["123", "007", "420", "69"];

pub fn sanitize_identifier(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '.' || *c == '_')
        .collect()
}

pub fn leetspeak(word: &str) -> String {
    word.chars()
        .map(|c| match c.to_ascii_lowercase() {
            'a' => '4',
            'e' => '3',
            'i' => '1',
            'o' => '0',
            's' => '5',
            _ => c,
        })
        .collect()
}

/// Upper-cases the leading letter of a sanitized identifier. `None` when it
/// does not start with a letter.
pub fn capitalize_identifier(identifier: &str) -> Option<String> {
    let first = identifier.chars().next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    let mut capitalized = String::with_capacity(identifier.len());
    capitalized.push(first.to_ascii_uppercase());
    capitalized.push_str(&identifier[first.len_utf8()..]);
    Some(capitalized)
}

fn short_year(year: i32) -> String {
    let digits = year.to_string();
    let skip = digits.chars().count().saturating_sub(2);
    digits.chars().skip(skip).collect()
}

/// Raw identifier combinations for one lower-cased name, before sanitizing.
pub fn username_combinations(
    name: &NamePair,
    birth_year: Option<i32>,
    favorites: &[String],
) -> Vec<String> {
    let mut combos = VariantPool::new();
    if name.is_empty() {
        return combos.into_vec();
    }

    let NamePair { first, last } = name;
    combos.extend([first.clone(), last.clone()]);

    if let Some(initial) = name.initial().filter(|_| name.has_both()) {
        combos.extend([
            format!("{first}{last}"),
            format!("{first}.{last}"),
            format!("{first}_{last}"),
            format!("{initial}{last}"),
            format!("{initial}.{last}"),
            format!("{initial}_{last}"),
            format!("{last}{first}"),
            format!("{last}.{first}"),
            format!("{last}_{first}"),
            format!("{last}{initial}"),
        ]);

        if let Some(year) = birth_year {
            let yy = short_year(year);
            combos.extend([
                format!("{first}{last}{year}"),
                format!("{initial}{last}{year}"),
                format!("{last}{yy}"),
                format!("{initial}{last}{yy}"),
                format!("{first}{yy}"),
                format!("{first}{year}"),
                format!("{last}{year}"),
            ]);
        }

        combos.extend(
            GAMERTAG_SUFFIXES
                .iter()
                .map(|suffix| format!("{first}{last}{suffix}")),
        );

        combos.insert(leetspeak(&format!("{first}{last}")));
    }

    for favorite in favorites {
        let favorite = favorite.to_lowercase().replace(' ', "");
        if favorite.is_empty() {
            continue;
        }
        if !first.is_empty() {
            combos.extend([format!("{first}{favorite}"), format!("{favorite}{first}")]);
        }
        if !last.is_empty() {
            combos.extend([format!("{last}{favorite}"), format!("{favorite}{last}")]);
        }
    }

    combos.into_vec()
}

pub fn generate_usernames(
    names: &[NamePair],
    birth_year: Option<i32>,
    favorites: &[String],
) -> BTreeSet<String> {
    let mut usernames = BTreeSet::new();

    for name in names.iter().filter(|n| !n.is_empty()) {
        for combo in username_combinations(name, birth_year, favorites) {
            let identifier = sanitize_identifier(combo.trim());
            if identifier.is_empty() {
                continue;
            }
            if let Some(capitalized) = capitalize_identifier(&identifier) {
                usernames.insert(capitalized);
            }
            usernames.insert(identifier);
        }
    }

    tracing::debug!(names = names.len(), usernames = usernames.len(), "Username set built");
    usernames
}
