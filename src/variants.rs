use std::collections::HashSet;

/// Ordered collection of unique strings. The first insertion of a value wins.
#[derive(Debug, Clone, Default)]
pub struct VariantPool {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl VariantPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if value.is_empty() || self.seen.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.entries.push(value);
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.seen.contains(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }
}

impl PartialEq for VariantPool {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for VariantPool {}

impl<S: Into<String>> Extend<S> for VariantPool {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for VariantPool {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut pool = Self::new();
        pool.extend(iter);
        pool
    }
}

impl<'a> IntoIterator for &'a VariantPool {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// First name and last name of a personal token. `last` is empty for
/// single-word tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NamePair {
    pub first: String,
    pub last: String,
}

impl NamePair {
    pub fn from_token(token: &str) -> Self {
        let parts: Vec<&str> = token.split_whitespace().collect();
        match parts.as_slice() {
            [] => Self::default(),
            [only] => Self {
                first: only.to_string(),
                last: String::new(),
            },
            [first, .., last] => Self {
                first: first.to_string(),
                last: last.to_string(),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.last.is_empty()
    }

    pub fn has_both(&self) -> bool {
        !self.first.is_empty() && !self.last.is_empty()
    }

    pub fn initial(&self) -> Option<char> {
        self.first.chars().next()
    }

    pub fn map(&self, f: impl Fn(&str) -> String) -> Self {
        Self {
            first: f(&self.first),
            last: f(&self.last),
        }
    }
}

pub fn strip_whitespace(word: &str) -> String {
    word.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn name_for_password(token: &str) -> String {
    strip_whitespace(token)
}

pub fn name_for_username(token: &str) -> NamePair {
    NamePair::from_token(&token.to_lowercase())
}

pub fn case_variants(word: &str) -> Vec<String> {
    let word = strip_whitespace(word);
    if word.is_empty() {
        return Vec::new();
    }
    vec![word.to_lowercase(), capitalize(&word), word.to_uppercase()]
}

pub fn initial_last_variants(first: &str, last: &str) -> Vec<String> {
    let Some(initial) = first.chars().next() else {
        return Vec::new();
    };
    if last.is_empty() {
        return Vec::new();
    }

    let root = format!("{initial}{last}");
    vec![capitalize(&root), root.to_lowercase(), root.to_uppercase()]
}

/// Brand, show, actor or hobby variants. Multi-word titles are treated as a
/// name pair made of their first and last word.
pub fn title_variants(title: &str) -> Vec<String> {
    let name = NamePair::from_token(title);
    if !name.has_both() {
        return case_variants(title);
    }

    let pool: VariantPool = case_variants(&name.last)
        .into_iter()
        .chain(initial_last_variants(&name.first, &name.last))
        .chain(case_variants(&format!("{}{}", name.first, name.last)))
        .collect();
    pool.into_vec()
}

/// Every `a + b` concatenation across both lists, skipping identical pairs,
/// expanded with [`case_variants`].
pub fn pairwise_combination(list_a: &[String], list_b: &[String]) -> Vec<String> {
    let pool: VariantPool = list_a
        .iter()
        .flat_map(|a| {
            list_b
                .iter()
                .filter(move |b| *b != a)
                .flat_map(move |b| case_variants(&format!("{a}{b}")))
        })
        .collect();
    pool.into_vec()
}
