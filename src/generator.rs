use crate::variants::strip_whitespace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthWindow {
    pub min: usize,
    pub max: usize,
}

impl LengthWindow {
    pub const DEFAULT: Self = Self { min: 6, max: 16 };

    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, candidate: &str) -> bool {
        let len = candidate.chars().count();
        self.min <= len && len <= self.max
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl Default for LengthWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixPools {
    pub years: Vec<String>,
    pub numbers: Vec<String>,
    pub symbols: Vec<String>,
}

/// Expands one base into every in-window candidate: the base itself, then
/// base+year and base+year+symbol, then base+number and base+number+symbol.
pub fn generate_passwords(base: &str, suffixes: &SuffixPools, window: LengthWindow) -> Vec<String> {
    let mut candidates = Vec::new();
    if window.is_empty() {
        return candidates;
    }

    let base = strip_whitespace(base);
    if window.contains(&base) {
        candidates.push(base.clone());
    }

    for suffix in suffixes.years.iter().chain(&suffixes.numbers) {
        let combo = format!("{base}{suffix}");
        if window.contains(&combo) {
            candidates.push(combo.clone());
        }
        for symbol in &suffixes.symbols {
            let with_symbol = format!("{combo}{symbol}");
            if window.contains(&with_symbol) {
                candidates.push(with_symbol);
            }
        }
    }

    candidates
}
