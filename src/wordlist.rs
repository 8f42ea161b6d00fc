// This file is part of WordBergler.
//
// Copyright (c) 2025  WordBergler contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::config::GeneratorConfig;
use crate::generator::{generate_passwords, LengthWindow, SuffixPools};
use crate::numbers::{classify_pins, number_pool, phone_fragments, symbol_pool, year_sequence};
use crate::usernames::{generate_usernames, sanitize_identifier};
use crate::variants::{
    case_variants, initial_last_variants, name_for_password, name_for_username,
    pairwise_combination, strip_whitespace, title_variants, NamePair, VariantPool,
};
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::collections::{BTreeSet, HashSet};
use std::io::Write;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub victims: Vec<String>,
    pub relatives: Vec<String>,
    pub others: Vec<String>,
    pub brands: Vec<String>,
    pub tv_shows: Vec<String>,
    pub actors: Vec<String>,
    pub hobbies: Vec<String>,
    pub dates: Vec<String>,
    pub phones: Vec<String>,
    pub pins: Vec<String>,
    pub extra_bases: Vec<String>,
    pub birth_year: Option<i32>,
    pub window: LengthWindow,
}

impl Profile {
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.victims.iter().chain(&self.relatives).chain(&self.others)
    }

    pub fn titles(&self) -> impl Iterator<Item = &String> {
        self.brands
            .iter()
            .chain(&self.tv_shows)
            .chain(&self.actors)
            .chain(&self.hobbies)
    }

    pub fn favorites(&self) -> Vec<String> {
        self.brands.iter().chain(&self.hobbies).cloned().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolKind {
    LastNames,
    InitialLast,
    Titles,
    FullNames,
    ExtraBases,
    DoubleWords,
}

impl PoolKind {
    pub const ALL: [PoolKind; 6] = [
        PoolKind::LastNames,
        PoolKind::InitialLast,
        PoolKind::Titles,
        PoolKind::FullNames,
        PoolKind::ExtraBases,
        PoolKind::DoubleWords,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PoolKind::LastNames => "Last names",
            PoolKind::InitialLast => "Initial+Last",
            PoolKind::Titles => "Brand/Title",
            PoolKind::FullNames => "Full names",
            PoolKind::ExtraBases => "Extra bases",
            PoolKind::DoubleWords => "Double words",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordPools {
    pub last_names: VariantPool,
    pub initial_last: VariantPool,
    pub titles: VariantPool,
    pub full_names: VariantPool,
    pub extra_bases: VariantPool,
    pub double_words: VariantPool,
}

impl PasswordPools {
    pub fn build(profile: &Profile) -> Self {
        let clean_names: Vec<String> = profile
            .names()
            .map(|n| name_for_password(n))
            .filter(|n| !n.is_empty())
            .collect();
        let clean_titles: Vec<String> = profile
            .titles()
            .map(|t| strip_whitespace(t))
            .filter(|t| !t.is_empty())
            .collect();

        let split_names: Vec<NamePair> = profile
            .names()
            .map(|n| name_for_username(n).map(sanitize_identifier))
            .collect();

        let last_names = split_names
            .iter()
            .filter(|n| !n.last.is_empty())
            .flat_map(|n| case_variants(&n.last))
            .collect();
        let initial_last = split_names
            .iter()
            .flat_map(|n| initial_last_variants(&n.first, &n.last))
            .collect();

        Self {
            last_names,
            initial_last,
            titles: profile.titles().flat_map(|t| title_variants(t)).collect(),
            full_names: clean_names.iter().flat_map(|n| case_variants(n)).collect(),
            extra_bases: profile
                .extra_bases
                .iter()
                .map(|b| strip_whitespace(b))
                .collect(),
            double_words: pairwise_combination(&clean_names, &clean_titles)
                .into_iter()
                .collect(),
        }
    }

    pub fn get(&self, kind: PoolKind) -> &VariantPool {
        match kind {
            PoolKind::LastNames => &self.last_names,
            PoolKind::InitialLast => &self.initial_last,
            PoolKind::Titles => &self.titles,
            PoolKind::FullNames => &self.full_names,
            PoolKind::ExtraBases => &self.extra_bases,
            PoolKind::DoubleWords => &self.double_words,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PoolKind, &VariantPool)> {
        PoolKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    pub fn total_bases(&self) -> usize {
        self.iter().map(|(_, pool)| pool.len()).sum()
    }
}

#[derive(Debug, Clone)]
pub struct Wordlists {
    pub pools: PasswordPools,
    pub suffixes: SuffixPools,
    pub window: LengthWindow,
    pub usernames: BTreeSet<String>,
}

impl Wordlists {
    pub fn build(profile: &Profile, config: &GeneratorConfig, current_year: i32) -> Self {
        let pools = PasswordPools::build(profile);

        let years = year_sequence(profile.birth_year, current_year, config.year_floor);
        let pins = classify_pins(&profile.pins);
        let fragments = phone_fragments(&profile.phones);
        let numbers = number_pool(&profile.dates, &pins.numbers, &fragments, &years);
        let symbols = symbol_pool(&pins.symbols);

        let names: Vec<NamePair> = profile.names().map(|n| name_for_username(n)).collect();
        let usernames = generate_usernames(&names, profile.birth_year, &profile.favorites());

        tracing::info!(
            bases = pools.total_bases(),
            years = years.len(),
            numbers = numbers.len(),
            symbols = symbols.len(),
            usernames = usernames.len(),
            "Pools built"
        );

        Self {
            pools,
            suffixes: SuffixPools {
                years,
                numbers: numbers.into_vec(),
                symbols: symbols.into_vec(),
            },
            window: profile.window,
            usernames,
        }
    }
}

/// Line writer for the password stream. With `unique` set, a candidate
/// already written by an earlier base or pool is skipped.
pub struct PasswordWriter<W: Write> {
    out: W,
    seen: Option<HashSet<String>>,
    written: usize,
}

impl<W: Write> PasswordWriter<W> {
    pub fn new(out: W, unique: bool) -> Self {
        Self {
            out,
            seen: unique.then(HashSet::new),
            written: 0,
        }
    }

    pub fn write_base(
        &mut self,
        base: &str,
        suffixes: &SuffixPools,
        window: LengthWindow,
    ) -> Result<usize> {
        let mut count = 0;
        for candidate in generate_passwords(base, suffixes, window) {
            if let Some(seen) = self.seen.as_mut() {
                if !seen.insert(candidate.clone()) {
                    continue;
                }
            }
            writeln!(self.out, "{}", candidate).context("Failed to write password candidate")?;
            count += 1;
        }
        self.written += count;
        Ok(count)
    }

    pub fn finish(mut self) -> Result<usize> {
        self.out.flush().context("Failed to flush password list")?;
        Ok(self.written)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordReport {
    pub per_pool: Vec<(PoolKind, usize)>,
    pub total: usize,
}

/// Writes every pool in [`PoolKind::ALL`] order. `progress` supplies the bar
/// advanced once per base of each pool.
pub fn write_passwords<W, F>(
    out: W,
    wordlists: &Wordlists,
    unique: bool,
    mut progress: F,
) -> Result<PasswordReport>
where
    W: Write,
    F: FnMut(PoolKind, usize) -> ProgressBar,
{
    let mut writer = PasswordWriter::new(out, unique);
    let mut per_pool = Vec::with_capacity(PoolKind::ALL.len());

    if wordlists.window.is_empty() {
        tracing::warn!(
            min = wordlists.window.min,
            max = wordlists.window.max,
            "Minimum length exceeds maximum; no passwords will be written"
        );
    }

    for (kind, pool) in wordlists.pools.iter() {
        let pb = progress(kind, pool.len());
        let mut count = 0;
        for base in pool {
            count += writer.write_base(base, &wordlists.suffixes, wordlists.window)?;
            pb.inc(1);
        }
        pb.finish_and_clear();

        tracing::debug!(pool = kind.label(), bases = pool.len(), candidates = count, "Pool written");
        per_pool.push((kind, count));
    }

    let total = writer.finish()?;
    Ok(PasswordReport { per_pool, total })
}

pub fn write_usernames<W: Write>(mut out: W, usernames: &BTreeSet<String>) -> Result<usize> {
    for username in usernames {
        writeln!(out, "{}", username).context("Failed to write username")?;
    }
    out.flush().context("Failed to flush username list")?;
    Ok(usernames.len())
}
