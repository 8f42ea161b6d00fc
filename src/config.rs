use crate::numbers::MIN_BIRTH_YEAR;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_PASSWORDS_FILE: &str = "custom_wordlist.txt";
pub const DEFAULT_USERNAMES_FILE: &str = "likely_usernames.txt";

/// Floor of the year range used when no plausible birth year is given.
pub const DEFAULT_YEAR_FLOOR: i32 = 1981;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub year_floor: i32,
    pub unique: bool,
}

impl GeneratorConfig {
    pub const DEFAULT: Self = Self {
        year_floor: DEFAULT_YEAR_FLOOR,
        unique: false,
    };

    pub fn new(year_floor: i32, unique: bool, current_year: i32) -> Result<Self> {
        if !(MIN_BIRTH_YEAR..=current_year).contains(&year_floor) {
            anyhow::bail!(
                "Year floor {} is outside {}..={}",
                year_floor,
                MIN_BIRTH_YEAR,
                current_year
            );
        }
        Ok(Self { year_floor, unique })
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub passwords: PathBuf,
    pub usernames: PathBuf,
}

impl OutputPaths {
    pub fn new(dir: &Path, passwords_file: &str, usernames_file: &str) -> Result<Self> {
        if passwords_file.trim().is_empty() {
            anyhow::bail!("Passwords file name cannot be empty");
        }
        if usernames_file.trim().is_empty() {
            anyhow::bail!("Usernames file name cannot be empty");
        }
        if passwords_file == usernames_file {
            anyhow::bail!(
                "Passwords and usernames cannot share the file name \"{}\"",
                passwords_file
            );
        }
        if !dir.as_os_str().is_empty() && !dir.is_dir() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
        }

        Ok(Self {
            passwords: dir.join(passwords_file),
            usernames: dir.join(usernames_file),
        })
    }
}
