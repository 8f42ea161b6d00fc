use anyhow::{Context, Result};
use console::{Style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};
use unicode_normalization::UnicodeNormalization;
use wordbergler::config::OutputPaths;
use wordbergler::generator::LengthWindow;
use wordbergler::wordlist::{PasswordReport, PoolKind, Profile, Wordlists};

pub const USAGE: &str = "\
DESCRIPTION
    Generates human-like password and username wordlists from personal
    facts: names, favorite brands and shows, important dates, phone
    numbers and PINs. Intended for authorized penetration testing, red
    teaming and security audits.

PASSWORD CANDIDATES
    Last names, first initial + last name, brand/show/actor/hobby titles,
    full names, extra base words and name+title two-word combinations,
    each in lower, Capitalized and UPPER case, followed by years, dates,
    PINs, phone fragments and symbols. Only candidates inside the length
    window are kept.

USERNAME CANDIDATES
    first+last, first.last, first_last, initial+last, last+first, birth
    year suffixes, gamertag suffixes, leetspeak and brand/hobby fusions,
    each with a Capitalized companion.

INPUT
    Answer the prompts; most fields take comma-separated values and any
    field may be left blank:
        Victim name(s): John Smith, Jane Doe
        Relative name(s): Mike Smith
        Other notable name(s): Jenny Johnson
        Favorite brand(s): Nike, Apple
        Favorite TV show(s)/Genres: Breaking Bad, Friends
        Favorite actor(s): Tom Hanks
        Favorite hobby/activities: Hiking, Gaming
        Important date(s) (YYYY / DDMM): 1990, 0423, 2001
        Phone number(s): 123-456-7890, (555) 321-6543
        PIN / short number(s) or symbols: 1234, 9876, @!, !1
        Extra base words (e.g., Pass, Secret): Pass, Secret, letmein
    followed by the birth year (optional) and the minimum and maximum
    password length (default 6-16).

OUTPUT
    custom_wordlist.txt     password candidates, grouped by source pool
    likely_usernames.txt    username candidates, sorted

HELP
    -h, --help or help prints this document.

Only use this tool against systems you own or are authorized to test.";

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

fn tree_branches(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("├─", "└─")
    } else {
        ("|-", "`-")
    }
}

/// Trims, NFC-normalizes and drops control characters.
pub fn normalize_input(s: &str, input_name: &str) -> String {
    let normalized: String = s.trim().nfc().collect();

    let control_count = normalized.chars().filter(|c| c.is_control()).count();
    if control_count == 0 {
        return normalized;
    }

    tracing::warn!(
        field = input_name,
        count = control_count,
        "Removed control characters from input"
    );
    normalized.chars().filter(|c| !c.is_control()).collect()
}

pub fn parse_csv(raw: &str, input_name: &str) -> Vec<String> {
    raw.split(',')
        .map(|token| normalize_input(token, input_name))
        .filter(|token| !token.is_empty())
        .collect()
}

pub fn parse_birth_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<i32>() {
        Ok(0) => None,
        Ok(year) => Some(year),
        Err(_) => {
            tracing::warn!(input = raw, "Unparsable birth year, treating as unknown");
            None
        }
    }
}

pub fn parse_length(raw: &str, default: usize, input_name: &str) -> usize {
    let raw = raw.trim();
    if raw.is_empty() {
        return default;
    }
    raw.parse::<usize>().unwrap_or_else(|_| {
        tracing::warn!(field = input_name, input = raw, default, "Unparsable length, using default");
        default
    })
}

/// Line-oriented prompts over any reader/writer pair. End of input reads as
/// a blank answer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input
            .read_line(&mut answer)
            .with_context(|| format!("Failed to read answer to \"{}\"", prompt.trim()))?;
        Ok(answer)
    }

    pub fn ask_csv(&mut self, prompt: &str) -> Result<Vec<String>> {
        let answer = self.ask(prompt)?;
        Ok(parse_csv(&answer, prompt.trim_end_matches([':', ' '])))
    }
}

pub fn collect_profile<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<Profile> {
    let victims = prompter.ask_csv("Victim name(s): ")?;
    let relatives = prompter.ask_csv("Relative name(s): ")?;
    let others = prompter.ask_csv("Other notable name(s): ")?;

    let brands = prompter.ask_csv("Favorite brand(s): ")?;
    let tv_shows = prompter.ask_csv("Favorite TV show(s)/Genres: ")?;
    let actors = prompter.ask_csv("Favorite actor(s): ")?;
    let hobbies = prompter.ask_csv("Favorite hobby/activities: ")?;

    let dates = prompter.ask_csv("Important date(s) (YYYY / DDMM): ")?;
    let phones = prompter.ask_csv("Phone number(s): ")?;
    let pins = prompter.ask_csv("PIN / short number(s) or symbols: ")?;
    let extra_bases = prompter.ask_csv("Extra base words (e.g., Pass, Secret): ")?;

    let birth_year = parse_birth_year(&prompter.ask("Victim's birth year (blank if unknown): ")?);

    let defaults = LengthWindow::DEFAULT;
    let min = parse_length(
        &prompter.ask(&format!("Minimum password length (default {}): ", defaults.min))?,
        defaults.min,
        "Minimum password length",
    );
    let max = parse_length(
        &prompter.ask(&format!("Maximum password length (default {}): ", defaults.max))?,
        defaults.max,
        "Maximum password length",
    );

    Ok(Profile {
        victims,
        relatives,
        others,
        brands,
        tv_shows,
        actors,
        hobbies,
        dates,
        phones,
        pins,
        extra_bases,
        birth_year,
        window: LengthWindow::new(min, max),
    })
}

pub fn show_progress<F, T>(options: &DisplayOptions, message: &str, f: F) -> Result<(T, Duration)>
where
    F: FnOnce() -> Result<T>,
{
    let term = Term::stdout();
    let pb = if options.quiet {
        ProgressBar::hidden()
    } else {
        term.hide_cursor().ok();
        ProgressBar::new_spinner()
    };

    let style = ProgressStyle::default_spinner()
        .template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(if options.unicode_support {
        style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
    } else {
        style.tick_chars("-\\|/-")
    });

    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));

    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();

    pb.finish_and_clear();
    if !options.quiet {
        term.show_cursor().ok();
    }

    result.map(|r| (r, elapsed))
}

pub fn pool_progress(kind: PoolKind, len: usize, options: &DisplayOptions) -> ProgressBar {
    if options.quiet {
        return ProgressBar::hidden();
    }

    let template = if options.color_support {
        "{prefix:<13} {bar:32.cyan/blue} {pos}/{len} words"
    } else {
        "{prefix:<13} [{bar:32}] {pos}/{len} words"
    };
    let chars = if options.unicode_support { "█▓░" } else { "=> " };

    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars(chars),
    );
    pb.set_prefix(kind.label());
    pb
}

pub fn display_summary(
    wordlists: &Wordlists,
    report: &PasswordReport,
    paths: &OutputPaths,
    elapsed: Duration,
    options: &DisplayOptions,
) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);

    println!("[{}] {} created.", check_ok, paths.usernames.display());
    println!("[{}] {} created.", check_ok, paths.passwords.display());

    if options.quiet {
        return;
    }
    println!();

    display_settings(wordlists, options);
    display_stats(wordlists, report, elapsed, options, check_ok, check_warn);
}

fn display_settings(wordlists: &Wordlists, options: &DisplayOptions) {
    let (mid, end) = tree_branches(options.unicode_support);
    let window = wordlists.window;
    let years = &wordlists.suffixes.years;

    let window_style = if options.color_support && window.is_empty() {
        Style::new().yellow()
    } else {
        Style::new()
    };

    println!("Settings:");
    println!(
        "  {} Length     {}",
        mid,
        window_style.apply_to(format!("{}-{} chars", window.min, window.max))
    );
    match (years.first(), years.last()) {
        (Some(newest), Some(oldest)) => {
            println!("  {} Years      {}-{} ({})", mid, newest, oldest, years.len())
        }
        _ => println!("  {} Years      none", mid),
    }
    println!(
        "  {} Numbers    {}",
        mid,
        plural(wordlists.suffixes.numbers.len(), "suffix", "suffixes")
    );
    println!(
        "  {} Symbols    {}",
        end,
        wordlists.suffixes.symbols.join(" ")
    );
    println!();
}

fn display_stats(
    wordlists: &Wordlists,
    report: &PasswordReport,
    elapsed: Duration,
    options: &DisplayOptions,
    check_ok: &str,
    check_warn: &str,
) {
    let (mid, end) = tree_branches(options.unicode_support);

    let style_for = |count: usize| {
        if !options.color_support {
            Style::new()
        } else if count > 0 {
            Style::new().green()
        } else {
            Style::new().yellow()
        }
    };

    println!("Stats:");
    for (kind, count) in &report.per_pool {
        let bases = wordlists.pools.get(*kind).len();
        println!(
            "  {} {:<13} {} from {}",
            mid,
            kind.label(),
            style_for(*count).apply_to(plural(*count, "candidate", "candidates")),
            plural(bases, "base", "bases")
        );
    }

    let password_status = if report.total > 0 { check_ok } else { check_warn };
    println!(
        "  {} Passwords     {} {}",
        mid,
        style_for(report.total).apply_to(format!("[{}]", password_status)),
        style_for(report.total).apply_to(report.total)
    );

    let usernames = wordlists.usernames.len();
    let username_status = if usernames > 0 { check_ok } else { check_warn };
    println!(
        "  {} Usernames     {} {}",
        mid,
        style_for(usernames).apply_to(format!("[{}]", username_status)),
        style_for(usernames).apply_to(usernames)
    );

    println!("  {} Time          {:.2}s", end, elapsed.as_secs_f64());
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_get_status_symbols_unicode() {
        let (ok, warn) = get_status_symbols(true);
        assert_eq!(ok, "✓");
        assert_eq!(warn, "!");
    }

    #[test]
    fn test_get_status_symbols_ascii() {
        let (ok, warn) = get_status_symbols(false);
        assert_eq!(ok, "+");
        assert_eq!(warn, "!");
    }

    #[test]
    fn test_normalize_nfc() {
        let nfc = "café";
        let nfd = "cafe\u{0301}";
        assert_ne!(nfc.as_bytes(), nfd.as_bytes());
        assert_eq!(normalize_input(nfc, "test"), normalize_input(nfd, "test"));
    }

    #[test]
    fn test_normalize_strips_control_characters() {
        assert_eq!(normalize_input("  jo\u{7}hn\u{1b} ", "test"), "john");
        assert_eq!(normalize_input("  pass word  ", "test"), "pass word");
    }

    #[test]
    fn test_parse_csv() {
        assert_eq!(
            parse_csv(" John Smith , ,Jane Doe,\n", "names"),
            vec!["John Smith".to_string(), "Jane Doe".to_string()]
        );
        assert!(parse_csv("", "names").is_empty());
        assert!(parse_csv("  ,  , ", "names").is_empty());
    }

    #[test]
    fn test_parse_birth_year() {
        assert_eq!(parse_birth_year("1990\n"), Some(1990));
        assert_eq!(parse_birth_year(""), None);
        assert_eq!(parse_birth_year("0"), None);
        assert_eq!(parse_birth_year("nineteen"), None);
    }

    #[test]
    fn test_parse_length_defaults() {
        assert_eq!(parse_length("8", 6, "min"), 8);
        assert_eq!(parse_length("", 6, "min"), 6);
        assert_eq!(parse_length("six", 6, "min"), 6);
        assert_eq!(parse_length("-4", 16, "max"), 16);
    }

    #[test]
    fn test_prompter_eof_is_blank() {
        let mut p = prompter("");
        assert_eq!(p.ask("Name: ").unwrap(), "");
        assert!(p.ask_csv("Names: ").unwrap().is_empty());
    }

    #[test]
    fn test_prompter_writes_prompt() {
        let mut p = prompter("Nike, Apple\n");
        let answer = p.ask_csv("Favorite brand(s): ").unwrap();
        assert_eq!(answer, vec!["Nike".to_string(), "Apple".to_string()]);
        assert_eq!(String::from_utf8(p.output).unwrap(), "Favorite brand(s): ");
    }

    #[test]
    fn test_collect_profile() {
        let answers = "John Smith, Jane Doe\n\
                       Mike Smith\n\
                       \n\
                       Nike\n\
                       Breaking Bad\n\
                       Tom Hanks\n\
                       Hiking\n\
                       0423\n\
                       123-456-7890\n\
                       1234, @!\n\
                       Secret\n\
                       1990\n\
                       8\n\
                       abc\n";
        let profile = collect_profile(&mut prompter(answers)).unwrap();

        assert_eq!(profile.victims, vec!["John Smith".to_string(), "Jane Doe".to_string()]);
        assert_eq!(profile.relatives, vec!["Mike Smith".to_string()]);
        assert!(profile.others.is_empty());
        assert_eq!(profile.tv_shows, vec!["Breaking Bad".to_string()]);
        assert_eq!(profile.pins, vec!["1234".to_string(), "@!".to_string()]);
        assert_eq!(profile.birth_year, Some(1990));
        assert_eq!(profile.window, LengthWindow::new(8, 16));
    }

    #[test]
    fn test_collect_profile_all_blank() {
        let profile = collect_profile(&mut prompter("")).unwrap();
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "base", "bases"), "1 base");
        assert_eq!(plural(0, "base", "bases"), "0 bases");
    }
}
