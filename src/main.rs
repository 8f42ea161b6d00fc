mod ui;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{ArgAction, CommandFactory, Parser};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordbergler::{config, wordlist};

#[derive(Parser)]
#[command(
    name = "wordbergler",
    version,
    author,
    about = "Realistic password and username wordlist generator",
    after_long_help = ui::USAGE
)]
struct Cli {
    /// Directory both lists are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    #[arg(long, default_value = config::DEFAULT_PASSWORDS_FILE)]
    passwords_file: String,

    #[arg(long, default_value = config::DEFAULT_USERNAMES_FILE)]
    usernames_file: String,

    /// Oldest year suffix used when no plausible birth year is given
    #[arg(long, default_value_t = config::DEFAULT_YEAR_FLOOR)]
    year_floor: i32,

    /// Skip password candidates already written by an earlier base
    #[arg(short, long)]
    unique: bool,

    /// Only report the files written
    #[arg(short, long)]
    quiet: bool,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn wants_help<I: IntoIterator<Item = String>>(args: I) -> bool {
    args.into_iter()
        .any(|arg| matches!(arg.as_str(), "-h" | "--help" | "help"))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn create_file(path: &std::path::Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn main() -> Result<()> {
    if wants_help(std::env::args().skip(1)) {
        Cli::command().print_long_help()?;
        return Ok(());
    }

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    let current_year = chrono::Local::now().year();
    let generator_config = config::GeneratorConfig::new(cli.year_floor, cli.unique, current_year)?;
    let paths = config::OutputPaths::new(&cli.output_dir, &cli.passwords_file, &cli.usernames_file)?;

    let stdin = io::stdin();
    let mut prompter = ui::Prompter::new(stdin.lock(), io::stdout());
    let profile = ui::collect_profile(&mut prompter)?;

    let (wordlists, build_time) = ui::show_progress(&options, "Building pools...", || {
        Ok(wordlist::Wordlists::build(
            &profile,
            &generator_config,
            current_year,
        ))
    })?;

    let usernames_written =
        wordlist::write_usernames(create_file(&paths.usernames)?, &wordlists.usernames)
            .with_context(|| format!("Failed to write {}", paths.usernames.display()))?;
    tracing::info!(path = %paths.usernames.display(), count = usernames_written, "Usernames written");

    let start = std::time::Instant::now();
    let report = wordlist::write_passwords(
        create_file(&paths.passwords)?,
        &wordlists,
        generator_config.unique,
        |kind, len| ui::pool_progress(kind, len, &options),
    )
    .with_context(|| format!("Failed to write {}", paths.passwords.display()))?;
    tracing::info!(path = %paths.passwords.display(), count = report.total, "Passwords written");

    ui::display_summary(
        &wordlists,
        &report,
        &paths,
        build_time + start.elapsed(),
        &options,
    );

    Ok(())
}
