//! CLI frontend for the Dreamfortune reading engine.

mod commands;

use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dreamfortune",
    about = "Dreamfortune: daily dream interpretation, zodiac fortunes and tarot",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Directory for persisted state (diary, selected sign)
    #[arg(long, global = true, default_value = ".dreamfortune")]
    pub data_dir: PathBuf,

    /// Directory with dreams.json / zodiac.json / tarot.json overrides
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,

    /// Pretend the current hour is this (0-23)
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(0..=23))]
    pub hour: Option<u32>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpret a dream from free text
    Dream {
        /// What you dreamt about
        #[arg(required = true)]
        text: Vec<String>,

        /// Psychological deep reading (not saved to the diary)
        #[arg(long)]
        deep: bool,

        /// Print share text instead of the reading
        #[arg(long)]
        share: bool,
    },

    /// Show today's zodiac fortune
    Fortune {
        /// Sign name or id (default: last selected sign)
        sign: Option<String>,

        /// Pick the sign from a birthday (MM-DD)
        #[arg(short, long, conflicts_with = "sign")]
        birthday: Option<String>,

        /// Print share text instead of the fortune
        #[arg(long)]
        share: bool,
    },

    /// Draw a tarot card
    Tarot {
        /// RNG seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List the zodiac signs
    Signs,

    /// Show or manage the dream diary
    Diary {
        #[command(subcommand)]
        action: Option<DiaryAction>,
    },
}

#[derive(Subcommand)]
enum DiaryAction {
    /// List entries, newest first
    List,

    /// Delete an entry by id
    Remove {
        /// Entry id as shown by `diary list`
        id: i64,
    },

    /// Export the diary
    Export {
        /// Output format: markdown, text
        #[arg(short, long, default_value = "markdown")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let global = &cli.global;
    let result = match cli.command {
        Commands::Dream { text, deep, share } => {
            commands::dream::run(global, &text.join(" "), deep, share)
        }
        Commands::Fortune {
            sign,
            birthday,
            share,
        } => commands::fortune::run(global, sign.as_deref(), birthday.as_deref(), share),
        Commands::Tarot { seed } => commands::tarot::run(global, seed),
        Commands::Signs => commands::signs::run(global),
        Commands::Diary { action } => match action.unwrap_or(DiaryAction::List) {
            DiaryAction::List => commands::diary::list(global),
            DiaryAction::Remove { id } => commands::diary::remove(global, id),
            DiaryAction::Export { format, output } => {
                commands::diary::export(global, &format, output.as_deref())
            }
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
