//! CLI frontend for Liahona: draw a verse, inspect the catalog, build links.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use lh_core::{Language, UiLanguage};

#[derive(Parser)]
#[command(
    name = "liahona",
    about = "Liahona: hold the orb, receive a verse",
    version,
    propagate_version = true
)]
struct Cli {
    /// Settings file (default: platform config directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one press/hold/release and print the drawn verse
    Draw {
        /// How long the orb is held, in milliseconds
        #[arg(long, default_value = "800")]
        hold_ms: f64,

        /// Pointer travel while holding, in pixels (rounded to f32 like a real pointer)
        #[arg(long, default_value = "0")]
        distance: f64,

        /// Timestamp of the release in milliseconds (default: now)
        #[arg(long)]
        now: Option<f64>,
    },

    /// List the books in the active catalog
    Books,

    /// Print the native and web links for a reference
    Link {
        /// Book code (e.g. alma, 1-ne, john)
        code: String,

        /// Chapter number
        chapter: u16,

        /// Verse number
        verse: u16,

        /// Content language of the book
        #[arg(short, long, value_enum, default_value = "de")]
        lang: LangArg,
    },

    /// Show or change stored settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the effective settings
    Show,

    /// Restore the defaults
    Reset,

    /// Change content flags (`bom=true`, `de=false`, ...) and the UI language
    Set {
        /// Flag assignments of the form `<flag>=<bool>`
        assignments: Vec<String>,

        /// Interface language
        #[arg(long, value_enum)]
        ui: Option<LangArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LangArg {
    De,
    En,
}

impl From<LangArg> for Language {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::De => Language::German,
            LangArg::En => Language::English,
        }
    }
}

impl From<LangArg> for UiLanguage {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::De => UiLanguage::De,
            LangArg::En => UiLanguage::En,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings = cli.settings.as_deref();
    let result = match cli.command {
        Commands::Draw {
            hold_ms,
            distance,
            now,
        } => commands::draw::run(settings, hold_ms, distance, now),
        Commands::Books => commands::books::run(settings),
        Commands::Link {
            code,
            chapter,
            verse,
            lang,
        } => commands::link::run(&code, chapter, verse, lang.into()),
        Commands::Settings { action } => match action {
            SettingsAction::Show => commands::settings::show(settings),
            SettingsAction::Reset => commands::settings::reset(settings),
            SettingsAction::Set { assignments, ui } => {
                commands::settings::set(settings, &assignments, ui.map(Into::into))
            }
        },
    };

    if let Err(report) = result {
        eprintln!("{report:?}");
        process::exit(1);
    }
}
