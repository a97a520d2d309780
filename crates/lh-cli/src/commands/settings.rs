use std::path::Path;

use colored::Colorize;
use lh_core::{Catalog, JsonFileStore, LanguageSet, Settings, SettingsStore, UiLanguage};
use miette::{IntoDiagnostic, Result, miette};

pub fn show(path: Option<&Path>) -> Result<()> {
    let store = super::open_store(path)?;
    print_settings(&store, &store.load())
}

pub fn reset(path: Option<&Path>) -> Result<()> {
    let mut store = super::open_store(path)?;
    let settings = Settings::defaults(LanguageSet::from_env());
    store.save(&settings).into_diagnostic()?;
    println!("  {} settings reset to defaults", "✓".green());
    print_settings(&store, &settings)
}

pub fn set(path: Option<&Path>, assignments: &[String], ui: Option<UiLanguage>) -> Result<()> {
    if assignments.is_empty() && ui.is_none() {
        return Err(miette!(
            help = "e.g. `liahona settings set ot=false de=true --ui en`",
            "nothing to change"
        ));
    }

    let mut store = super::open_store(path)?;
    let mut settings = store.load();
    for assignment in assignments {
        let (flag, value) = parse_assignment(assignment)?;
        settings.content.set_flag(flag, value).into_diagnostic()?;
    }
    if let Some(ui) = ui {
        settings.ui_language = ui;
    }

    store.save(&settings).into_diagnostic()?;
    println!("  {} settings saved", "✓".green());
    print_settings(&store, &settings)
}

fn parse_assignment(assignment: &str) -> Result<(&str, bool)> {
    let (flag, value) = assignment
        .split_once('=')
        .ok_or_else(|| miette!("expected <flag>=<bool>, got \"{assignment}\""))?;
    let value = match value.trim().to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => true,
        "false" | "off" | "no" | "0" => false,
        other => return Err(miette!("\"{other}\" is not a boolean (in \"{assignment}\")")),
    };
    Ok((flag, value))
}

fn print_settings(store: &JsonFileStore, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings).into_diagnostic()?;
    println!("  {} {}", "file".dimmed(), store.path().display());
    println!("{json}");
    println!(
        "  {} books in catalog",
        Catalog::build(&settings.content).len()
    );
    Ok(())
}
