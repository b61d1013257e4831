// SPDX-License-Identifier: PMPL-1.0-or-later

//! folio: terminal front end for the portfolio site's language toggle
//!
//! Prints the site's sections in the active language, resolves individual
//! translation paths, and reads or changes the persisted language preference.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use folio::config::{Overrides, Settings};
use folio::diagnostics;
use folio::i18n::{self, Language};
use folio::render::{self, OutputFormat, Section};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Bilingual portfolio site: translations and language preference")]
#[command(long_about = None)]
struct Cli {
    /// Preference file (overrides FOLIO_STORE)
    #[arg(long, global = true, value_name = "FILE")]
    store: Option<PathBuf>,

    /// Language used when none is persisted (overrides FOLIO_DEFAULT_LANG)
    #[arg(long, global = true, value_name = "TAG")]
    default_lang: Option<String>,

    /// Keep the preference in memory for this run only
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print page sections in the active language
    Show {
        /// Sections to print (default: all, in page order)
        #[arg(value_enum)]
        sections: Vec<Section>,
    },

    /// Resolve a dotted translation path, e.g. `header.home`
    Translate {
        #[arg(value_name = "PATH")]
        path: String,

        /// Output format (overrides FOLIO_FORMAT)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Read or change the persisted language
    Lang {
        #[command(subcommand)]
        action: LangAction,
    },

    /// Dump the active language's translation table
    Export {
        /// Output format (overrides FOLIO_FORMAT)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Check translation parity and the preference store
    Check,
}

#[derive(Subcommand)]
enum LangAction {
    /// Print the active language tag
    Get,
    /// Persist a language tag (`en-us` or `pt-br`)
    Set {
        #[arg(value_name = "TAG")]
        tag: String,
    },
    /// Switch to the other language
    Toggle,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let settings = Settings::resolve(&Overrides {
        store: cli.store,
        default_language: cli.default_lang,
        ephemeral: cli.ephemeral,
    });

    match cli.command {
        Commands::Show { sections } => {
            let store = settings.open_store()?;
            let sections = if sections.is_empty() {
                Section::all().to_vec()
            } else {
                sections
            };
            render::print_page(&store, &sections);
        }

        Commands::Translate { path, format } => {
            let store = settings.open_store()?;
            let translation = store.translate(&path);
            let format = format.unwrap_or(settings.format);
            println!(
                "{}",
                render::format_lookup(format, &path, store.language(), &translation)?
            );
            if !translation.is_resolved() {
                bail!("no translation for {} in {}", path, store.language());
            }
        }

        Commands::Lang { action } => {
            let mut store = settings.open_store()?;
            match action {
                LangAction::Get => println!("{}", store.language()),
                LangAction::Set { tag } => {
                    if Language::from_code(&tag).is_none() {
                        bail!(
                            "unknown language {:?} (expected one of: {})",
                            tag,
                            Language::all()
                                .iter()
                                .map(Language::code)
                                .collect::<Vec<_>>()
                                .join(", ")
                        );
                    }
                    store.set_language(tag);
                    println!("{}", store.language());
                }
                LangAction::Toggle => println!("{}", store.toggle()),
            }
        }

        Commands::Export { format } => {
            let store = settings.open_store()?;
            let Some(language) = store.language().language() else {
                bail!("stored language {} has no translations", store.language());
            };
            let format = format.unwrap_or(settings.format);
            println!("{}", render::format_tree(format, &i18n::root(language))?);
        }

        Commands::Check => diagnostics::run_self_diagnostics(&settings)?,
    }

    Ok(())
}
