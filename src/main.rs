// SPDX-License-Identifier: PMPL-1.0-or-later

//! manual-finder: bilingual manufacturer manual catalog browser
//!
//! Loads the manual catalog once and lets the user narrow it down by keyword,
//! category and quick-select brand, in Japanese or English, from a terminal
//! browser, a native window, or a one-shot headless search.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use manual_finder::app::{App, LoadStatus};
use manual_finder::config::Config;
use manual_finder::i18n::{self, Lang};
use manual_finder::loader;
use manual_finder::render::gui::CatalogGui;
use manual_finder::render::text::ViewFormatter;
use manual_finder::render::tui::CatalogTui;
use manual_finder::render::ViewOutputFormat;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "manual-finder")]
#[command(version)]
#[command(about = "Bilingual manufacturer manual catalog browser")]
#[command(long_about = None)]
struct Cli {
    /// Config file (defaults to ./manual-finder.yaml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Catalog location: a JSON file path or an http(s) URL
    #[arg(long, global = true, value_name = "PATH|URL")]
    data: Option<String>,

    /// Display language (defaults to the system language preference)
    #[arg(long, global = true, value_enum)]
    lang: Option<LangArg>,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog interactively in the terminal
    Browse,

    /// Browse the catalog in a native window
    Gui,

    /// Filter once and print or export the rendered results
    Search {
        /// Free-text keyword
        #[arg(short, long)]
        keyword: Option<String>,

        /// Exact category
        #[arg(short, long)]
        category: Option<String>,

        /// Quick-select brand (takes precedence over --keyword)
        #[arg(short, long)]
        brand: Option<String>,

        /// Output format (defaults to the --output extension, else text)
        #[arg(short, long, value_enum)]
        format: Option<ViewOutputFormat>,

        /// Write results to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LangArg {
    Ja,
    En,
}

impl From<LangArg> for Lang {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::Ja => Lang::Ja,
            LangArg::En => Lang::En,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "manual_finder=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::discover(cli.config.as_deref())?;
    if let Some(data) = cli.data {
        config.data = Some(data);
    }
    let preference = i18n::system_language_preference();
    let lang = cli
        .lang
        .map(Lang::from)
        .unwrap_or_else(|| config.initial_lang(preference.as_deref()));

    let mut app = App::from_config(&config, lang);
    let mut pending = loader::spawn_load(loader::source_for(config.data_location()));

    match cli.command {
        Commands::Browse => {
            CatalogTui::run(&mut app, &mut pending)?;
        }

        Commands::Gui => {
            CatalogGui::run(app, pending)?;
        }

        Commands::Search {
            keyword,
            category,
            brand,
            format,
            output,
        } => {
            let format = ViewOutputFormat::resolve(format, output.as_deref());
            app.complete_load(pending.wait());

            if app.status() == LoadStatus::Loaded {
                app.set_query(
                    keyword.as_deref().unwrap_or(""),
                    category.as_deref().unwrap_or(""),
                );
                if let Some(brand) = brand.as_deref() {
                    app.select_brand(brand);
                }
            }

            if let Some(mut output_path) = output {
                if output_path.extension().is_none() {
                    output_path.set_extension(format.extension());
                }
                let content = format.serialize(app.view(), app.locale())?;
                std::fs::write(&output_path, content)
                    .with_context(|| format!("writing {}", output_path.display()))?;
                println!("Results saved to: {}", output_path.display());
            } else if format == ViewOutputFormat::Text {
                ViewFormatter::new().print(app.view(), app.locale());
            } else {
                print!("{}", format.serialize(app.view(), app.locale())?);
            }

            if app.status() == LoadStatus::Failed {
                return Err(anyhow!(
                    "catalog could not be loaded from {}",
                    config.data_location()
                ));
            }
        }
    }

    Ok(())
}
