// SPDX-License-Identifier: PMPL-1.0-or-later

//! privacy-export: write per-locale privacy-policy JSON for the web front end
//!
//! Running with no arguments exports every configured locale from `content/`
//! into `public/locales/<locale>/privacy.json`.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use privacy_export::config::{ExportConfig, Overrides};
use privacy_export::types::LocaleCode;
use privacy_export::{content, diagnostics, locale, Exporter};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "privacy-export")]
#[command(version)]
#[command(about = "Export localized privacy-policy content as per-locale JSON")]
#[command(long_about = None)]
struct Cli {
    /// Config file (default: ./privacy-export.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write <base-dir>/<locale>/privacy.json for every selected locale
    Export {
        #[command(flatten)]
        selection: Selection,

        /// Write locales concurrently
        #[arg(long)]
        parallel: bool,

        /// Refuse to write anything if the parity check has any finding
        #[arg(long)]
        strict: bool,
    },

    /// Check translation parity and whether exported files are up to date
    Check {
        #[command(flatten)]
        selection: Selection,

        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },

    /// List locales with content files and site coverage
    Locales {
        /// Directory holding <locale>.json / .yaml content files
        #[arg(long, value_name = "DIR")]
        content_dir: Option<PathBuf>,
    },
}

#[derive(Args, Default)]
struct Selection {
    /// Output root directory
    #[arg(long, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// Directory holding <locale>.json / .yaml content files
    #[arg(long, value_name = "DIR")]
    content_dir: Option<PathBuf>,

    /// Restrict to these locales (comma separated)
    #[arg(short, long = "locale", value_delimiter = ',')]
    locales: Option<Vec<LocaleCode>>,
}

impl Selection {
    fn into_overrides(self, parallel: bool) -> Overrides {
        Overrides {
            base_dir: self.base_dir,
            content_dir: self.content_dir,
            locales: self.locales,
            parallel,
        }
    }
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn site_column(code: &str) -> &'static str {
    if code == locale::SITE_DEFAULT_LOCALE {
        "default"
    } else if locale::is_site_locale(code) {
        "yes"
    } else {
        "no"
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<ExportConfig> {
    match path {
        Some(path) => ExportConfig::load(path),
        None => ExportConfig::discover(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    let base = load_config(cli.config.as_ref())?;

    let command = cli.command.unwrap_or(Commands::Export {
        selection: Selection::default(),
        parallel: false,
        strict: false,
    });

    match command {
        Commands::Export {
            selection,
            parallel,
            strict,
        } => {
            let config = base.apply(selection.into_overrides(parallel));
            let content = content::load_content(&config.content_dir, &config.locales)?;

            let exporter = Exporter::new(&config.base_dir).with_parallel(config.parallel);
            let written = if strict {
                exporter.export_checked(&content, &config.reference_locale, true)?
            } else {
                exporter.export(&content)?
            };

            if !cli.quiet {
                println!(
                    "{} {} locale file(s) under {}",
                    "Exported".green().bold(),
                    written.len(),
                    config.base_dir.display()
                );
                for file in &written {
                    println!("  {:8} {} ({} bytes)", file.locale.as_str(), file.path.display(), file.bytes);
                }
            }
        }

        Commands::Check { selection, strict } => {
            let config = base.apply(selection.into_overrides(false));
            diagnostics::run_check(&config, strict)?;
        }

        Commands::Locales { content_dir } => {
            let content_dir = content_dir.unwrap_or(base.content_dir);
            let mut locales = base.locales;
            if content_dir.is_dir() {
                for code in content::discover_locales(&content_dir)? {
                    if !locales.contains(&code) {
                        locales.push(code);
                    }
                }
            }

            println!(
                "  {:<8} {:<12} {:<16} {:<8} {}",
                "Locale", "Language", "Native", "Content", "Site"
            );
            println!("  {}", "-".repeat(56));
            for code in &locales {
                let has_content = content::content_path(&content_dir, code).is_some();
                println!(
                    "  {:<8} {:<12} {:<16} {:<8} {}",
                    code.as_str(),
                    locale::language_name(code.as_str()).unwrap_or("?"),
                    locale::native_name(code.as_str()).unwrap_or("?"),
                    if has_content { "yes" } else { "missing" },
                    site_column(code.as_str()),
                );
            }
        }
    }

    Ok(())
}
