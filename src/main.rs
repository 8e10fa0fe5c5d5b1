//! `cc-legalcode` — command-line front-end for the legal code helpers.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and initialize logging ([`logging`]).
//! 2. Load config ([`cc_legalcode::config::load_config`]).
//! 3. Run the requested command against the library.
//! 4. Render the result as a table ([`report`]) or JSON.

mod cli;
mod logging;
mod report;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{info, warn};

use cc_legalcode::config::{load_config, Config};
use cc_legalcode::distill::{get_licenses_code_and_version, get_licenses_code_version_language_code};
use cc_legalcode::legalcode::filename::parse_legalcode_filename;
use cc_legalcode::legalcode::urls::{
    compute_about_url, get_code_from_jurisdiction_url, get_license_url_from_legalcode_url,
};
use cc_legalcode::models::{LicenseIdentifier, SiteRecords};
use cc_legalcode::po::{new_catalog, save_dict_to_pofile, write_catalog};
use cc_legalcode::scraped::{validate_is_all_text, Scraped};
use cli::{Cli, Command, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd, cli.config.as_deref())?;

    match &cli.command {
        Command::Parse { filenames } => {
            let ids = filenames
                .iter()
                .map(|f| parse_legalcode_filename(f).with_context(|| format!("Could not parse {}", f)))
                .collect::<Result<Vec<_>>>()?;
            print_identifiers(&cli, &ids)?;
        }
        Command::Scan { dir } => scan_directory(&cli, dir)?,
        Command::LicenseUrl { url } => {
            print_value(cli.format, &get_license_url_from_legalcode_url(url)?)?;
        }
        Command::Jurisdiction { url } => {
            print_value(cli.format, &get_code_from_jurisdiction_url(url))?;
        }
        Command::AboutUrl {
            code,
            license_version,
            jurisdiction,
        } => {
            let about = compute_about_url(code, license_version, jurisdiction.as_deref());
            print_value(cli.format, &about)?;
        }
        Command::Validate { input } => {
            let value: serde_json::Value = read_json(input)?;
            let tree = validate_is_all_text(&Scraped::from(value))
                .with_context(|| format!("{} holds non-text content", input.display()))?;
            if cli.format == OutputFormat::Terminal && !cli.quiet {
                eprintln!(" {} {} is all text", "✓".green(), input.display());
            }
            println!("{}", serde_json::to_string_pretty(&tree)?);
        }
        Command::Po {
            input,
            output,
            language,
        } => write_po(&cli, &config, input, output, language.as_deref())?,
        Command::Routes { input } => print_routes(&cli, &config, input)?,
    }

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Could not parse {}", path.display()))
}

fn print_value<T: Serialize + std::fmt::Display + ?Sized>(format: OutputFormat, value: &T) -> Result<()> {
    match format {
        OutputFormat::Terminal => println!("{}", value),
        OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
    }
    Ok(())
}

fn print_identifiers(cli: &Cli, ids: &[LicenseIdentifier]) -> Result<()> {
    match cli.format {
        OutputFormat::Terminal => report::terminal::render_identifiers(ids, cli.quiet),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(ids)?),
    }
    Ok(())
}

/// File name (or directory) paired with the reason it was skipped.
type Skipped = (String, String);

/// Collect the `*.html` file names in `dir`, sorted. Unreadable entries and
/// names that are not UTF-8 are returned as skipped instead.
fn list_html_files(dir: &Path) -> Result<(Vec<String>, Vec<Skipped>)> {
    let mut filenames = Vec::new();
    let mut skipped = Vec::new();

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("Could not read directory {}", dir.display()))?
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "unreadable directory entry");
                skipped.push((dir.display().to_string(), e.to_string()));
                continue;
            }
        };
        if !entry.path().extension().is_some_and(|ext| ext == "html") {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => filenames.push(name),
            Err(raw) => {
                let shown = raw.to_string_lossy().into_owned();
                warn!(filename = %shown, "skipping file name that is not UTF-8");
                skipped.push((shown, "file name is not valid UTF-8".to_string()));
            }
        }
    }

    filenames.sort();
    Ok((filenames, skipped))
}

/// Parse every `*.html` file name in `dir`; unparseable names are skipped with a warning.
fn scan_directory(cli: &Cli, dir: &Path) -> Result<()> {
    let (filenames, mut failures) = list_html_files(dir)?;
    info!(dir = %dir.display(), files = filenames.len(), "scanning legal code files");

    let pb = if !cli.quiet && cli.format == OutputFormat::Terminal {
        let pb = ProgressBar::new(filenames.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut ids = Vec::new();
    for filename in filenames {
        match parse_legalcode_filename(&filename) {
            Ok(id) => ids.push(id),
            Err(e) => {
                warn!(%filename, error = %e, "skipping legal code file");
                failures.push((filename, e.to_string()));
            }
        }
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    match cli.format {
        OutputFormat::Terminal => {
            report::terminal::render_identifiers(&ids, cli.quiet);
            report::terminal::render_scan_summary(ids.len(), &failures, cli.quiet);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ids)?),
    }
    Ok(())
}

fn write_po(
    cli: &Cli,
    config: &Config,
    input: &Path,
    output: &Path,
    language: Option<&str>,
) -> Result<()> {
    let messages: BTreeMap<String, String> = read_json(input)
        .context("messages must be a flat JSON object of strings")?;

    let mut catalog_config = config.catalog.clone();
    if let Some(language) = language {
        catalog_config.language = language.to_string();
    }

    let mut catalog = new_catalog(&catalog_config);
    save_dict_to_pofile(&mut catalog, &messages);
    write_catalog(&catalog, output)?;
    info!(output = %output.display(), messages = messages.len(), "wrote catalog");

    if !cli.quiet {
        eprintln!(
            " {} {} messages → {}",
            "✓".green(),
            messages.len(),
            output.display()
        );
    }
    Ok(())
}

fn print_routes(cli: &Cli, config: &Config, input: &Path) -> Result<()> {
    let records: SiteRecords = read_json(input)?;
    let excluded = &config.distill.excluded_versions;

    let licenses: Vec<_> = get_licenses_code_and_version(&records.licenses, excluded).collect();
    let legalcodes: Vec<_> =
        get_licenses_code_version_language_code(&records.legalcodes, excluded).collect();

    match cli.format {
        OutputFormat::Terminal => report::terminal::render_routes(&licenses, &legalcodes, cli.quiet),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "licenses": licenses,
                "legalcodes": legalcodes,
            }))?
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_list_html_files() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("by_4.0.html"), "").unwrap();
        std::fs::write(dir.path().join("by-sa_3.0_de.html"), "").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();

        let (filenames, skipped) = list_html_files(dir.path()).unwrap();
        assert_eq!(filenames, vec!["by-sa_3.0_de.html", "by_4.0.html"]);
        assert!(skipped.is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_file_name_is_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("by_4.0.html"), "").unwrap();
        std::fs::write(dir.path().join(OsStr::from_bytes(b"by_4.0_\xff.html")), "").unwrap();

        let (filenames, skipped) = list_html_files(dir.path()).unwrap();
        assert_eq!(filenames, vec!["by_4.0.html"]);
        assert_eq!(skipped.len(), 1);
        assert!(skipped[0].1.contains("UTF-8"));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(list_html_files(&dir.path().join("absent")).is_err());
    }
}
