use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use cc_legalcode::models::{LegalCodeRoute, LicenseIdentifier, LicenseRoute};

fn header(columns: &[&str]) -> Vec<Cell> {
    columns
        .iter()
        .map(|c| Cell::new(c).add_attribute(Attribute::Bold))
        .collect()
}

fn new_table(columns: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header(columns));
    table
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(v) => Cell::new(v),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}

/// Render parsed legal code identifiers as a table.
pub fn render_identifiers(ids: &[LicenseIdentifier], quiet: bool) {
    if !quiet {
        println!(
            "\n {} v{}\n",
            "cc-legalcode".bold(),
            env!("CARGO_PKG_VERSION")
        );
    }

    let mut table = new_table(&[
        "License",
        "Version",
        "Jurisdiction",
        "Language",
        "URL",
        "About URL",
    ]);

    for id in ids {
        table.add_row(vec![
            Cell::new(&id.license_code).fg(Color::Cyan),
            Cell::new(&id.version),
            optional_cell(id.jurisdiction_code.as_deref()),
            optional_cell(id.language_code.as_deref()),
            Cell::new(&id.url),
            Cell::new(&id.about_url),
        ]);
    }

    println!("{}", table);
}

/// Summarize a directory scan: parsed count plus one line per skipped file.
pub fn render_scan_summary(parsed: usize, failures: &[(String, String)], quiet: bool) {
    if quiet {
        println!(
            "Parsed: {}  Skipped: {}",
            parsed.to_string().green(),
            failures.len().to_string().yellow()
        );
        return;
    }

    println!(
        " {}  Parsed  : {:>4}",
        "✓".green(),
        parsed
    );
    println!(
        " {}  Skipped : {:>4}",
        "⚠".yellow(),
        failures.len()
    );
    for (file, reason) in failures {
        println!("    {} {}: {}", "→".yellow(), file, reason);
    }
    println!();
}

/// Render license and legal code routes as two tables.
pub fn render_routes(licenses: &[LicenseRoute], legalcodes: &[LegalCodeRoute], quiet: bool) {
    if !quiet {
        println!(" {} License routes: {}\n", "[DEED]".cyan().bold(), licenses.len());
    }
    let mut table = new_table(&["License", "Version"]);
    for route in licenses {
        table.add_row(vec![Cell::new(&route.license_code), Cell::new(&route.version)]);
    }
    println!("{}\n", table);

    if !quiet {
        println!(
            " {} Legal code routes: {}\n",
            "[LEGALCODE]".cyan().bold(),
            legalcodes.len()
        );
    }
    let mut table = new_table(&["License", "Version", "Language"]);
    for route in legalcodes {
        table.add_row(vec![
            Cell::new(&route.license_code),
            Cell::new(&route.version),
            Cell::new(&route.language_code),
        ]);
    }
    println!("{}", table);
}
