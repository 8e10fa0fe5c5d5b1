use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "cc-legalcode",
    about = "Parse legal code filenames and URLs, validate scraped text, and write translation catalogs",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file [default: ./.cc-legalcode/config.toml, fallback ~/.config/cc-legalcode/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "terminal", value_name = "FORMAT", global = true)]
    pub format: OutputFormat,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print results, no headers or progress
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse legal code filenames such as `by-sa_3.0_de_de.html`
    Parse {
        #[arg(required = true, value_name = "FILENAME")]
        filenames: Vec<String>,
    },

    /// Parse every `.html` legal code file in a directory
    Scan { dir: PathBuf },

    /// Print the license URL a legal code URL belongs to
    LicenseUrl { url: String },

    /// Print the jurisdiction code of a jurisdiction URL
    Jurisdiction { url: String },

    /// Print the canonical about URL of a license
    AboutUrl {
        /// License code, e.g. `by-nc-nd`, `GPL`, `zero`
        code: String,
        /// License version, e.g. `4.0`
        #[arg(default_value = "")]
        license_version: String,
        /// Ported jurisdiction code
        #[arg(long)]
        jurisdiction: Option<String>,
    },

    /// Check that scraped JSON content holds only text, lists, and maps
    Validate { input: PathBuf },

    /// Write a flat JSON map of messages to a `.po` catalog
    Po {
        input: PathBuf,
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
        /// Catalog language; overrides `[catalog] language` from the config
        #[arg(long)]
        language: Option<String>,
    },

    /// List static site routes for license and legal code records
    Routes { input: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}
