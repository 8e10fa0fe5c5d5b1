//! Helpers for a Creative Commons license metadata site.
//!
//! - [`legalcode`] — legal code filenames and URLs.
//! - [`scraped`] — validation of text scraped from legal code HTML.
//! - [`po`] — gettext catalogs from message maps.
//! - [`distill`] — route parameters for the static site.
//! - [`config`] — TOML configuration.

pub mod config;
pub mod distill;
pub mod error;
pub mod legalcode;
pub mod models;
pub mod po;
pub mod scraped;
