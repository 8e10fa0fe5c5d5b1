use tracing::debug;

use super::urls::compute_about_url;
use super::BASE_URL;
use crate::error::ParseError;
use crate::models::LicenseIdentifier;

/// Ported (jurisdiction-specific) licenses stopped with 4.0.
const FIRST_UNPORTED_VERSION: f64 = 4.0;

/// Filenames cannot carry `+`, so these tokens are spelled out on disk.
fn remap_license_token(token: &str) -> &str {
    match token {
        "samplingplus" => "sampling+",
        "nc-samplingplus" => "nc-sampling+",
        other => other,
    }
}

/// Parse the filename a license's legal code HTML is stored under.
///
/// The filename must not include a path; a trailing `.html` is accepted.
/// Its shape is `<license>_<version>[_<jurisdiction>][_<language>]`, e.g.
/// `by-nc-nd_4.0.html`, `by_3.0_nl.html`, `by-sa_3.0_de_de.html` or
/// `zero_1.0_fr.html`.
pub fn parse_legalcode_filename(filename: &str) -> Result<LicenseIdentifier, ParseError> {
    let basename = filename.strip_suffix(".html").unwrap_or(filename);
    let mut parts = basename.split('_');

    // split always yields at least one piece
    let license = remap_license_token(parts.next().unwrap_or_default());
    let version = parts.next().ok_or_else(|| ParseError::MissingVersion {
        filename: filename.to_string(),
    })?;
    let mut parts = parts.peekable();

    let (license_code, path_base, jurisdiction) = if license.starts_with("zero") {
        ("CC0", "publicdomain", None)
    } else {
        let jurisdiction = if parts.peek().is_some() && is_ported_version(version)? {
            parts.next()
        } else {
            None
        };
        (license, "licenses", jurisdiction)
    };
    let jurisdiction = jurisdiction.filter(|j| !j.is_empty());
    let language = parts.next().filter(|l| !l.is_empty());

    let mut url = format!("{}/{}/{}/{}", BASE_URL, path_base, license, version);
    if let Some(j) = jurisdiction {
        url.push('/');
        url.push_str(j);
    }
    match language {
        Some(l) => {
            url.push_str("/legalcode.");
            url.push_str(l);
        }
        None => url.push('/'),
    }

    let identifier = LicenseIdentifier {
        license_code: license_code.to_string(),
        version: version.to_string(),
        jurisdiction_code: jurisdiction.map(str::to_string),
        language_code: language.map(str::to_string),
        about_url: compute_about_url(license, version, jurisdiction),
        url,
    };
    debug!(filename, %identifier, "parsed legal code filename");

    Ok(identifier)
}

fn is_ported_version(version: &str) -> Result<bool, ParseError> {
    let number: f64 = version.parse().map_err(|_| ParseError::InvalidVersion {
        version: version.to_string(),
    })?;
    Ok(number < FIRST_UNPORTED_VERSION)
}
