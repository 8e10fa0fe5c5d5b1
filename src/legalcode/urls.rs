use regex::Regex;

use super::BASE_URL;
use crate::error::UrlError;

/// Language codes as they appear in `legalcode.<lang>` suffixes (`es`, `zh-Hans`, `sr_LATN`).
pub const LANGUAGE_CODE_PATTERN: &str = r"[a-zA-Z_-]*";

/// Legacy open-source legal code pages that have no `legalcode` suffix.
const LEGACY_LICENSE_URLS: &[(&str, &str)] = &[
    (
        "http://opensource.org/licenses/bsd-license.php",
        "http://creativecommons.org/licenses/BSD/",
    ),
    (
        "http://opensource.org/licenses/mit-license.php",
        "http://creativecommons.org/licenses/MIT/",
    ),
];

/// Compute the canonical "about" URL of a license.
///
/// A license is language independent (unlike its legal code) but may be
/// ported to a jurisdiction:
///
/// ```text
/// http://creativecommons.org/licenses/BSD/
/// http://creativecommons.org/licenses/GPL/2.0/
/// http://creativecommons.org/publicdomain/zero/1.0/
/// http://creativecommons.org/licenses/by/3.0/nl/
/// http://creativecommons.org/licenses/by-nc-nd/4.0/
/// ```
pub fn compute_about_url(license_code: &str, version: &str, jurisdiction_code: Option<&str>) -> String {
    if matches!(license_code, "BSD" | "MIT") {
        return format!("{}/licenses/{}/", BASE_URL, license_code);
    }
    if license_code.contains("GPL") {
        return format!("{}/licenses/{}/{}/", BASE_URL, license_code, version);
    }

    let prefix = match license_code {
        "CC0" | "zero" | "mark" => "publicdomain",
        _ => "licenses",
    };
    let mostly = format!("{}/{}/{}/{}/", BASE_URL, prefix, license_code, version);

    match jurisdiction_code.filter(|j| !j.is_empty()) {
        Some(j) => format!("{}{}/", mostly, j),
        None => mostly,
    }
}

/// Return the URL of the license a legal code URL belongs to.
///
/// `http://creativecommons.org/licenses/by/4.0/legalcode.es` becomes
/// `http://creativecommons.org/licenses/by/4.0/`. The two legacy
/// opensource.org pages map to the BSD and MIT licenses.
pub fn get_license_url_from_legalcode_url(legalcode_url: &str) -> Result<String, UrlError> {
    if let Some((_, license_url)) = LEGACY_LICENSE_URLS
        .iter()
        .find(|(legacy, _)| *legacy == legalcode_url)
    {
        return Ok(license_url.to_string());
    }

    let re = Regex::new(&format!(r"^(.*)legalcode(\.{})?", LANGUAGE_CODE_PATTERN))?;
    match re.captures(legalcode_url) {
        Some(caps) => Ok(caps[1].to_string()),
        None => Err(UrlError::NoLegalcodeSuffix {
            url: legalcode_url.to_string(),
        }),
    }
}

/// Return the jurisdiction code from a URL like
/// `http://creativecommons.org/international/nl/`.
///
/// Short paths yield an empty string rather than an error.
pub fn get_code_from_jurisdiction_url(url: &str) -> String {
    raw_path(url)
        .trim_matches('/')
        .split('/')
        .nth(1)
        .unwrap_or_default()
        .to_string()
}

/// The path of `url` exactly as written: no dot-segment resolution and no
/// percent-encoding.
fn raw_path(url: &str) -> &str {
    let rest = match url.split_once(':') {
        Some((scheme, rest)) if is_scheme(scheme) => rest,
        _ => url,
    };
    // split always yields at least one piece
    let rest = rest.split(['?', '#']).next().unwrap_or_default();
    match rest.strip_prefix("//") {
        Some(authority_and_path) => authority_and_path
            .find('/')
            .map_or("", |start| &authority_and_path[start..]),
        None => rest,
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
