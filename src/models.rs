use serde::{Deserialize, Serialize};

/// Metadata recovered from a legal code filename such as `by-sa_3.0_de_de.html`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseIdentifier {
    pub license_code: String,
    pub version: String,
    /// Ported jurisdiction; only ever set for versions below 4.0.
    pub jurisdiction_code: Option<String>,
    /// Language of a translated legal code document.
    pub language_code: Option<String>,
    pub url: String,
    pub about_url: String,
}

impl std::fmt::Display for LicenseIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.license_code, self.version)?;
        if let Some(j) = &self.jurisdiction_code {
            write!(f, " ({})", j)?;
        }
        if let Some(l) = &self.language_code {
            write!(f, " [{}]", l)?;
        }
        Ok(())
    }
}

/// A license as stored by the site: language independent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseRecord {
    pub license_code: String,
    pub version: String,
}

/// One translated legal code document of a license.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalCodeRecord {
    pub license_code: String,
    pub version: String,
    pub language_code: String,
}

/// Input for `routes`: the records the site publishes pages for.
#[derive(Debug, Default, Deserialize)]
pub struct SiteRecords {
    #[serde(default)]
    pub licenses: Vec<LicenseRecord>,
    #[serde(default)]
    pub legalcodes: Vec<LegalCodeRecord>,
}

/// Route parameters for a license deed page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LicenseRoute {
    pub license_code: String,
    pub version: String,
}

/// Route parameters for a translated legal code page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegalCodeRoute {
    pub license_code: String,
    pub version: String,
    pub language_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_display() {
        let id = LicenseIdentifier {
            license_code: "by-sa".to_string(),
            version: "3.0".to_string(),
            jurisdiction_code: Some("de".to_string()),
            language_code: Some("de".to_string()),
            url: "http://creativecommons.org/licenses/by-sa/3.0/de/legalcode.de".to_string(),
            about_url: "http://creativecommons.org/licenses/by-sa/3.0/de/".to_string(),
        };
        assert_eq!(id.to_string(), "by-sa 3.0 (de) [de]");
    }

    #[test]
    fn test_site_records_sections_are_optional() {
        let records: SiteRecords = serde_json::from_str(
            r#"{"licenses": [{"license_code": "by", "version": "4.0"}]}"#,
        )
        .unwrap();
        assert_eq!(records.licenses.len(), 1);
        assert!(records.legalcodes.is_empty());
    }
}
