//! Route parameters for the statically generated site.
//!
//! The site publishes one deed page per license and one legal code page per
//! translation. Versions listed in the distill config are left out.

use crate::models::{LegalCodeRecord, LegalCodeRoute, LicenseRecord, LicenseRoute};

fn is_excluded(version: &str, excluded_versions: &[String]) -> bool {
    excluded_versions.iter().any(|v| v == version)
}

/// Yield `license_code` and `version` for every published license.
pub fn get_licenses_code_and_version<'a>(
    licenses: &'a [LicenseRecord],
    excluded_versions: &'a [String],
) -> impl Iterator<Item = LicenseRoute> + 'a {
    licenses
        .iter()
        .filter(move |l| !is_excluded(&l.version, excluded_versions))
        .map(|l| LicenseRoute {
            license_code: l.license_code.clone(),
            version: l.version.clone(),
        })
}

/// Yield `license_code`, `version`, and the translation's `language_code`
/// for every published legal code.
pub fn get_licenses_code_version_language_code<'a>(
    legalcodes: &'a [LegalCodeRecord],
    excluded_versions: &'a [String],
) -> impl Iterator<Item = LegalCodeRoute> + 'a {
    legalcodes
        .iter()
        .filter(move |lc| !is_excluded(&lc.version, excluded_versions))
        .map(|lc| LegalCodeRoute {
            license_code: lc.license_code.clone(),
            version: lc.version.clone(),
            language_code: lc.language_code.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DistillConfig;

    fn license(code: &str, version: &str) -> LicenseRecord {
        LicenseRecord {
            license_code: code.to_string(),
            version: version.to_string(),
        }
    }

    fn legalcode(code: &str, version: &str, lang: &str) -> LegalCodeRecord {
        LegalCodeRecord {
            license_code: code.to_string(),
            version: version.to_string(),
            language_code: lang.to_string(),
        }
    }

    #[test]
    fn test_license_routes_skip_excluded_versions() {
        let excluded = DistillConfig::default().excluded_versions;
        let licenses = vec![
            license("by", "4.0"),
            license("by", "3.0"),
            license("by-nc-nd", "4.0"),
            license("by-sa", "2.5"),
        ];

        let routes: Vec<_> = get_licenses_code_and_version(&licenses, &excluded).collect();
        assert_eq!(
            routes,
            vec![
                LicenseRoute {
                    license_code: "by".to_string(),
                    version: "4.0".to_string()
                },
                LicenseRoute {
                    license_code: "by-nc-nd".to_string(),
                    version: "4.0".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_legalcode_routes_carry_language() {
        let excluded = vec!["1.0".to_string()];
        let legalcodes = vec![
            legalcode("by", "4.0", "es"),
            legalcode("zero", "1.0", "fr"),
            legalcode("by-sa", "3.0", "de"),
        ];

        let routes: Vec<_> =
            get_licenses_code_version_language_code(&legalcodes, &excluded).collect();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].language_code, "es");
        assert_eq!(routes[1].license_code, "by-sa");
    }

    #[test]
    fn test_nothing_excluded() {
        let licenses = vec![license("by", "1.0")];
        assert_eq!(get_licenses_code_and_version(&licenses, &[]).count(), 1);
    }
}
