//! Legal code filename and URL handling.
//!
//! - [`filename`] — turns a stored legal code filename into a
//!   [`LicenseIdentifier`](crate::models::LicenseIdentifier).
//! - [`urls`] — canonical "about" URLs, legal code URL → license URL, and
//!   jurisdiction codes.

pub mod filename;
pub mod urls;

/// Every canonical URL is rooted here, whatever host the input came from.
pub const BASE_URL: &str = "http://creativecommons.org";
