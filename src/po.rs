//! Writing scraped messages into gettext catalogs.

use std::path::Path;

use anyhow::{Context, Result};
use polib::catalog::Catalog;
use polib::message::Message;
use polib::metadata::CatalogMetadata;
use tracing::debug;

use crate::config::CatalogConfig;

/// Create an empty catalog with the configured header metadata.
pub fn new_catalog(config: &CatalogConfig) -> Catalog {
    let mut metadata = CatalogMetadata::new();
    metadata.project_id_version = config.project_id_version.clone();
    metadata.language = config.language.clone();
    metadata.mime_version = String::from("1.0");
    metadata.content_type = String::from("text/plain; charset=UTF-8");
    metadata.content_transfer_encoding = String::from("8bit");
    Catalog::new(metadata)
}

/// Add one message per entry: the key becomes the `msgid`, the value (with
/// surrounding whitespace trimmed) the `msgstr`.
///
/// Values must already be flat strings; nested content has to be flattened
/// by the caller.
pub fn save_dict_to_pofile<I, K, V>(catalog: &mut Catalog, messages: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    for (key, value) in messages {
        let message = Message::build_singular()
            .with_msgid(key.as_ref().to_string())
            .with_msgstr(value.as_ref().trim().to_string())
            .done();
        catalog.append_or_update(message);
    }
    debug!(count = catalog.messages().count(), "catalog messages");
}

/// Write the catalog to `path` in `.po` format.
pub fn write_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    polib::po_file::write(catalog, path)
        .with_context(|| format!("Could not write catalog to {}", path.display()))
}
