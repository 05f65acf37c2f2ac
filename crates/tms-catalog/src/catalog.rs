//! Catalog document parsing.
//!
//! Expected top-level shape:
//!
//! ```json
//! {
//!   "images": { "<key>": { "data": "<base64>", "format": "png" } },
//!   "services": {
//!     "category": [
//!       { "name": "...", "image": "<key>", "tms": [ { ... } ] }
//!     ]
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{CatalogError, CatalogResult};
use crate::record::ServiceRecord;

/// One inline icon from the shared images map. The core never decodes the
/// base64 payload; it is carried opaquely for UI consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    /// Base64-encoded image bytes.
    pub data: String,
    /// Image format tag, e.g. "png".
    pub format: String,
}

/// A flat, ordered grouping of services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    /// Key into [`CatalogDocument::images`]; a dangling key is not an
    /// error, the icon is simply omitted.
    pub image: Option<String>,
    pub services: Vec<ServiceRecord>,
}

impl Category {
    /// Look up a service by its `name` key.
    pub fn service(&self, name: &str) -> Option<&ServiceRecord> {
        self.services.iter().find(|s| s.name == name)
    }
}

/// A parsed catalog: read-only snapshot, re-parsed from scratch on every
/// (re)load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogDocument {
    pub images: HashMap<String, ImageEntry>,
    pub categories: Vec<Category>,
}

impl CatalogDocument {
    /// Look up a category by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Total number of service records across all categories.
    pub fn service_count(&self) -> usize {
        self.categories.iter().map(|c| c.services.len()).sum()
    }
}

/// Parse a catalog JSON document.
///
/// Document-level problems (invalid JSON, missing `services.category`
/// path, a category without its `tms` array) fail the whole load.
/// Individual records missing `name` or `url`, or carrying malformed
/// `size`/`level` objects, are dropped with a warning and their siblings
/// are kept.
pub fn parse_catalog(json_text: &str) -> CatalogResult<CatalogDocument> {
    let root: Value = serde_json::from_str(json_text)?;

    let categories = root
        .get("services")
        .and_then(|s| s.get("category"))
        .and_then(Value::as_array)
        .ok_or_else(|| {
            CatalogError::MalformedCatalog("missing 'services.category' array".to_string())
        })?;

    let images = match root.get("images") {
        Some(images) => serde_json::from_value(images.clone()).map_err(|e| {
            CatalogError::MalformedCatalog(format!("invalid 'images' map: {}", e))
        })?,
        None => HashMap::new(),
    };

    let mut doc = CatalogDocument {
        images,
        categories: Vec::with_capacity(categories.len()),
    };

    for category in categories {
        let name = category
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                CatalogError::MalformedCatalog("category missing 'name'".to_string())
            })?
            .to_string();

        let entries = category.get("tms").and_then(Value::as_array).ok_or_else(|| {
            CatalogError::MalformedCatalog(format!("category '{}' missing 'tms' array", name))
        })?;

        let mut services = Vec::with_capacity(entries.len());
        for entry in entries {
            match ServiceRecord::from_value(entry) {
                Ok(record) => services.push(record),
                Err(e) => {
                    warn!(category = %name, error = %e, "dropping malformed service record");
                }
            }
        }

        doc.categories.push(Category {
            name,
            image: category
                .get("image")
                .and_then(Value::as_str)
                .map(str::to_string),
            services,
        });
    }

    Ok(doc)
}

/// Conventional catalog filename for a language, e.g.
/// `ListTileServices_ru.json`.
pub fn catalog_filename(language: &str) -> String {
    format!("ListTileServices_{}.json", language)
}

/// Locate the catalog file for a language under `dir`, falling back to
/// the Russian catalog when the language-specific file does not exist.
pub fn locate_catalog(dir: &Path, language: &str) -> PathBuf {
    let candidate = dir.join(catalog_filename(language));
    if candidate.is_file() {
        return candidate;
    }
    dir.join(catalog_filename("ru"))
}
