//! Tile-service catalog model and parser.
//!
//! A catalog document is a JSON file grouping tile-map services into flat
//! categories, with an optional shared map of inline icons. Parsing is
//! deliberately lenient at the record level: a single malformed service
//! entry is dropped (with a warning) rather than failing the whole load,
//! because the catalog is an externally hosted document that is refreshed
//! periodically and may pick up bad entries at any time.

pub mod catalog;
pub mod error;
pub mod record;

pub use catalog::{
    catalog_filename, locate_catalog, parse_catalog, CatalogDocument, Category, ImageEntry,
};
pub use error::{CatalogError, CatalogResult, RecordError};
pub use record::{AddressingMode, ServiceRecord, TileSize};
