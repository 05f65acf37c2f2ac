//! MapInfo-style tile-server descriptor generation.
//!
//! A descriptor is a pair of files: a small `.tab` definition file naming
//! the service, and an XML sidecar carrying tile addressing, zoom bounds,
//! and tile pixel size. A tile consumer reads the pair to fetch raster
//! tiles from the remote server described by a [`ServiceRecord`].
//!
//! Two historical output variants exist, differing only in charset tag,
//! byte encoding, and default projection; they are collapsed here into one
//! generator parameterized by [`DescriptorOptions`].

pub mod error;
pub mod options;
mod render;
mod rewrite;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use tms_catalog::ServiceRecord;

pub use error::{DescriptorError, DescriptorResult};
pub use options::{
    DescriptorOptions, TabEncoding, PROJECTION_PRESET_CYRILLIC, PROJECTION_PRESET_LATIN,
};
pub use rewrite::rewrite_first_token;

/// The rendered descriptor pair, already encoded per the selected
/// [`TabEncoding`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorPair {
    /// Bytes of the `.tab` definition file.
    pub definition: Vec<u8>,
    /// Bytes of the XML sidecar.
    pub sidecar: Vec<u8>,
    /// Sidecar file name: the target's stem with an `.xml` extension.
    pub sidecar_name: String,
}

/// Render the descriptor pair for `record`, naming the sidecar after the
/// stem of `target`. Pure; does not touch the filesystem.
pub fn render_descriptor(
    target: &Path,
    record: &ServiceRecord,
    opts: &DescriptorOptions,
) -> DescriptorResult<DescriptorPair> {
    let stem = target
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| DescriptorError::InvalidTargetPath(target.display().to_string()))?;
    let sidecar_name = format!("{}.xml", stem);

    let definition = opts
        .encoding
        .encode(&render::render_definition(&sidecar_name, record, opts));
    let sidecar = opts.encoding.encode(&render::render_sidecar(record, opts)?);

    Ok(DescriptorPair {
        definition,
        sidecar,
        sidecar_name,
    })
}

/// Write the descriptor pair: the definition file at `target` and the
/// sidecar next to it with the same stem and an `.xml` extension.
///
/// Pre-existing files at either path are silently overwritten, and the
/// two writes carry no transactional guarantee across the pair: an
/// interruption between them can leave an inconsistent pair on disk.
pub fn write_descriptor(
    target: &Path,
    record: &ServiceRecord,
    opts: &DescriptorOptions,
) -> DescriptorResult<(PathBuf, PathBuf)> {
    let pair = render_descriptor(target, record, opts)?;
    let sidecar_path = target.with_file_name(&pair.sidecar_name);

    fs::write(target, &pair.definition)?;
    fs::write(&sidecar_path, &pair.sidecar)?;

    debug!(
        definition = %target.display(),
        sidecar = %sidecar_path.display(),
        "wrote descriptor pair"
    );
    Ok((target.to_path_buf(), sidecar_path))
}

/// Conventional export filename for a record: `{name}_{category}.tab`,
/// lowercased.
pub fn default_export_filename(record: &ServiceRecord, category_name: &str) -> String {
    format!("{}_{}.tab", record.name, category_name).to_lowercase()
}
