//! Tile-service record types.

use std::fmt;

use serde_json::Value;

use crate::error::RecordError;

/// Default zoom bounds applied when a record carries no `level` object.
pub const DEFAULT_MIN_LEVEL: u32 = 0;
pub const DEFAULT_MAX_LEVEL: u32 = 19;

/// Tile addressing scheme.
///
/// The catalog `type` tag is read permissively: a missing tag means XYZ,
/// and an unrecognized tag is preserved verbatim so that consumers (e.g.
/// the descriptor generator) can reject it explicitly instead of silently
/// treating it as XYZ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressingMode {
    /// Zoom/row/column placeholders in the URL template.
    Xyz,
    /// Single quadkey placeholder in the URL template.
    QuadKey,
    /// Unrecognized `type` tag, kept verbatim.
    Other(String),
}

impl AddressingMode {
    /// Parse the catalog `type` tag. `None` defaults to XYZ.
    pub fn from_type_tag(tag: Option<&str>) -> Self {
        match tag {
            None | Some("xyz") => AddressingMode::Xyz,
            Some("quadkey") => AddressingMode::QuadKey,
            Some(other) => AddressingMode::Other(other.to_string()),
        }
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressingMode::Xyz => write!(f, "xyz"),
            AddressingMode::QuadKey => write!(f, "quadkey"),
            AddressingMode::Other(tag) => write!(f, "{}", tag),
        }
    }
}

/// Tile pixel dimensions. Stored as (height, width) by convention; the
/// catalog JSON carries `size: {width, height}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSize {
    pub height: u32,
    pub width: u32,
}

impl Default for TileSize {
    fn default() -> Self {
        Self {
            height: 256,
            width: 256,
        }
    }
}

/// One tile service from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    /// Unique key within the category; used for default export filenames.
    pub name: String,

    /// Optional display name; display falls back to `name`.
    pub title: Option<String>,

    /// URL template with zoom/row/column or quadkey placeholder tokens.
    pub url_template: String,

    /// Tile addressing scheme.
    pub addressing: AddressingMode,

    /// Zoom bounds, `min_level <= max_level`.
    pub min_level: u32,
    pub max_level: u32,

    /// Tile pixel size, default 256x256.
    pub tile_size: TileSize,

    /// Verbatim `CoordSys` declaration; the descriptor generator supplies
    /// a preset when absent.
    pub projection: Option<String>,

    /// Cache lifetime hint, 0 = unbounded.
    pub live_time: u64,

    /// HTML description, display only.
    pub description: Option<String>,

    /// Key into the catalog's shared images map; opaque to the core.
    pub image: Option<String>,
}

impl ServiceRecord {
    /// Display name: `title` when present, else `name`.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    /// Parse one `tms` entry from the catalog JSON.
    ///
    /// `name` and `url` are required; everything else takes documented
    /// defaults. Structural problems in `size` or `level`, or an inverted
    /// zoom range, fail the record.
    pub fn from_value(value: &Value) -> Result<Self, RecordError> {
        let name = required_str(value, "name")?.to_string();
        let url_template = required_str(value, "url")?.to_string();

        let addressing =
            AddressingMode::from_type_tag(value.get("type").and_then(Value::as_str));

        let tile_size = match value.get("size") {
            Some(size) => parse_tile_size(size)?,
            None => TileSize::default(),
        };

        let (min_level, max_level) = match value.get("level") {
            Some(level) => parse_level(level)?,
            None => (DEFAULT_MIN_LEVEL, DEFAULT_MAX_LEVEL),
        };

        Ok(Self {
            name,
            title: optional_str(value, "title"),
            url_template,
            addressing,
            min_level,
            max_level,
            tile_size,
            projection: optional_str(value, "cs"),
            live_time: value.get("liveTime").and_then(Value::as_u64).unwrap_or(0),
            description: optional_str(value, "description"),
            image: optional_str(value, "image"),
        })
    }
}

fn required_str<'a>(value: &'a Value, field: &'static str) -> Result<&'a str, RecordError> {
    value
        .get(field)
        .and_then(Value::as_str)
        .ok_or(RecordError::MissingField(field))
}

fn optional_str(value: &Value, field: &str) -> Option<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn parse_tile_size(size: &Value) -> Result<TileSize, RecordError> {
    let dim = |field: &'static str| -> Result<u32, RecordError> {
        let n = size
            .get(field)
            .and_then(Value::as_u64)
            .ok_or(RecordError::InvalidField {
                field: "size",
                message: format!("missing or non-integer '{}'", field),
            })?;
        if n == 0 || n > u32::MAX as u64 {
            return Err(RecordError::InvalidField {
                field: "size",
                message: format!("'{}' out of range: {}", field, n),
            });
        }
        Ok(n as u32)
    };

    Ok(TileSize {
        height: dim("height")?,
        width: dim("width")?,
    })
}

fn parse_level(level: &Value) -> Result<(u32, u32), RecordError> {
    let bound = |field: &'static str| -> Result<u32, RecordError> {
        let n = level
            .get(field)
            .and_then(Value::as_u64)
            .ok_or(RecordError::InvalidField {
                field: "level",
                message: format!("missing or non-integer '{}'", field),
            })?;
        u32::try_from(n).map_err(|_| RecordError::InvalidField {
            field: "level",
            message: format!("'{}' out of range: {}", field, n),
        })
    };

    let min = bound("min")?;
    let max = bound("max")?;
    if min > max {
        return Err(RecordError::InvalidField {
            field: "level",
            message: format!("min {} exceeds max {}", min, max),
        });
    }
    Ok((min, max))
}
