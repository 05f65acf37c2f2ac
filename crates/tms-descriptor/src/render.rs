//! Rendering of the definition file and the XML sidecar.

use std::borrow::Cow;

use quick_xml::events::{BytesDecl, BytesText, Event};
use quick_xml::Writer;

use tms_catalog::{AddressingMode, ServiceRecord};

use crate::error::{DescriptorError, DescriptorResult};
use crate::options::DescriptorOptions;
use crate::rewrite::rewrite_first_token;

/// Render the `.tab` definition file. The layout is fixed, including the
/// single leading space on the projection line.
pub(crate) fn render_definition(
    sidecar_name: &str,
    record: &ServiceRecord,
    opts: &DescriptorOptions,
) -> String {
    let projection = record
        .projection
        .as_deref()
        .unwrap_or_else(|| opts.encoding.default_projection());

    let mut out = String::new();
    out.push_str("!table\n");
    out.push_str("!version 1050\n");
    out.push_str(&format!("!charset {}\n\n", opts.encoding.charset_tag()));
    out.push_str("Definition Table\n");
    out.push_str(&format!("  File \"{}\"\n", sidecar_name));
    out.push_str("  Type \"TILESERVER\"\n");
    out.push_str(&format!(" {}\n", projection));
    out.push_str("ReadOnly\n");
    out
}

/// Render the sidecar XML, pretty-printed with two-space indentation.
pub(crate) fn render_sidecar(
    record: &ServiceRecord,
    opts: &DescriptorOptions,
) -> DescriptorResult<String> {
    let type_attr = match &record.addressing {
        AddressingMode::QuadKey => "QuadKey",
        AddressingMode::Xyz => "LevelRowColumn",
        AddressingMode::Other(tag) => {
            return Err(DescriptorError::UnsupportedAddressingMode(tag.clone()))
        }
    };

    let url: Cow<'_, str> = if opts.legacy_rewrite {
        rewrite_first_token(&record.url_template)
    } else {
        Cow::Borrowed(record.url_template.as_str())
    };

    let min_level = record.min_level.to_string();
    let max_level = record.max_level.to_string();
    let height = record.tile_size.height.to_string();
    let width = record.tile_size.width.to_string();

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;
    writer
        .create_element("TileServerInfo")
        .with_attribute(("Type", type_attr))
        .write_inner_content(|w| {
            w.create_element("Url")
                .write_text_content(BytesText::new(&url))?;
            w.create_element("MinLevel")
                .write_text_content(BytesText::new(&min_level))?;
            w.create_element("MaxLevel")
                .write_text_content(BytesText::new(&max_level))?;
            w.create_element("TileSize")
                .with_attribute(("Height", height.as_str()))
                .with_attribute(("Width", width.as_str()))
                .write_empty()?;
            Ok::<(), quick_xml::Error>(())
        })?;

    let mut xml = String::from_utf8(writer.into_inner())
        .map_err(|e| quick_xml::Error::from(e.utf8_error()))?;
    xml.push('\n');
    Ok(xml)
}
