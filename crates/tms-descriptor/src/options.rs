//! Generator configuration.

/// Default projection of the Latin-charset variant.
pub const PROJECTION_PRESET_LATIN: &str = "CoordSys Earth Projection 10, 104, \"m\"";

/// Default projection of the Cyrillic-charset variant.
pub const PROJECTION_PRESET_CYRILLIC: &str = "CoordSys Earth Projection 10, 157, \"m\", 0 Bounds (-20037508.34, -20037508.34) (20037508.34, 20037508.34)";

/// Output charset of the definition/sidecar pair.
///
/// Each value is one of the two historical descriptor variants; the
/// selected encoding also picks its historical default projection when
/// the record carries none of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabEncoding {
    /// `WindowsLatin1` charset tag, bytes written verbatim (UTF-8/ASCII).
    #[default]
    Latin,
    /// `WindowsCyrillic` charset tag, bytes encoded as Windows-1251.
    Cyrillic,
}

impl TabEncoding {
    /// Charset tag written on the `!charset` line.
    pub fn charset_tag(self) -> &'static str {
        match self {
            TabEncoding::Latin => "WindowsLatin1",
            TabEncoding::Cyrillic => "WindowsCyrillic",
        }
    }

    /// Projection preset substituted when the record has no `cs` value.
    pub fn default_projection(self) -> &'static str {
        match self {
            TabEncoding::Latin => PROJECTION_PRESET_LATIN,
            TabEncoding::Cyrillic => PROJECTION_PRESET_CYRILLIC,
        }
    }

    /// Encode rendered text to file bytes.
    pub(crate) fn encode(self, text: &str) -> Vec<u8> {
        match self {
            TabEncoding::Latin => text.as_bytes().to_vec(),
            TabEncoding::Cyrillic => encoding_rs::WINDOWS_1251.encode(text).0.into_owned(),
        }
    }
}

/// Explicit descriptor configuration replacing the implicit historical
/// variant split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DescriptorOptions {
    pub encoding: TabEncoding,
    /// Rewrite the first bracket token of the URL template for legacy
    /// sidecar consumers. An explicit flag, not a version sniff.
    pub legacy_rewrite: bool,
}

impl DescriptorOptions {
    /// The historical Latin variant: plain output, no template rewrite.
    pub fn latin() -> Self {
        Self {
            encoding: TabEncoding::Latin,
            legacy_rewrite: false,
        }
    }

    /// The historical Cyrillic variant: Windows-1251 output with the
    /// legacy template rewrite applied.
    pub fn cyrillic_legacy() -> Self {
        Self {
            encoding: TabEncoding::Cyrillic,
            legacy_rewrite: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_tags() {
        assert_eq!(TabEncoding::Latin.charset_tag(), "WindowsLatin1");
        assert_eq!(TabEncoding::Cyrillic.charset_tag(), "WindowsCyrillic");
    }

    #[test]
    fn test_cyrillic_encoding_produces_single_byte_text() {
        let bytes = TabEncoding::Cyrillic.encode("Карта");
        assert_eq!(bytes.len(), 5);
    }

    #[test]
    fn test_latin_encoding_is_verbatim() {
        assert_eq!(TabEncoding::Latin.encode("abc"), b"abc".to_vec());
    }
}
