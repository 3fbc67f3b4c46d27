use crate::PlotBytes;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fmt;

/// Encoded image format of a rendered sparkline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    #[default]
    Png,
    Jpeg,
    /// SVG markup, rendered without rasterization
    Svg,
}

impl ImageFormat {
    /// Short format tag, e.g. `"png"`
    pub fn tag(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Svg => "svg",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Svg => "image/svg+xml",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One rendered sparkline: the encoded image plus its format tag
///
/// Produced fresh by every render call and handed straight to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSparkline {
    format: ImageFormat,
    bytes: PlotBytes,
}

impl RenderedSparkline {
    pub fn new(format: ImageFormat, bytes: PlotBytes) -> Self {
        Self { format, bytes }
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> PlotBytes {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Standard base64 encoding of the image bytes
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// `data:` URI suitable for an `src` attribute
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.format.mime_type(), self.to_base64())
    }

    /// Inline HTML image tag, e.g. `<img src="data:image/png;base64,..."/>`
    pub fn to_html(&self) -> String {
        format!("<img src=\"{}\"/>", self.data_uri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tags() {
        assert_eq!(ImageFormat::default(), ImageFormat::Png);
        assert_eq!(ImageFormat::Png.to_string(), "png");
        assert_eq!(ImageFormat::Jpeg.mime_type(), "image/jpeg");
        assert_eq!(ImageFormat::Svg.mime_type(), "image/svg+xml");
    }

    #[test]
    fn test_embedding_markup() {
        let rendered = RenderedSparkline::new(ImageFormat::Png, b"abc".to_vec());
        assert_eq!(rendered.to_base64(), "YWJj");
        assert_eq!(rendered.data_uri(), "data:image/png;base64,YWJj");
        assert_eq!(rendered.to_html(), "<img src=\"data:image/png;base64,YWJj\"/>");
    }
}
