//! Image reference classification

use std::path::PathBuf;

/// Where an image URL points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Local file path
    File(PathBuf),

    /// Remote http(s) URL (requires the "network" feature to load)
    Url(String),

    /// Data URI, kept whole (e.g. "data:image/png;base64,...")
    DataUri(String),
}

impl ImageSource {
    /// Classify a URL string.
    ///
    /// Supported formats:
    /// - `http://...` or `https://...` - remote URL
    /// - `data:image/png;base64,...` - inline data
    /// - `file:///path/to/image.png` - file URI
    /// - anything else is treated as a file path
    pub fn from_uri(uri: &str) -> Self {
        if uri.starts_with("data:") {
            Self::DataUri(uri.to_string())
        } else if uri.starts_with("http://") || uri.starts_with("https://") {
            Self::Url(uri.to_string())
        } else if let Some(path) = uri.strip_prefix("file://") {
            Self::File(PathBuf::from(path))
        } else {
            Self::File(PathBuf::from(uri))
        }
    }

    /// Format hint derived from the file extension or data URI MIME type
    pub fn format_hint(&self) -> Option<ImageFormat> {
        match self {
            Self::File(path) => path
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(ImageFormat::from_extension),
            Self::Url(url) => url
                .split(['?', '#'])
                .next()
                .and_then(|path| path.rsplit_once('.'))
                .and_then(|(_, ext)| ImageFormat::from_extension(ext)),
            Self::DataUri(uri) => uri
                .strip_prefix("data:")
                .and_then(|rest| rest.split([';', ',']).next())
                .and_then(ImageFormat::from_mime),
        }
    }
}

/// Image format hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    WebP,
    Bmp,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "gif" => Some(Self::Gif),
            "webp" => Some(Self::WebP),
            "bmp" => Some(Self::Bmp),
            _ => None,
        }
    }

    /// Detect format from MIME type
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/gif" => Some(Self::Gif),
            "image/webp" => Some(Self::WebP),
            "image/bmp" => Some(Self::Bmp),
            _ => None,
        }
    }
}

impl From<ImageFormat> for image::ImageFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Gif => image::ImageFormat::Gif,
            ImageFormat::WebP => image::ImageFormat::WebP,
            ImageFormat::Bmp => image::ImageFormat::Bmp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_uri_classification() {
        assert_eq!(
            ImageSource::from_uri("https://example.com/a.png"),
            ImageSource::Url("https://example.com/a.png".into())
        );
        assert_eq!(
            ImageSource::from_uri("file:///tmp/a.png"),
            ImageSource::File(PathBuf::from("/tmp/a.png"))
        );
        assert_eq!(
            ImageSource::from_uri("assets/a.png"),
            ImageSource::File(PathBuf::from("assets/a.png"))
        );
        assert!(matches!(
            ImageSource::from_uri("data:image/png;base64,AAAA"),
            ImageSource::DataUri(_)
        ));
    }

    #[test]
    fn test_format_hint() {
        assert_eq!(
            ImageSource::from_uri("photo.JPG").format_hint(),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageSource::from_uri("https://cdn.example.com/x.webp?v=2").format_hint(),
            Some(ImageFormat::WebP)
        );
        assert_eq!(
            ImageSource::from_uri("data:image/gif;base64,R0lG").format_hint(),
            Some(ImageFormat::Gif)
        );
        assert_eq!(ImageSource::from_uri("noext").format_hint(), None);
    }
}
