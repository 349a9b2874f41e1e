//! Image loaders

use std::future::Future;

use base64::Engine as _;
use serde::Deserialize;

use crate::data::ImageData;
use crate::error::{ImageLoadError, Result};
use crate::source::ImageSource;

/// Resolves an image URL into a drawable handle.
///
/// Each call is an independent load: implementations must not cache, and a
/// started load always settles with either a handle or an error.
pub trait ImageLoader {
    /// Handle produced on success
    type Image;

    /// Load `url`. With `anonymous` set the request is made without credentials.
    fn load(&self, url: &str, anonymous: bool) -> impl Future<Output = Result<Self::Image>>;
}

impl<L: ImageLoader + ?Sized> ImageLoader for &L {
    type Image = L::Image;

    fn load(&self, url: &str, anonymous: bool) -> impl Future<Output = Result<Self::Image>> {
        (**self).load(url, anonymous)
    }
}

/// Settings for [`UrlLoader`]
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// User agent sent with http(s) requests
    pub user_agent: String,
    /// Value of the `Authorization` header sent on credentialed requests
    pub credentials: Option<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("easel/", env!("CARGO_PKG_VERSION")).to_string(),
            credentials: None,
        }
    }
}

/// Default loader: local files, data URIs, and http(s) URLs when the
/// `network` feature is enabled
#[derive(Clone)]
pub struct UrlLoader {
    config: LoaderConfig,
    #[cfg(feature = "network")]
    http: reqwest::Client,
}

impl UrlLoader {
    /// Create a loader with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(LoaderConfig::default())
    }

    /// Create a loader with custom settings
    pub fn with_config(config: LoaderConfig) -> Result<Self> {
        #[cfg(feature = "network")]
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            config,
            #[cfg(feature = "network")]
            http,
        })
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    #[cfg(feature = "network")]
    async fn fetch(&self, url: &str, anonymous: bool) -> Result<Vec<u8>> {
        let mut request = self.http.get(url);
        if !anonymous {
            if let Some(credentials) = &self.config.credentials {
                request = request.header(reqwest::header::AUTHORIZATION, credentials.as_str());
            }
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImageLoadError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    #[cfg(not(feature = "network"))]
    async fn fetch(&self, url: &str, _anonymous: bool) -> Result<Vec<u8>> {
        Err(ImageLoadError::NetworkDisabled(url.to_string()))
    }
}

impl ImageLoader for UrlLoader {
    type Image = ImageData;

    async fn load(&self, url: &str, anonymous: bool) -> Result<ImageData> {
        let source = ImageSource::from_uri(url);
        tracing::debug!(?source, anonymous, "loading image");

        let hint = source.format_hint();
        let data = match source {
            ImageSource::Url(url) => {
                let bytes = self.fetch(&url, anonymous).await?;
                unblock(move || ImageData::decode(&bytes, hint)).await?
            }
            ImageSource::File(path) => {
                unblock(move || ImageData::decode(&std::fs::read(path)?, hint)).await?
            }
            ImageSource::DataUri(uri) => {
                unblock(move || ImageData::decode(&decode_data_uri(&uri)?, hint)).await?
            }
        };
        Ok(data.with_anonymous(anonymous))
    }
}

/// Run file reads and decoding on tokio's blocking pool when a runtime is
/// present, inline otherwise
#[cfg(feature = "network")]
async fn unblock<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Ok(runtime) => runtime.spawn_blocking(work).await?,
        Err(_) => work(),
    }
}

#[cfg(not(feature = "network"))]
async fn unblock<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    work()
}

/// Decode the payload of a `data:<mime>;base64,<payload>` URI
fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let unsupported = || ImageLoadError::UnsupportedDataUri(truncate(uri));
    let rest = uri.strip_prefix("data:").ok_or_else(unsupported)?;
    let (header, payload) = rest.split_once(',').ok_or_else(unsupported)?;
    if !header.split(';').any(|param| param == "base64") {
        return Err(unsupported());
    }
    Ok(base64::engine::general_purpose::STANDARD.decode(payload.trim())?)
}

fn truncate(uri: &str) -> String {
    uri.chars().take(48).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use std::io::Cursor;

    fn png_data_uri() -> String {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([0, 255, 0, 255]));
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
        let payload = base64::engine::general_purpose::STANDARD.encode(bytes.into_inner());
        format!("data:image/png;base64,{payload}")
    }

    #[test]
    fn test_load_data_uri() {
        let loader = UrlLoader::new().unwrap();
        let data = pollster::block_on(loader.load(&png_data_uri(), true)).unwrap();
        assert_eq!((data.width(), data.height()), (2, 2));
        assert!(data.is_anonymous());
    }

    #[test]
    fn test_every_load_decodes_afresh() {
        let loader = UrlLoader::new().unwrap();
        let uri = png_data_uri();
        let first = pollster::block_on(loader.load(&uri, false)).unwrap();
        let second = pollster::block_on(loader.load(&uri, false)).unwrap();
        assert_eq!(first, second);
        assert!(!std::ptr::eq(first.pixels(), second.pixels()));
    }

    #[test]
    fn test_load_file() {
        let path = std::env::temp_dir().join(format!("easel-loader-{}.png", std::process::id()));
        let img = image::RgbaImage::from_pixel(4, 1, image::Rgba([1, 2, 3, 255]));
        img.save(&path).unwrap();

        let loader = UrlLoader::new().unwrap();
        let data = pollster::block_on(loader.load(path.to_str().unwrap(), false));
        std::fs::remove_file(&path).ok();

        let data = data.unwrap();
        assert_eq!(data.width(), 4);
        assert_eq!(&data.pixels()[..4], &[1, 2, 3, 255]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let loader = UrlLoader::new().unwrap();
        let err = pollster::block_on(loader.load("/definitely/not/here.png", true)).unwrap_err();
        assert!(matches!(err, ImageLoadError::Io(_)));
    }

    #[test]
    fn test_non_base64_data_uri_rejected() {
        assert!(matches!(
            decode_data_uri("data:image/svg+xml,<svg/>"),
            Err(ImageLoadError::UnsupportedDataUri(_))
        ));
        assert!(matches!(
            decode_data_uri("data:image/png;base64,@@@"),
            Err(ImageLoadError::Base64(_))
        ));
    }

    #[test]
    fn test_corrupt_payload_is_decode_error() {
        let loader = UrlLoader::new().unwrap();
        let err = pollster::block_on(loader.load("data:image/png;base64,aGVsbG8=", true)).unwrap_err();
        assert!(matches!(err, ImageLoadError::Decode(_)));
    }

    #[cfg(feature = "network")]
    #[tokio::test(flavor = "multi_thread")]
    async fn test_file_loads_share_the_blocking_pool() {
        let dir = std::env::temp_dir();
        let paths: Vec<_> = (0..3u8)
            .map(|i| {
                let path = dir.join(format!("easel-pool-{}-{i}.png", std::process::id()));
                image::RgbaImage::from_pixel(1, 1, image::Rgba([i, 0, 0, 255]))
                    .save(&path)
                    .unwrap();
                path
            })
            .collect();

        let loader = UrlLoader::new().unwrap();
        let (a, b, c) = tokio::join!(
            loader.load(paths[0].to_str().unwrap(), true),
            loader.load(paths[1].to_str().unwrap(), true),
            loader.load(paths[2].to_str().unwrap(), true),
        );
        for path in &paths {
            std::fs::remove_file(path).ok();
        }

        for (i, data) in [a, b, c].into_iter().enumerate() {
            assert_eq!(data.unwrap().pixels()[0], i as u8);
        }
    }

    #[cfg(feature = "network")]
    #[tokio::test]
    async fn test_missing_file_inside_runtime() {
        let loader = UrlLoader::new().unwrap();
        let err = loader.load("/definitely/not/here.png", true).await.unwrap_err();
        assert!(matches!(err, ImageLoadError::Io(_)));
    }

    #[cfg(not(feature = "network"))]
    #[test]
    fn test_url_without_network_feature() {
        let loader = UrlLoader::new().unwrap();
        let err = pollster::block_on(loader.load("https://example.com/a.png", true)).unwrap_err();
        assert!(matches!(err, ImageLoadError::NetworkDisabled(_)));
    }
}
