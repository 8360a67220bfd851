use std::path::PathBuf;

use crate::document::EmbeddedImage;
use crate::error::AssetError;
use crate::images::decode_image;

/// Where the letterhead logo comes from. Fetch failures are never fatal: the
/// header draws a placeholder instead.
pub trait LogoSource {
    fn fetch(&self) -> Result<Vec<u8>, AssetError>;

    fn describe(&self) -> String;
}

/// No logo configured; always renders the placeholder.
pub struct NoLogo;

impl LogoSource for NoLogo {
    fn fetch(&self) -> Result<Vec<u8>, AssetError> {
        Err(AssetError::Unavailable)
    }

    fn describe(&self) -> String {
        "none".to_string()
    }
}

pub struct FileLogo(pub PathBuf);

impl LogoSource for FileLogo {
    fn fetch(&self) -> Result<Vec<u8>, AssetError> {
        Ok(std::fs::read(&self.0)?)
    }

    fn describe(&self) -> String {
        self.0.display().to_string()
    }
}

#[cfg(feature = "remote-logo")]
pub struct HttpLogo {
    pub url: String,
    pub timeout: std::time::Duration,
}

#[cfg(feature = "remote-logo")]
impl HttpLogo {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: std::time::Duration::from_secs(10),
        }
    }
}

#[cfg(feature = "remote-logo")]
impl LogoSource for HttpLogo {
    fn fetch(&self) -> Result<Vec<u8>, AssetError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| AssetError::Fetch(e.to_string()))?;
        let response = client
            .get(&self.url)
            .send()
            .map_err(|e| AssetError::Fetch(e.to_string()))?;
        if !response.status().is_success() {
            return Err(AssetError::Fetch(format!("HTTP {}", response.status())));
        }
        let bytes = response
            .bytes()
            .map_err(|e| AssetError::Fetch(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Pick a source for a configured logo location: `http(s)://` URLs are
/// fetched, anything else is read from disk.
pub fn logo_source(location: Option<&str>) -> Box<dyn LogoSource> {
    match location.map(str::trim).filter(|l| !l.is_empty()) {
        None => Box::new(NoLogo),
        #[cfg(feature = "remote-logo")]
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
            Box::new(HttpLogo::new(url))
        }
        Some(path) => Box::new(FileLogo(PathBuf::from(path))),
    }
}

/// Fetch and decode the logo, or `None` when either step fails.
pub fn load_logo(source: &dyn LogoSource) -> Option<EmbeddedImage> {
    let loaded = source
        .fetch()
        .and_then(|bytes| decode_image(&bytes).map_err(AssetError::from));
    match loaded {
        Ok(image) => Some(image),
        Err(AssetError::Unavailable) => None,
        Err(e) => {
            log::warn!("Logo loading failed ({}): {e}; using placeholder", source.describe());
            None
        }
    }
}
