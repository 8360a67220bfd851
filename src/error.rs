use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid timesheet JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(
        "notes to interpreter are {len} characters long (limit {max}); shorten the text to keep it inside its column"
    )]
    NotesTooLong { len: usize, max: usize },
    #[error("block needs {height:.1}mm but a page only has {available:.1}mm of usable height")]
    BlockTooTall { height: f32, available: f32 },
    #[error("export failed: {0}")]
    Export(String),
}

/// Failure to obtain the letterhead logo. Always recovered from.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("no logo configured")]
    Unavailable,
    #[error("logo read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("logo fetch failed: {0}")]
    Fetch(String),
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Failure to turn an image payload into something embeddable.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("malformed data URL")]
    MalformedDataUrl,
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("undecodable image: {0}")]
    Decode(#[from] image::ImageError),
}
