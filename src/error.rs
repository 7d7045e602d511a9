// Every variant states *where* things went wrong.
// The capture engine itself never fails; these cover encoding, config and the demo window.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Creating the window failed
    #[error("Window init error: {0}")]
    WindowInit(String),

    /// Updating the window buffer failed
    #[error("Window update error: {0}")]
    WindowUpdate(String),

    /// Encoding the surface to PNG failed
    #[error("Encode error: {0}")]
    Encode(#[from] image::ImageError),

    /// Config file could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
