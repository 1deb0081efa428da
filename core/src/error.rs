/// Error type for image-to-mem conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to decode input image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid target size {width}x{height}: dimensions must be non-zero")]
    BadDimensions { width: u32, height: u32 },
}

pub type Result<T> = core::result::Result<T, ConvertError>;
