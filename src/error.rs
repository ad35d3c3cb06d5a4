use std::path::PathBuf;

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("zero mark at {zero} lies outside the axis segment [{begin}, {end}]")]
    ZeroOutsideAxis { zero: i32, begin: i32, end: i32 },

    #[error("font file not found: {}", path.display())]
    FontNotFound { path: PathBuf },

    #[error("drawing backend error: {0}")]
    Backend(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
