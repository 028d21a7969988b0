use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pxgrid operations
#[derive(Error, Diagnostic, Debug)]
pub enum PxGridError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pxgrid::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pxgrid::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid colour format: {message}")]
    #[diagnostic(code(pxgrid::format))]
    Format {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Image error with {path}: {message}")]
    #[diagnostic(code(pxgrid::image))]
    Image {
        path: std::path::PathBuf,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, PxGridError>;
