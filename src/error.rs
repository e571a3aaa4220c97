//! Error types for asset generation

use std::io::Write;
use std::path::PathBuf;

/// Result type used throughout the crate
pub type GenerationResult<T> = Result<T, GenerationError>;

#[derive(thiserror::Error, Debug)]
pub enum GenerationError {
    /// The image codec needed to draw or read the assets was not compiled in
    #[error("{capability} support not found")]
    MissingDrawingCapability { capability: &'static str },

    #[error("Mask is {}x{}, expected {}x{}", found.0, found.1, expected.0, expected.1)]
    MaskSize {
        expected: (u32, u32),
        found: (u32, u32),
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid settings file '{}': {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl GenerationError {
    /// Remedy lines shown to the user, if this error has any
    pub fn remedies(&self) -> Vec<String> {
        match self {
            GenerationError::MissingDrawingCapability { .. } => vec![
                "Rebuild with it enabled: cargo run --features png".to_string(),
                String::new(),
                format!(
                    "Alternatively, open {} in a browser",
                    crate::constants::BROWSER_FALLBACK_PAGE
                ),
                "and download the images manually.".to_string(),
            ],
            _ => Vec::new(),
        }
    }

    /// Print the error for the user.
    ///
    /// A missing capability is reported on `out` next to the progress lines,
    /// with its remedies. Everything else goes to `err`.
    pub fn write_report(&self, out: &mut impl Write, err: &mut impl Write) -> std::io::Result<()> {
        match self {
            GenerationError::MissingDrawingCapability { .. } => {
                writeln!(out, "Error: {}", self)?;
                for line in self.remedies() {
                    writeln!(out, "{}", line)?;
                }
            }
            _ => writeln!(err, "Error: {}", self)?,
        }
        Ok(())
    }
}
