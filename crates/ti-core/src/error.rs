use thiserror::Error;

/// Errors originating from the conversion and history core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Target width or height missing, non-numeric, zero, or negative.
    #[error("Dimension invalide ({axis}) : {value:?}")]
    InvalidDimension {
        /// Which axis was rejected: "width" or "height".
        axis: &'static str,
        /// Raw value as supplied by the caller.
        value: String,
    },

    /// Conversion requested without an image.
    #[error("Aucune image sélectionnée")]
    NoImageSelected,

    /// Image bytes could not be read or decoded.
    #[error("Image illisible : {0}")]
    UnreadableImage(String),

    /// History append/read/clear failed.
    #[error("Erreur de persistance sur {path}")]
    Persistence {
        /// Path of the history resource.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),
}

impl CoreError {
    /// Shorthand for an [`CoreError::InvalidDimension`] on the given axis.
    #[must_use]
    pub fn invalid_dimension(axis: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidDimension {
            axis,
            value: value.into(),
        }
    }
}
