use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColorAnalysisError>;

#[derive(Debug, Error)]
pub enum ColorAnalysisError {
    /// The image could not be decoded, has no pixels, or is not a 3-channel raster.
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    #[error("Image resize failed: {0}")]
    Resize(String),
}

impl ColorAnalysisError {
    pub(crate) fn invalid_parameter(parameter: &str, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.to_string(),
            value: value.to_string(),
        }
    }

    /// Text that can be shown to whoever uploaded the image.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidImage(_) => {
                "Failed to read the image. Please upload a valid image file.".to_string()
            }
            Self::InvalidParameter { parameter, value } => {
                format!("Invalid value for {parameter}: {value}")
            }
            Self::Resize(_) => "The image could not be processed.".to_string(),
        }
    }
}

impl From<image::ImageError> for ColorAnalysisError {
    fn from(err: image::ImageError) -> Self {
        Self::InvalidImage(err.to_string())
    }
}

impl From<fast_image_resize::ResizeError> for ColorAnalysisError {
    fn from(err: fast_image_resize::ResizeError) -> Self {
        Self::Resize(err.to_string())
    }
}

impl From<fast_image_resize::ImageBufferError> for ColorAnalysisError {
    fn from(err: fast_image_resize::ImageBufferError) -> Self {
        Self::Resize(err.to_string())
    }
}
