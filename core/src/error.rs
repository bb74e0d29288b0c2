use thiserror::Error;

/// Result type for omemeta operations
pub type Result<T> = std::result::Result<T, OmeMetaError>;

/// Error types for omemeta operations
#[derive(Error, Debug)]
pub enum OmeMetaError {
    /// The source could not be resolved to an OME-XML document
    #[error("Metadata unavailable: {0}")]
    MetadataUnavailable(String),

    /// A required field is absent for a series
    #[error("Series field missing: {0}")]
    SeriesFieldMissing(String),

    /// A field is present but its value cannot be parsed
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

// Convert quick-xml errors
impl From<quick_xml::Error> for OmeMetaError {
    fn from(e: quick_xml::Error) -> Self {
        OmeMetaError::MetadataUnavailable(format!("{}", e))
    }
}

impl From<quick_xml::events::attributes::AttrError> for OmeMetaError {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        OmeMetaError::MetadataUnavailable(format!("{}", e))
    }
}
