pub mod api;
pub mod cli;
pub mod document;
pub mod error;
pub mod extraction;
pub mod iter;
pub mod source;
pub mod types;

pub use api::{read, MetadataSource};
pub use cli::report::TextReport;
pub use error::{OmeMetaError, Result};
pub use iter::SeriesIter;
pub use source::{OmeXmlFile, OmeXmlSource};
pub use types::*;
