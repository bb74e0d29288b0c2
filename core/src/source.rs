use crate::error::{OmeMetaError, Result};
use std::path::Path;

/// Seam to the external metadata-extraction collaborator
///
/// An implementation resolves an image file path to the OME-XML text
/// describing it. Implementations that bridge a native extraction library
/// own that library's runtime handle themselves; callers must have it
/// initialized before [`crate::MetadataSource::read`] is invoked. This
/// crate never starts or stops such a runtime.
pub trait OmeXmlSource {
    /// Resolves `path` to OME-XML text
    ///
    /// # Errors
    ///
    /// Returns [`OmeMetaError::MetadataUnavailable`] when the path does not
    /// resolve or the collaborator cannot produce OME-XML for it.
    fn ome_xml(&self, path: &Path) -> Result<String>;
}

/// Source for files that already contain OME-XML
///
/// Covers `.ome.xml` sidecars and exported OME documents. No format
/// sniffing is performed; whatever the file holds is handed to the
/// document parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct OmeXmlFile;

impl OmeXmlSource for OmeXmlFile {
    fn ome_xml(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| {
            OmeMetaError::MetadataUnavailable(format!("{}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_source_reads_contents() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "<OME/>").unwrap();

        let xml = OmeXmlFile.ome_xml(file.path()).unwrap();
        assert_eq!(xml, "<OME/>");
    }

    #[test]
    fn test_file_source_missing_path() {
        let err = OmeXmlFile
            .ome_xml(Path::new("/no/such/file.ome.xml"))
            .unwrap_err();
        assert!(matches!(err, OmeMetaError::MetadataUnavailable(_)));
        assert!(err.to_string().contains("file.ome.xml"));
    }
}
